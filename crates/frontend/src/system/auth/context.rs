use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn user_name(&self) -> Option<String> {
        self.user_info.as_ref().map(|u| u.name.clone())
    }
}

/// Auth context provider component
///
/// A stored token is trusted right away so a reload lands on the page it
/// left; it is dropped once `/me` rejects it.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let stored = storage::get_access_token();
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: stored.clone(),
        user_info: None,
    });

    if let Some(access_token) = stored {
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => set_auth_state.update(|s| s.user_info = Some(user_info)),
                Err(e) => {
                    log::info!("Stored session rejected: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a fresh login and switch to the app
pub fn apply_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
}

/// Logout is client side: the token is simply forgotten
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
