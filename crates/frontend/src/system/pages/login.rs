use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::apply_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let name_val = name.get_untracked();
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(name_val).await {
                Ok(response) => apply_login(response, set_auth_state),
                Err(e) => set_error_message.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="container login-container">
            <div class="card login-box mx-auto mt-5" style="max-width: 24rem;">
                <div class="card-body">
                    <h1 class="h3 mb-3">"🐹 Guinea pigs"</h1>

                    <Show when=move || error_message.get().is_some()>
                        <div class="alert alert-danger">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                class="form-control"
                                maxlength="64"
                                autofocus
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
