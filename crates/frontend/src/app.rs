use crate::routes::routes::AppRoutes;
use crate::shared::modal_form::ModalFormService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One modal form for the whole app
    provide_context(ModalFormService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
