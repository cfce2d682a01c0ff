use crate::dashboards::d400_daily_summary::ui::DashboardPage;
use crate::dashboards::d401_statistics::ui::StatisticsPage;
use crate::layout::{Navbar, SettingsPage};
use crate::projections::p900_history::ui::HistoryPage;
use crate::routes::page::Page;
use crate::shared::modal_form::ModalFormHost;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let page = RwSignal::new(Page::current());

    view! {
        <Navbar page=page />
        <main class="container mt-3">
            {move || match page.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::History => view! { <HistoryPage /> }.into_any(),
                Page::Statistics => view! { <StatisticsPage /> }.into_any(),
                Page::Settings => view! { <SettingsPage /> }.into_any(),
            }}
        </main>
        <ModalFormHost />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
