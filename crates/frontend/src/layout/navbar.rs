use leptos::prelude::*;

use crate::routes::page::Page;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Navbar(page: RwSignal<Page>) -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let links = Page::ALL
        .into_iter()
        .map(|target| {
            view! {
                <li class="nav-item" class:active=move || page.get() == target>
                    <a
                        class="nav-link"
                        href=target.hash()
                        on:click=move |ev| {
                            ev.prevent_default();
                            target.remember();
                            page.set(target);
                        }
                    >
                        {target.title()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-dark">
            <span class="navbar-brand">"🐹 Guinea pigs"</span>
            <ul class="navbar-nav mr-auto">{links}</ul>
            <span class="navbar-text mr-3">
                {move || auth_state.get().user_name().unwrap_or_default()}
            </span>
            <button class="btn btn-outline-light btn-sm" on:click=move |_| do_logout(set_auth_state)>
                "Logout"
            </button>
        </nav>
    }
}
