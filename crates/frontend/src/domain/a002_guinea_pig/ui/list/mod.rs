use contracts::domain::a002_guinea_pig::aggregate::GuineaPig;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::shared::modal_form::ModalButton;

#[component]
#[allow(non_snake_case)]
pub fn GuineaPigList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<GuineaPig>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match get_json::<Vec<GuineaPig>>(&format!("/api/{}", GuineaPig::collection_name())).await {
            Ok(v) => set_items.set(v),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="card mb-3">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>"🐹 " {GuineaPig::list_name()}</span>
                <ModalButton url=GuineaPig::add_url()>"Add"</ModalButton>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="alert alert-danger m-2">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <ul class="list-group list-group-flush">
                <For
                    each=move || items.get()
                    key=|pig| pig.id
                    children=move |pig: GuineaPig| {
                        view! {
                            <li class="list-group-item d-flex justify-content-between align-items-center">
                                {pig.name.clone()}
                                <ModalButton url=GuineaPig::edit_url(pig.id)>"Edit"</ModalButton>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
