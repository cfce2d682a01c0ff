use contracts::shared::modal_form::TRIGGER_CLASS;
use leptos::prelude::*;

use super::host::use_modal_form;

/// Trigger that opens the modal form behind `url`
#[component]
pub fn ModalButton(
    /// Action URL, e.g. `/api/guinea_pig/edit/3`
    #[prop(into)]
    url: String,
    /// Extra button classes
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let modal = use_modal_form();
    let classes = format!(
        "btn {} {}",
        class.unwrap_or_else(|| "btn-outline-primary btn-sm".to_string()),
        TRIGGER_CLASS
    );
    let action = url.clone();

    view! {
        <button
            type="button"
            class=classes
            data-action=url
            on:click=move |ev| {
                ev.prevent_default();
                modal.open(action.clone());
            }
        >
            {children()}
        </button>
    }
}
