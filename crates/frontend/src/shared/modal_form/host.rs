use contracts::shared::form_fields::FormFields;
use contracts::shared::modal_form::{CONTENT_ID, FORM_ID, MODAL_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};

use super::controller::{Effect, ModalFormController};
use super::model;
use crate::shared::modal_frame::ModalFrame;

/// Handle to the page's single modal form
#[derive(Clone, Copy)]
pub struct ModalFormService {
    state: RwSignal<ModalFormController>,
}

impl ModalFormService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ModalFormController::new()),
        }
    }

    /// Open the modal with the form behind `url`
    pub fn open(&self, url: String) {
        if let Some(effect) = self.state.try_update(|c| c.open(url)) {
            self.run(effect);
        }
    }

    pub fn close(&self) {
        self.state.update(|c| c.close());
    }

    fn submit(&self, body: String) {
        if let Some(Some(effect)) = self.state.try_update(|c| c.submit(body)) {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let state = self.state;
        match effect {
            Effect::Fetch { url, generation } => spawn_local(async move {
                let result = model::fetch_fragment(&url).await;
                if let Err(e) = &result {
                    log::warn!("Modal GET {} failed: {}", url, e);
                }
                state.update(|c| {
                    c.loaded(generation, result);
                });
            }),
            Effect::Post {
                url,
                body,
                generation,
            } => spawn_local(async move {
                match model::submit_form(&url, body).await {
                    Ok(outcome) => {
                        let next = state.try_update(|c| c.responded(generation, outcome)).flatten();
                        if next == Some(Effect::Reload) {
                            reload_page();
                        }
                    }
                    Err(e) => {
                        log::warn!("Modal POST {} failed: {}", url, e);
                        state.update(|c| {
                            c.failed(generation, e);
                        });
                    }
                }
            }),
            Effect::Reload => reload_page(),
        }
    }
}

impl Default for ModalFormService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_form() -> ModalFormService {
    use_context::<ModalFormService>().expect("ModalFormService not provided in context")
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("Page reload failed: {:?}", e);
        }
    }
}

/// Serialize the form's text fields in document order
fn serialize_form(form: &HtmlFormElement) -> Option<String> {
    let data = FormData::new_with_form(form).ok()?;
    let mut fields = FormFields::default();
    let entries = js_sys::try_iter(&data).ok()??;
    for entry in entries.flatten() {
        let pair: js_sys::Array = entry.unchecked_into();
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push(name, value);
        }
    }
    Some(fields.encode())
}

/// Renders the modal and runs the submit cycle for whatever form it shows
///
/// The submit listener sits on the content container. Each fragment gets a
/// fresh container carrying exactly one listener.
#[component]
pub fn ModalFormHost() -> impl IntoView {
    let service = use_modal_form();
    let state = service.state;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        if form.id() != FORM_ID {
            return;
        }
        ev.prevent_default();
        match serialize_form(&form) {
            Some(body) => service.submit(body),
            None => log::error!("Could not serialize #{}", FORM_ID),
        }
    };

    view! {
        <Show when=move || state.with(|c| c.is_open())>
            <ModalFrame
                on_close=Callback::new(move |_| service.close())
                modal_class="modal-form-surface".to_string()
            >
                <div id=MODAL_ID>
                    <button type="button" class="close" aria-label="Close" on:click=move |_| service.close()>
                        "×"
                    </button>
                    {move || {
                        state
                            .with(|c| c.error().map(str::to_string))
                            .map(|e| view! { <div class="alert alert-danger">{e}</div> })
                    }}
                    <Show when=move || state.with(|c| c.content().is_none() && c.error().is_none())>
                        <div class="modal-body text-muted">"Loading…"</div>
                    </Show>
                    // rebuilt per revision so a repeated identical fragment
                    // still replaces whatever the user left in the DOM
                    {move || {
                        let _revision = state.with(|c| c.revision());
                        let html = state.with_untracked(|c| c.content().unwrap_or_default().to_string());
                        view! { <div id=CONTENT_ID on:submit=on_submit inner_html=html></div> }
                    }}
                </div>
            </ModalFrame>
        </Show>
    }
}
