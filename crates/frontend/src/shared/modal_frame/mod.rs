use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay with a centered surface; the content brings its own header
#[component]
pub fn ModalFrame(
    /// Overlay click or Escape
    on_close: Callback<()>,
    /// Extra class for the surface
    #[prop(optional)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    // Close only when both press and release land on the overlay, so a text
    // selection dragged out of the form does not dismiss it.
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let on_mouse_down = move |ev: ev::MouseEvent| pressed_on_overlay.set(is_overlay(&ev));

    let on_click = move |ev: ev::MouseEvent| {
        let close = pressed_on_overlay.get() && is_overlay(&ev);
        pressed_on_overlay.set(false);
        if close {
            // next tick: the overlay must not be removed during its own dispatch
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let on_key_down = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    };

    let surface_class = match modal_class {
        Some(extra) => format!("modal-surface {extra}"),
        None => "modal-surface".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            tabindex="-1"
            on:mousedown=on_mouse_down
            on:click=on_click
            on:keydown=on_key_down
        >
            <div class=surface_class role="dialog" aria-modal="true">
                {children()}
            </div>
        </div>
    }
}
