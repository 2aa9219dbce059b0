use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::interop::{measure_layout, viewport_layout};
use crate::layout::Layout;

fn refresh_layout(mut layout: Signal<Layout>) {
    let Some(next) = measure_layout() else {
        return;
    };
    if *layout.peek() != next {
        layout.set(next);
    }
}

/// Re-measures the layout on `resize` and `orientationchange` for the
/// lifetime of the page.
pub async fn watch_layout(layout: Signal<Layout>) {
    refresh_layout(layout);

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        refresh_layout(layout);
    }) as Box<dyn FnMut(web_sys::Event)>);

    for event in ["resize", "orientationchange"] {
        let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

/// Viewport observer: one `Layout` per resize, shared by every pane.
pub fn use_viewport_layout() -> Memo<Layout> {
    let layout = use_signal(viewport_layout);

    use_effect(move || {
        spawn(async move {
            watch_layout(layout).await;
        });
    });

    use_memo(move || layout())
}
