use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::layout::Layout;
use crate::session::SelectedFile;

/// Picks the window's inner size, or the root element's client size when
/// the window reports nothing usable (hidden iframes, some webviews).
pub fn pick_viewport_size(
    inner: Option<(f64, f64)>,
    client: Option<(i32, i32)>,
) -> Option<(u32, u32)> {
    if let Some((width, height)) = inner.filter(|(w, h)| *w > 0.0 && *h > 0.0) {
        return Some((width.round() as u32, height.round() as u32));
    }
    client.map(|(width, height)| (width.max(0) as u32, height.max(0) as u32))
}

/// Measures the viewport and derives the app layout from it.
pub fn measure_layout() -> Option<Layout> {
    let window = window()?;
    let inner = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .zip(window.inner_height().ok().and_then(|h| h.as_f64()));
    let client = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| (root.client_width(), root.client_height()));

    pick_viewport_size(inner, client).map(Layout::from_viewport)
}

/// Layout for the current viewport; a zero-sized one outside a browser.
pub fn viewport_layout() -> Layout {
    measure_layout().unwrap_or_else(|| Layout::from_viewport((0, 0)))
}

/// Readable text for a thrown JS value: the string itself, an `Error`'s
/// `message`, or the debug form.
pub fn js_error_text(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

fn file_input(input_id: &str) -> Option<HtmlInputElement> {
    window()?
        .document()?
        .get_element_by_id(input_id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// Open the native file picker behind a hidden `<input type="file">`.
pub fn open_file_picker(input_id: &str) {
    if let Some(input) = file_input(input_id) {
        input.click();
    }
}

/// Take the first file out of a file input and reset the input so picking
/// the same file again still fires `change`.
pub fn take_selected_file(input_id: &str) -> Option<SelectedFile<web_sys::File>> {
    let input = file_input(input_id)?;
    let file = input.files()?.get(0)?;
    input.set_value("");

    Some(SelectedFile {
        name: file.name(),
        size: file.size().max(0.0) as u64,
        media_type: file.type_(),
        handle: file,
    })
}

pub fn scroll_into_view(element_id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
