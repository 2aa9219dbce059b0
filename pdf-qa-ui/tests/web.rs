#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use pdf_qa_ui::{
    interop, upload_document, validate_pdf, DocumentError, HttpBackend, SelectedFile,
    ValidationError,
};
use shared_types::PDF_MEDIA_TYPE;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn browser_file(name: &str, media_type: &str, body: &str) -> SelectedFile<File> {
    let parts = Array::of1(&JsValue::from_str(body));
    let options = FilePropertyBag::new();
    options.set_type(media_type);
    let file = File::new_with_str_sequence_and_options(&parts, name, &options)
        .expect("construct File");

    SelectedFile {
        name: file.name(),
        size: file.size() as u64,
        media_type: file.type_(),
        handle: file,
    }
}

#[wasm_bindgen_test]
fn browser_pdf_passes_validation() {
    let file = browser_file("paper.pdf", PDF_MEDIA_TYPE, "%PDF-1.4");
    assert_eq!(file.size, 8);
    assert_eq!(validate_pdf(&file.media_type, file.size), Ok(()));
}

#[wasm_bindgen_test]
async fn non_pdf_is_rejected_before_any_request() {
    // Nothing listens on the discard port; reaching the network would fail
    // with a transport error instead of a validation error.
    let backend = HttpBackend::new("http://127.0.0.1:9");
    let file = browser_file("notes.txt", "text/plain", "hello");

    let err = upload_document(&backend, &file).await.unwrap_err();
    assert_eq!(
        err,
        DocumentError::Validation(ValidationError::NotPdf {
            media_type: "text/plain".to_string()
        })
    );
    assert_eq!(err.to_string(), "Please upload a valid PDF file.");
}

#[wasm_bindgen_test]
fn viewport_is_measurable() {
    let layout = interop::measure_layout().expect("browser window");
    assert!(layout.width > 0);
    assert!(layout.height > 0);
    assert_eq!(interop::viewport_layout(), layout);
}

#[wasm_bindgen_test]
fn thrown_values_become_readable_text() {
    assert_eq!(interop::js_error_text(JsValue::from_str("plain")), "plain");
    let error: JsValue = js_sys::Error::new("PasswordException").into();
    assert_eq!(interop::js_error_text(error), "PasswordException");
}

#[wasm_bindgen_test]
fn scrolling_to_a_missing_element_is_a_no_op() {
    interop::scroll_into_view("no-such-element");
}
