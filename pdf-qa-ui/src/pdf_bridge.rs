//! pdf.js bindings. Parsing and rasterising happen in JavaScript
//! (`public/pdf_bridge.js`); Rust only holds integer handles.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::errors::RenderError;
use crate::interop::js_error_text;

const PDFJS_SRC: &str = "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.min.js";
const PDFJS_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";
const BRIDGE_SRC: &str = "/pdf_bridge.js";

#[wasm_bindgen(js_namespace = window)]
extern "C" {
    #[wasm_bindgen(js_name = pdfBridgeLoad, catch)]
    fn pdf_bridge_load(file: &web_sys::File, worker_src: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_name = pdfBridgeRender, catch)]
    fn pdf_bridge_render(
        handle: u32,
        page: u32,
        scale: f64,
        canvas_id: &str,
        max_width: u32,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_name = pdfBridgeDispose)]
    fn pdf_bridge_dispose(handle: u32);
}

/// A document parsed by pdf.js. Disposed when dropped.
#[derive(Debug)]
pub struct LoadedPdf {
    handle: u32,
    page_count: u32,
}

impl LoadedPdf {
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Draws `page` into the canvas with id `canvas_id`. `max_width` of
    /// `None` leaves the page at `scale`; otherwise it is shrunk to fit.
    pub async fn render_page(
        &self,
        page: u32,
        scale: f64,
        canvas_id: &str,
        max_width: Option<u32>,
    ) -> Result<(), RenderError> {
        let promise = pdf_bridge_render(
            self.handle,
            page,
            scale,
            canvas_id,
            max_width.unwrap_or(0),
        )
        .map_err(|e| RenderError::new(js_error_text(e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| RenderError::new(js_error_text(e)))?;
        Ok(())
    }
}

impl Drop for LoadedPdf {
    fn drop(&mut self) {
        pdf_bridge_dispose(self.handle);
    }
}

pub async fn load_pdf(file: &web_sys::File) -> Result<LoadedPdf, RenderError> {
    ensure_pdf_scripts().map_err(|e| RenderError::new(js_error_text(e)))?;
    if !wait_for_pdf_bridge().await {
        return Err(RenderError::new("pdf.js did not finish loading"));
    }

    let promise =
        pdf_bridge_load(file, PDFJS_WORKER_SRC).map_err(|e| RenderError::new(js_error_text(e)))?;
    let loaded = JsFuture::from(promise)
        .await
        .map_err(|e| RenderError::new(js_error_text(e)))?;

    let handle = read_u32(&loaded, "handle")?;
    let page_count = read_u32(&loaded, "numPages")?;
    Ok(LoadedPdf { handle, page_count })
}

fn read_u32(value: &JsValue, key: &str) -> Result<u32, RenderError> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32)
        .ok_or_else(|| RenderError::new(format!("pdf bridge returned no {key}")))
}

fn ensure_pdf_scripts() -> Result<(), JsValue> {
    ensure_script("pdfjs-lib", PDFJS_SRC)?;
    ensure_script("pdf-bridge-js", BRIDGE_SRC)?;
    Ok(())
}

fn ensure_script(id: &str, src: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }

    let script: web_sys::HtmlScriptElement = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_id(id);
    script.set_src(src);
    script.set_async(false);

    if let Some(head) = document.head() {
        head.append_child(&script)?;
    } else if let Some(body) = document.body() {
        body.append_child(&script)?;
    }

    Ok(())
}

async fn wait_for_pdf_bridge() -> bool {
    for _ in 0..50 {
        if has_global("pdfjsLib") && has_global("pdfBridgeLoad") {
            return true;
        }
        TimeoutFuture::new(100).await;
    }
    false
}

fn has_global(name: &str) -> bool {
    let global = js_sys::global();
    Reflect::has(&global, &JsValue::from_str(name)).unwrap_or(false)
}
