//! PDF Q&A single-page app: header, document pane, interaction pane.

use dioxus::prelude::*;

mod actions;
mod components;
mod effects;
mod shell;
mod styles;

pub use actions::{submit_question, upload_selected, SessionStore};
pub use shell::AppShell;

use crate::session::Session;

/// Session bound to browser `File` handles.
pub type BrowserSession = Session<web_sys::File>;

#[component]
pub fn PdfQaApp() -> Element {
    rsx! {
        AppShell {}
    }
}
