pub mod document_panel;
pub mod interaction_panel;
pub mod status_views;
pub mod view_tabs;

pub use document_panel::DocumentPanel;
pub use interaction_panel::InteractionPanel;
pub use view_tabs::ViewTabs;
