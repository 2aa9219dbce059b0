//! Responsive layout derived from the viewport, and the view-mode machine.

/// Viewports narrower than this switch to the single-pane layout.
pub const NARROW_BREAKPOINT_PX: u32 = 768;
pub const HEADER_FOOTER_PX: u32 = 120;
pub const TAB_BAR_PX: u32 = 50;
const SMALL_PAGE_MARGIN_PX: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportTier {
    Small,
    Normal,
}

/// Everything the panes need to know about the viewport, computed once per
/// resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub tier: ViewportTier,
}

impl Layout {
    pub fn from_viewport((width, height): (u32, u32)) -> Self {
        let tier = if width < NARROW_BREAKPOINT_PX {
            ViewportTier::Small
        } else {
            ViewportTier::Normal
        };
        Self {
            width,
            height,
            tier,
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.tier == ViewportTier::Small
    }

    /// Height left for the main area once header and footer are placed.
    pub fn content_height(&self) -> u32 {
        self.height.saturating_sub(HEADER_FOOTER_PX)
    }

    /// Fixed pane height on narrow screens; wide screens let panes fill.
    pub fn pane_height(&self) -> Option<u32> {
        self.is_narrow()
            .then(|| self.content_height().saturating_sub(TAB_BAR_PX))
    }

    pub fn page_scale(&self) -> f64 {
        match self.tier {
            ViewportTier::Small => 0.8,
            ViewportTier::Normal => 1.0,
        }
    }

    /// Target page width in CSS pixels, only constrained on small screens.
    pub fn page_width(&self) -> Option<u32> {
        self.is_narrow()
            .then(|| self.width.saturating_sub(SMALL_PAGE_MARGIN_PX))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Document,
    Interaction,
    Combined,
}

impl ViewMode {
    pub fn shows_document(self) -> bool {
        matches!(self, ViewMode::Document | ViewMode::Combined)
    }

    pub fn shows_interaction(self) -> bool {
        matches!(self, ViewMode::Interaction | ViewMode::Combined)
    }
}

/// View-mode state machine.
///
/// Transitions only fire when the narrow flag or document presence changes,
/// so a user toggle survives height-only resizes (mobile keyboards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewModeController {
    mode: ViewMode,
    narrow: Option<bool>,
    has_document: bool,
}

impl Default for ViewModeController {
    fn default() -> Self {
        Self {
            mode: ViewMode::Combined,
            narrow: None,
            has_document: false,
        }
    }
}

impl ViewModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn observe(&mut self, narrow: bool, has_document: bool) -> ViewMode {
        if self.narrow == Some(narrow) && self.has_document == has_document {
            return self.mode;
        }
        self.narrow = Some(narrow);
        self.has_document = has_document;
        self.mode = match (narrow, has_document) {
            (false, _) => ViewMode::Combined,
            (true, true) => ViewMode::Document,
            (true, false) => ViewMode::Combined,
        };
        self.mode
    }

    fn can_switch(&self) -> bool {
        self.narrow == Some(true) && self.has_document
    }

    /// Swaps document and interaction panes on narrow viewports.
    pub fn toggle(&mut self) -> ViewMode {
        if self.can_switch() {
            self.mode = match self.mode {
                ViewMode::Document => ViewMode::Interaction,
                _ => ViewMode::Document,
            };
        }
        self.mode
    }

    pub fn select(&mut self, mode: ViewMode) -> ViewMode {
        if self.can_switch() && mode != ViewMode::Combined {
            self.mode = mode;
        }
        self.mode
    }
}
