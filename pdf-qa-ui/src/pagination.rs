//! 1-based page cursor for the document panel

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: u32,
    total: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PageCursor {
    /// A cursor over `total` pages, starting at page 1. A zero total is
    /// treated as a single page so the cursor always points somewhere.
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn set_total(&mut self, total: u32) {
        self.total = total.max(1);
        self.current = self.current.clamp(1, self.total);
    }

    pub fn go_to(&mut self, page: u32) {
        self.current = page.clamp(1, self.total);
    }

    pub fn go_to_next(&mut self) {
        self.go_to(self.current.saturating_add(1));
    }

    pub fn go_to_previous(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current < self.total
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}
