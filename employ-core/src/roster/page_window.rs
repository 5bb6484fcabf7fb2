/// Bounded page counter. Both bounds are inclusive and `current` never leaves
/// `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    current: u32,
    total: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
        }
    }
}

impl PageWindow {
    /// Window over `total` pages positioned at `current`, both clamped.
    pub fn new(current: u32, total: u32) -> Self {
        let mut window = Self::default();
        window.set_total(total);
        window.current = current.clamp(1, window.total);
        window
    }

    #[allow(missing_docs)]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[allow(missing_docs)]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Returns `true` if the page changed.
    pub fn previous(&mut self) -> bool {
        let before = self.current;
        self.current = self.current.saturating_sub(1).max(1);
        before != self.current
    }

    /// Returns `true` if the page changed.
    pub fn next(&mut self) -> bool {
        let before = self.current;
        self.current = self.current.saturating_add(1).min(self.total);
        before != self.current
    }

    /// Jumps to `page`, clamped into range.
    pub fn go_to(&mut self, page: u32) {
        self.current = page.clamp(1, self.total);
    }

    /// Stores the server's page count and pulls `current` back in range.
    pub fn set_total(&mut self, total: u32) {
        self.total = total.max(1);
        self.current = self.current.clamp(1, self.total);
    }

    /// Whether "Previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether "Next" is enabled.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// "Page N of M".
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total)
    }
}
