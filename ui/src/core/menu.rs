/// Open/closed state of the compact (mobile) navigation menu.
///
/// Starts closed. The toggle control flips it; following any menu link
/// closes it. Nothing else touches it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Glyph shown on the toggle control.
    pub fn toggle_glyph(self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}
