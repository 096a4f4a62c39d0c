//! Page-level presentation state.
//!
//! DESIGN
//! ======
//! Dark mode is applied as a class on `<html>`, which makes it global to the
//! page even though each chat view owns the toggle. `ThemeState` is the single
//! context-provided record of that class. It starts off, is reset on every
//! chat-view mount and teardown, and is never persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    /// Flip dark mode and apply it to the document. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = dark_mode::toggle(self.dark_mode);
        self.dark_mode
    }

    /// Return to light mode and clear the document class.
    pub fn reset(&mut self) {
        self.dark_mode = dark_mode::reset();
    }
}
