//! Dark mode class handling on the `<html>` element.
//!
//! The stylesheet keys every dark variant off a `dark` class on the document
//! root. Nothing is persisted: a reload always starts in light mode.
//! Outside the browser (SSR, native tests) the DOM side is skipped and only
//! the returned flag matters.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class toggled on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Force the [`DARK_CLASS`] on the `<html>` element to match `enabled`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}

/// Back to light mode, whatever the current state. Returns the new value.
pub fn reset() -> bool {
    apply(false);
    false
}
