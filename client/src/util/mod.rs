//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and HTML generation from page and
//! component logic so they can be tested natively.

pub mod dark_mode;
pub mod markdown;
pub mod markup;
