//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` is owned by each chat view and dies with it; `ui` holds the one
//! page-level presentation flag shared through context.

pub mod chat;
pub mod ui;
