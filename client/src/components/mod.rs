//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat-view chrome. Per-view state is passed in as
//! props; only the theme is read from context.

pub mod loading_overlay;
pub mod nav_bar;
pub mod prompt_panel;
pub mod response_panel;
pub mod theme_toggle;
