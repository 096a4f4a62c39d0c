//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `landing` links to the two chat routes. `general` and `timpark` are thin
//! configurations of the shared `chat` page, which owns the submission flow
//! and delegates rendering to `components`.

pub mod chat;
pub mod general;
pub mod landing;
pub mod timpark;

/// Client route of the general chat view.
pub const GENERAL_PATH: &str = "/general";
/// Client route of the Timpark chat view.
pub const TIMPARK_PATH: &str = "/timpark";
