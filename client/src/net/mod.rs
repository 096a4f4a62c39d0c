//! Networking modules for the extraction API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the wire schema shared by
//! both chat views.

pub mod api;
pub mod types;
