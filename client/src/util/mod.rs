//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Router-facing helpers live here so pages and the route wrapper install the
//! same redirect behavior.

pub mod auth;
