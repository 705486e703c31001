//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read/write shared auth state from Leptos context providers.

pub mod guarded;
pub mod sign_out_button;
