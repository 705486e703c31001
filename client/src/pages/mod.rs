//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/login` and `/banned` are exempt from gating and mounted directly; every
//! other page is wrapped in `Guarded` by the router in `app`.

pub mod banned;
pub mod home;
pub mod login;
pub mod profile;
pub mod select_neighborhood;
