//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components can depend on small focused models.
//! Only the auth session is global; page data is owned by the pages.

pub mod auth;
