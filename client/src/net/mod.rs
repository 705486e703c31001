//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the hosted auth REST API and implements `gate::AuthProvider`
//! on top of it.

pub mod api;
