//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the `SessionStore` into a value the UI can hold in an `RwSignal`.
//! The store subscription feeds `apply_session`; the route wrapper feeds
//! `navigate`. Both re-run the guard, so the latest decision always matches
//! the latest session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::guard::HOME_PATH;
use gate::{Decision, GuardedRoute, Identity, Session};

/// Latest session plus the route tracker evaluated against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub route: GuardedRoute,
}

impl Default for AuthState {
    fn default() -> Self {
        let session = Session::unresolved();
        let route = GuardedRoute::new(HOME_PATH, &session);
        Self { session, route }
    }
}

impl AuthState {
    /// Replace the session and re-evaluate the current route.
    pub fn apply_session(&mut self, session: Session) {
        self.route.session_changed(&session);
        self.session = session;
    }

    /// Record a navigation and return the guard decision for it.
    pub fn navigate(&mut self, path: &str) -> Decision {
        self.route.navigate(path, &self.session).clone()
    }

    /// Initial session lookup still pending.
    #[must_use]
    pub fn loading(&self) -> bool {
        !self.session.is_resolved
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity.as_ref()
    }

    /// Where to go after a successful sign-in.
    pub fn take_return_path(&mut self) -> String {
        self.route.take_return_path()
    }
}
