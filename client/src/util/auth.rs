//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes and the exempt `/banned` page must react to session changes
//! the same way, so the redirect effects live here rather than in pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gate::Decision;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Full requested path from router location parts. `search` may or may not
/// carry its leading `?`.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let pathname = if pathname.is_empty() { "/" } else { pathname };
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Navigation options for guard redirects: replace history so Back does not
/// bounce into the guarded page again.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Re-run the guard whenever `path` or the session changes, redirecting as
/// the decision requires.
pub fn install_route_guard<P, F>(auth: RwSignal<AuthState>, path: P, navigate: F)
where
    P: Fn() -> String + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = Memo::new(move |_| auth.with(|a| a.session.clone()));
    Effect::new(move || {
        let path = path();
        // Tracked so a store notification re-runs the guard for this page.
        session.track();
        let decision = auth.try_update(|a| a.navigate(&path));
        if let Some(target) = decision.as_ref().and_then(Decision::redirect_path) {
            log::debug!("guard redirect {path} -> {target}");
            navigate(target, redirect_options());
        }
    });
}

/// Redirect to `/login` whenever auth has resolved and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(gate::RedirectTarget::Login.path(), redirect_options());
        }
    });
}

fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading() && state.identity().is_none()
}
