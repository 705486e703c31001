//! Session-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap every protected page in `<Guarded>`. Children mount only once the
//! guard decides to render; while the session is unresolved, or while a
//! redirect is in flight, the loading placeholder is shown instead.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{install_route_guard, requested_path};

/// Renders `children` when the route guard allows the current path.
#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let pathname = location.pathname;
    let search = location.search;
    install_route_guard(auth, move || requested_path(&pathname.get(), &search.get()), navigate);

    let showing = Memo::new(move |_| auth.with(|a| a.route.decision().is_render()));

    move || {
        if showing.get() {
            children().into_any()
        } else {
            view! { <LoadingScreen/> }.into_any()
        }
    }
}

/// Placeholder shown while the session resolves.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
