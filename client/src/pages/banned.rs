//! Landing page for suspended accounts.
//!
//! Exempt from the route guard, so it watches the session itself: once the
//! user signs out (or the session disappears) it moves back to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sign_out_button::SignOutButton;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn BannedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="notice-page">
            <div class="notice-card">
                <h1>"Account suspended"</h1>
                <p>
                    "This account has been suspended for breaking the community rules. "
                    "If you think this is a mistake, contact the ComuniTarr moderators."
                </p>
                <SignOutButton/>
            </div>
        </div>
    }
}
