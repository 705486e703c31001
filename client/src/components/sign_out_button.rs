//! Sign-out control with retry affordance.
//!
//! The store's change notification drives what happens next (the guard or
//! the unauth redirect moves the user to `/login`); this button only starts
//! the request and surfaces failures.

use gate::SessionStore;
use leptos::prelude::*;

#[component]
pub fn SignOutButton() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = store.sign_out().await {
                    error.set(Some(format!("Sign-out failed: {e}")));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &store;
        }
    };

    view! {
        <div class="sign-out">
            <button class="btn btn--secondary" on:click=on_click disabled=move || busy.get()>
                {move || if error.get().is_some() { "Retry sign-out" } else { "Sign out" }}
            </button>
            <Show when=move || error.get().is_some()>
                <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
