//! Authenticated landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = move || auth.with(|a| a.identity().map(|i| i.display_name().to_owned()).unwrap_or_default());
    let neighborhood = move || {
        auth.with(|a| {
            a.identity()
                .and_then(|i| i.neighborhood.as_ref())
                .map(ToString::to_string)
                .unwrap_or_default()
        })
    };

    view! {
        <div class="home-page">
            <header class="home-header">
                <h1>"Hello, " {name}</h1>
                <p class="home-header__neighborhood">
                    "Your neighborhood: " <strong>{neighborhood}</strong>
                </p>
            </header>
            <nav class="home-nav">
                <a href="/profile">"Profile"</a>
            </nav>
        </div>
    }
}
