//! Profile page: account details, neighborhood change, sign-out.

use leptos::prelude::*;

use crate::components::sign_out_button::SignOutButton;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let field = move |f: fn(&gate::Identity) -> Option<String>| {
        move || auth.with(|a| a.identity().and_then(f).unwrap_or_else(|| "-".to_owned()))
    };
    let full_name = field(|i| i.full_name.clone());
    let email = field(|i| i.email.clone());
    let neighborhood = field(|i| i.neighborhood.as_ref().map(ToString::to_string));

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-details">
                <dt>"Name"</dt>
                <dd>{full_name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Neighborhood"</dt>
                <dd>{neighborhood}</dd>
            </dl>
            <a class="btn btn--secondary" href="/select-neighborhood">"Change neighborhood"</a>
            <a class="btn btn--secondary" href="/">"Back"</a>
            <SignOutButton/>
        </div>
    }
}
