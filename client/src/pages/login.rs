//! Login page supporting email + password sign-in and account registration.
//!
//! Exempt from the route guard. After a successful sign-in the user is sent
//! back to the path remembered by the last login redirect (default `/`).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::{AuthError, Credentials, ProfileData, SessionStore};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const CONFIRMATION_NOTICE: &str = "Account created. Check your email to confirm it, then sign in.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "New here? Create an account",
            Self::SignUp => "Already registered? Sign in",
        }
    }
}

fn auth_error_message(error: &AuthError) -> String {
    match error {
        AuthError::InvalidCredentials => "Incorrect email or password.".to_owned(),
        AuthError::Request(_) => "Could not reach the server. Check your connection and try again.".to_owned(),
        AuthError::Response { message, .. } if !message.is_empty() => message.clone(),
        other => other.to_string(),
    }
}

/// Sign-up metadata from the optional name field. Blank means unset.
fn sign_up_profile(full_name: &str) -> ProfileData {
    let full_name = full_name.trim();
    ProfileData {
        full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
        neighborhood: None,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match Credentials::validated(&email.get_untracked(), &password.get_untracked()) {
            Ok(c) => c,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let signing_up = mode.get_untracked() == AuthMode::SignUp;
        let profile = sign_up_profile(&full_name.get_untracked());
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = if signing_up {
                    store.sign_up(&credentials, &profile).await
                } else {
                    store.sign_in(&credentials).await.map(Some)
                };
                match result {
                    Ok(Some(_)) => {
                        let target = auth
                            .try_update(AuthState::take_return_path)
                            .unwrap_or_else(|| "/".to_owned());
                        navigate(&target, NavigateOptions::default());
                    }
                    Ok(None) => {
                        info.set(CONFIRMATION_NOTICE.to_owned());
                        mode.set(AuthMode::SignIn);
                        busy.set(false);
                    }
                    Err(e) => {
                        info.set(auth_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, signing_up, profile, &store, &navigate);
        }
    };

    let signed_in_as = move || auth.with(|a| a.identity().map(|i| i.display_name().to_owned()));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ComuniTarr"</h1>
                <p class="login-card__subtitle">"Your neighborhood, connected"</p>
                <Show when=move || signed_in_as().is_some()>
                    <p class="login-message">
                        "Signed in as "
                        <strong>{move || signed_in_as().unwrap_or_default()}</strong>
                        ". "
                        <a href="/">"Continue"</a>
                    </p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button
                    class="login-toggle"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        info.set(String::new());
                    }
                >
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
