//! Auth REST client for the hosted backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, tokens persisted in
//! `localStorage`. Server-side (SSR): every call fails with
//! `AuthError::Unavailable`; the session store never resolves during server
//! rendering, so pages render their loading placeholder.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Status codes are mapped by
//! `gate::gotrue::error_from_response`; an expired access token is refreshed
//! once before the lookup gives up.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use gate::gotrue::GoTrueConfig;
use gate::{AuthError, AuthProvider, Credentials, Identity, ProfileData, ProfileUpdate, SessionStore};

#[cfg(feature = "hydrate")]
use gate::gotrue::{self, SignUpResponse, StoredTokens, TokenResponse, UserRecord};

const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_SUPABASE_ANON_KEY: &str = "local-anon-key";

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "comunitarr.auth";

/// Backend endpoint baked in at build time.
///
/// - `COMUNITARR_SUPABASE_URL` (default `http://127.0.0.1:54321`)
/// - `COMUNITARR_SUPABASE_ANON_KEY`
#[must_use]
pub fn auth_config() -> GoTrueConfig {
    config_from(option_env!("COMUNITARR_SUPABASE_URL"), option_env!("COMUNITARR_SUPABASE_ANON_KEY"))
}

fn config_from(url: Option<&str>, anon_key: Option<&str>) -> GoTrueConfig {
    let url = url.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_SUPABASE_URL);
    let anon_key = anon_key.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_SUPABASE_ANON_KEY);
    GoTrueConfig::new(url.trim(), anon_key.trim())
}

/// Build the session store for this page and kick off its initial lookup.
///
/// The lookup only runs in the browser; on the server the future is dropped.
#[must_use]
pub fn start_session_store() -> SessionStore {
    let provider: Arc<dyn AuthProvider> = Arc::new(GoTrueProvider::new(auth_config()));
    SessionStore::start(provider, |initial| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(initial);
        #[cfg(not(feature = "hydrate"))]
        drop(initial);
    })
}

// =============================================================================
// PROVIDER
// =============================================================================

/// `AuthProvider` backed by a GoTrue-compatible REST API.
#[derive(Clone, Debug)]
pub struct GoTrueProvider {
    config: GoTrueConfig,
}

impl GoTrueProvider {
    #[must_use]
    pub fn new(config: GoTrueConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GoTrueConfig {
        &self.config
    }
}

#[async_trait::async_trait(?Send)]
impl AuthProvider for GoTrueProvider {
    async fn get_session(&self) -> Result<Option<Identity>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(tokens) = load_tokens() else {
                return Ok(None);
            };
            let request = self.authorized(gloo_net::http::Request::get(&self.config.user_url()), &tokens.access_token);
            match send(request, None).await.and_then(|body| decode::<UserRecord>(&body)) {
                Ok(user) => Ok(Some(user.into_identity())),
                Err(AuthError::Response { status: 401 | 403, .. }) => self.refresh(&tokens).await,
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let Some(tokens) = load_tokens() else {
                return Ok(());
            };
            let request = self.authorized(gloo_net::http::Request::post(&self.config.logout_url()), &tokens.access_token);
            match send(request, None).await {
                // An already-invalid token means the server side is signed out too.
                Ok(_) | Err(AuthError::Response { status: 401 | 403 | 404, .. }) => {
                    save_tokens(None);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.public(gloo_net::http::Request::post(&self.config.password_grant_url()));
            let body = send(request, Some(gotrue::password_grant_body(credentials))).await?;
            let session = decode::<TokenResponse>(&body)?;
            save_tokens(Some(&StoredTokens::from(&session)));
            Ok(session.user.into_identity())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_up(&self, credentials: &Credentials, profile: &ProfileData) -> Result<Option<Identity>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let request = self.public(gloo_net::http::Request::post(&self.config.signup_url()));
            let body = send(request, Some(gotrue::signup_body(credentials, profile))).await?;
            match decode::<SignUpResponse>(&body)? {
                SignUpResponse::Session(session) => {
                    save_tokens(Some(&StoredTokens::from(&session)));
                    Ok(Some(session.user.into_identity()))
                }
                SignUpResponse::PendingConfirmation(user) => {
                    log::info!("sign-up for {} awaiting email confirmation", user.id);
                    Ok(None)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, profile);
            Err(AuthError::Unavailable)
        }
    }

    async fn update_profile(&self, fields: &ProfileUpdate) -> Result<Identity, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let tokens = load_tokens().ok_or(AuthError::NotSignedIn)?;
            let request = self.authorized(gloo_net::http::Request::put(&self.config.user_url()), &tokens.access_token);
            let body = send(request, Some(gotrue::update_user_body(fields))).await?;
            Ok(decode::<UserRecord>(&body)?.into_identity())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
            Err(AuthError::Unavailable)
        }
    }
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
impl GoTrueProvider {
    fn public(&self, request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        request.header("apikey", &self.config.anon_key)
    }

    fn authorized(&self, request: gloo_net::http::RequestBuilder, access_token: &str) -> gloo_net::http::RequestBuilder {
        self.public(request)
            .header("Authorization", &format!("Bearer {access_token}"))
    }

    /// Exchange the refresh token once. A rejected refresh clears the stored
    /// tokens and reports "no session".
    async fn refresh(&self, tokens: &StoredTokens) -> Result<Option<Identity>, AuthError> {
        let request = self.public(gloo_net::http::Request::post(&self.config.refresh_grant_url()));
        match send(request, Some(gotrue::refresh_grant_body(tokens)))
            .await
            .and_then(|body| decode::<TokenResponse>(&body))
        {
            Ok(session) => {
                save_tokens(Some(&StoredTokens::from(&session)));
                Ok(Some(session.user.into_identity()))
            }
            Err(AuthError::Response { status: 400..=499, .. } | AuthError::InvalidCredentials) => {
                log::info!("stored session expired; clearing tokens");
                save_tokens(None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    request: gloo_net::http::RequestBuilder,
    body: Option<serde_json::Value>,
) -> Result<String, AuthError> {
    let response = match body {
        Some(body) => request
            .json(&body)
            .map_err(|e| AuthError::Request(e.to_string()))?
            .send()
            .await,
        None => request.send().await,
    }
    .map_err(|e| AuthError::Request(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| AuthError::Request(e.to_string()))?;
    if !response.ok() {
        return Err(gotrue::error_from_response(status, &text));
    }
    Ok(text)
}

#[cfg(feature = "hydrate")]
fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Decode(e.to_string()))
}

// =============================================================================
// TOKEN STORAGE (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn load_tokens() -> Option<StoredTokens> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "hydrate")]
fn save_tokens(tokens: Option<&StoredTokens>) {
    let Some(storage) = storage() else {
        return;
    };
    let result = match tokens.map(serde_json::to_string) {
        Some(Ok(raw)) => storage.set_item(STORAGE_KEY, &raw),
        Some(Err(e)) => {
            log::warn!("failed to encode auth tokens: {e}");
            return;
        }
        None => storage.remove_item(STORAGE_KEY),
    };
    if result.is_err() {
        log::warn!("failed to persist auth tokens");
    }
}
