#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;
use gate::Session;

use super::*;

#[test]
fn config_from_uses_defaults_when_unset() {
    let config = config_from(None, None);
    assert_eq!(config.url, "http://127.0.0.1:54321");
    assert_eq!(config.anon_key, "local-anon-key");
}

#[test]
fn config_from_ignores_blank_values() {
    let config = config_from(Some("  "), Some(""));
    assert_eq!(config.url, "http://127.0.0.1:54321");
    assert_eq!(config.anon_key, "local-anon-key");
}

#[test]
fn config_from_trims_and_strips_trailing_slash() {
    let config = config_from(Some(" https://abc.supabase.co/ "), Some(" key "));
    assert_eq!(config.url, "https://abc.supabase.co");
    assert_eq!(config.anon_key, "key");
    assert_eq!(config.user_url(), "https://abc.supabase.co/auth/v1/user");
}

#[test]
fn provider_is_unavailable_outside_browser() {
    let provider = GoTrueProvider::new(auth_config());
    assert_eq!(block_on(provider.get_session()), Err(AuthError::Unavailable));
    assert_eq!(block_on(provider.sign_out()), Err(AuthError::Unavailable));
    let creds = Credentials { email: "a@b.c".to_owned(), password: "secret1".to_owned() };
    assert_eq!(block_on(provider.sign_in(&creds)), Err(AuthError::Unavailable));
    assert_eq!(
        block_on(provider.sign_up(&creds, &ProfileData::default())),
        Err(AuthError::Unavailable)
    );
    assert_eq!(
        block_on(provider.update_profile(&ProfileUpdate::default())),
        Err(AuthError::Unavailable)
    );
}

#[test]
fn server_side_store_stays_unresolved() {
    let store = start_session_store();
    assert_eq!(store.current(), Session::unresolved());
}
