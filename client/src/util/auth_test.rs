use super::*;
use gate::{Identity, Session};

#[test]
fn should_redirect_unauth_when_resolved_and_user_missing() {
    let mut state = AuthState::default();
    state.apply_session(Session::signed_out());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let mut state = AuthState::default();
    state.apply_session(Session::signed_in(Identity::new("u1").with_banned(true)));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn requested_path_without_query() {
    assert_eq!(requested_path("/profile", ""), "/profile");
}

#[test]
fn requested_path_appends_query_once() {
    assert_eq!(requested_path("/market", "tab=offers"), "/market?tab=offers");
    assert_eq!(requested_path("/market", "?tab=offers"), "/market?tab=offers");
}

#[test]
fn requested_path_empty_pathname_is_home() {
    assert_eq!(requested_path("", ""), "/");
}

#[test]
fn redirect_options_replace_history() {
    assert!(redirect_options().replace);
}
