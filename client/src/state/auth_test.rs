use super::*;
use gate::RedirectTarget;

fn resident() -> Session {
    Session::signed_in(Identity::new("u1").with_neighborhood("Part Alta"))
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading());
    assert!(state.identity().is_none());
    assert_eq!(state.route.decision(), &Decision::ShowLoading);
}

// =============================================================
// Session + navigation
// =============================================================

#[test]
fn navigate_while_loading_shows_loading() {
    let mut state = AuthState::default();
    assert_eq!(state.navigate("/profile"), Decision::ShowLoading);
}

#[test]
fn resolution_after_navigation_re_evaluates_route() {
    let mut state = AuthState::default();
    state.navigate("/profile");
    state.apply_session(Session::signed_out());
    assert_eq!(
        state.route.decision(),
        &Decision::Redirect { to: RedirectTarget::Login, return_to: Some("/profile".to_owned()) }
    );
    assert_eq!(state.take_return_path(), "/profile");
}

#[test]
fn signed_in_resident_renders() {
    let mut state = AuthState::default();
    state.apply_session(resident());
    assert_eq!(state.navigate("/profile"), Decision::Render("/profile".to_owned()));
    assert_eq!(state.identity().map(|i| i.id.as_str()), Some("u1"));
}

#[test]
fn sign_out_flips_rendered_route_to_login() {
    let mut state = AuthState::default();
    state.apply_session(resident());
    state.navigate("/");
    state.apply_session(Session::signed_out());
    assert_eq!(state.route.decision().redirect_path(), Some("/login"));
}

#[test]
fn take_return_path_defaults_home() {
    let mut state = AuthState::default();
    assert_eq!(state.take_return_path(), "/");
}
