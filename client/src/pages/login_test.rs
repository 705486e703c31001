use super::*;

#[test]
fn auth_mode_toggles_both_ways() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
}

#[test]
fn auth_mode_labels_differ() {
    assert_ne!(AuthMode::SignIn.submit_label(), AuthMode::SignUp.submit_label());
    assert_ne!(AuthMode::SignIn.toggle_label(), AuthMode::SignUp.toggle_label());
}

#[test]
fn invalid_credentials_message() {
    assert_eq!(auth_error_message(&AuthError::InvalidCredentials), "Incorrect email or password.");
}

#[test]
fn network_error_message_hides_details() {
    let msg = auth_error_message(&AuthError::Request("TypeError: Failed to fetch".to_owned()));
    assert!(!msg.contains("TypeError"));
}

#[test]
fn provider_message_passes_through() {
    let err = AuthError::Response { status: 422, message: "User already registered".to_owned() };
    assert_eq!(auth_error_message(&err), "User already registered");
}

#[test]
fn empty_provider_message_falls_back_to_display() {
    let err = AuthError::Response { status: 500, message: String::new() };
    assert!(auth_error_message(&err).contains("500"));
}

#[test]
fn sign_up_profile_trims_name() {
    assert_eq!(sign_up_profile("  Ana Puig ").full_name.as_deref(), Some("Ana Puig"));
}

#[test]
fn sign_up_profile_blank_name_is_unset() {
    assert_eq!(sign_up_profile("   "), ProfileData::default());
}
