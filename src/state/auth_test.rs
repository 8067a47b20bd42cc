use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_has_no_pending_email() {
    let state = AuthState::default();
    assert!(state.pending_email.is_none());
}

#[test]
fn display_email_falls_back_to_placeholder() {
    let state = AuthState::default();
    assert_eq!(state.display_email(), "your email");
}

#[test]
fn display_email_shows_pending_address() {
    let state = AuthState { pending_email: Some("ada@example.com".to_owned()) };
    assert_eq!(state.display_email(), "ada@example.com");
}
