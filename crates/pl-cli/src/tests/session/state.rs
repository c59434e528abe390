use crate::session::SessionState;

#[test]
fn test_as_str_names_every_state() {
    assert_eq!(SessionState::Unauthenticated.as_str(), "unauthenticated");
    assert_eq!(SessionState::Authenticating.as_str(), "authenticating");
    assert_eq!(SessionState::Rehydrating.as_str(), "rehydrating");
    assert_eq!(SessionState::Authenticated.as_str(), "authenticated");
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(
        SessionState::Authenticated.to_string(),
        SessionState::Authenticated.as_str()
    );
}
