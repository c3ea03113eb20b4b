use super::*;

#[test]
fn missing_token_redirects_to_login() {
    let session = SessionState::default();
    assert!(should_redirect_unauth(&session));
}

#[test]
fn stored_token_blocks_redirect_even_before_identity_resolves() {
    let session = SessionState {
        token: Some("tok".to_owned()),
        user: None,
        loading: true,
    };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn unauthorized_error_clears_session() {
    assert_eq!(
        UnauthorizedAction::from_error(&ApiError::Unauthorized),
        UnauthorizedAction::ClearSession
    );
}

#[test]
fn transient_errors_degrade_without_logout() {
    assert_eq!(
        UnauthorizedAction::from_error(&ApiError::Network("timeout".to_owned())),
        UnauthorizedAction::DegradeOnly
    );
    assert_eq!(
        UnauthorizedAction::from_error(&ApiError::Rejected {
            status: 503,
            detail: "unavailable".to_owned()
        }),
        UnauthorizedAction::DegradeOnly
    );
}
