use super::*;

fn admin() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: "admin".to_owned(),
    }
}

fn plain_user() -> User {
    User {
        id: 2,
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        role: "user".to_owned(),
    }
}

#[test]
fn default_session_is_unauthenticated() {
    let session = SessionState::default();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.loading);
}

#[test]
fn adopt_token_authenticates_with_identity_pending() {
    let mut session = SessionState::default();
    session.adopt_token("tok".to_owned());
    assert!(session.is_authenticated());
    assert!(session.loading, "identity fetch still pending");
    assert!(!session.is_admin());

    session.resolve_user(admin());
    assert!(session.is_admin());
    assert!(!session.loading);
}

#[test]
fn role_comes_only_from_resolved_identity() {
    // A stored token alone must never unlock privileged UI.
    let session = SessionState {
        token: Some("tok".to_owned()),
        user: None,
        loading: false,
    };
    assert!(session.is_authenticated());
    assert!(!session.is_admin());

    let mut session = session;
    session.resolve_user(plain_user());
    assert!(!session.is_admin());
    session.resolve_user(admin());
    assert!(session.is_admin());
}

#[test]
fn degrade_keeps_token_but_drops_privileges() {
    let mut session = SessionState {
        token: Some("tok".to_owned()),
        user: Some(admin()),
        loading: false,
    };
    session.degrade();
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
}

#[test]
fn clear_drops_token_and_identity() {
    let mut session = SessionState {
        token: Some("tok".to_owned()),
        user: Some(admin()),
        loading: true,
    };
    session.clear();
    assert_eq!(session, SessionState::default());
}
