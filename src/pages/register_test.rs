use super::*;

#[test]
fn validate_register_input_trims_all_fields() {
    assert_eq!(
        validate_register_input(" alice ", " alice@example.com ", " hunter2 "),
        Ok((
            "alice".to_owned(),
            "alice@example.com".to_owned(),
            "hunter2".to_owned()
        ))
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(
        validate_register_input("", "a@b.com", "pw"),
        Err("Enter username, email, and password.")
    );
    assert_eq!(
        validate_register_input("alice", "  ", "pw"),
        Err("Enter username, email, and password.")
    );
    assert_eq!(
        validate_register_input("alice", "a@b.com", ""),
        Err("Enter username, email, and password.")
    );
}

#[test]
fn validate_register_input_rejects_mailless_email() {
    assert_eq!(
        validate_register_input("alice", "not-an-email", "pw"),
        Err("Enter a valid email address.")
    );
}
