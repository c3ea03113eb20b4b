use super::*;

#[test]
fn sweet_purchase_endpoint_formats_expected_path() {
    assert_eq!(sweet_purchase_endpoint(7), "/sweets/7/purchase");
}

#[test]
fn sweet_endpoint_formats_expected_path() {
    assert_eq!(sweet_endpoint(42), "/sweets/42");
}

#[test]
fn login_form_body_joins_fields() {
    assert_eq!(
        login_form_body("alice", "hunter2"),
        "username=alice&password=hunter2"
    );
}

#[test]
fn login_form_body_percent_encodes_reserved_characters() {
    assert_eq!(
        login_form_body("a&b", "p=ss w/rd"),
        "username=a%26b&password=p%3Dss%20w%2Frd"
    );
}
