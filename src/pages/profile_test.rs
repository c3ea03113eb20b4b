use super::*;

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("alice"), "A");
    assert_eq!(avatar_initial("Bob"), "B");
}

#[test]
fn avatar_initial_of_empty_name_is_empty() {
    assert_eq!(avatar_initial(""), "");
}

#[test]
fn role_label_capitalizes() {
    assert_eq!(role_label("admin"), "Admin");
    assert_eq!(role_label("user"), "User");
    assert_eq!(role_label(""), "");
}
