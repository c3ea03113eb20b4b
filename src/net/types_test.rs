use super::*;

#[test]
fn user_decodes_from_backend_shape() {
    let raw = r#"{"id": 1, "username": "alice", "email": "alice@example.com", "role": "admin"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "alice");
    assert!(user.is_admin());
}

#[test]
fn plain_user_role_is_not_admin() {
    let user = User {
        id: 2,
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        role: "user".to_owned(),
    };
    assert!(!user.is_admin());
}

#[test]
fn sweet_decodes_price_and_quantity() {
    let raw = r#"{"id": 7, "name": "Fudge", "category": "chocolate", "price": 9.99, "quantity": 3}"#;
    let sweet: Sweet = serde_json::from_str(raw).unwrap();
    assert_eq!(sweet.price, 9.99);
    assert_eq!(sweet.quantity, 3);
}

#[test]
fn new_sweet_serializes_numeric_fields_as_numbers() {
    let payload = NewSweet {
        name: "Fudge".to_owned(),
        category: "chocolate".to_owned(),
        price: 9.99,
        quantity: 3,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Fudge", "category": "chocolate", "price": 9.99, "quantity": 3 })
    );
}

#[test]
fn token_response_decodes() {
    let raw = r#"{"access_token": "abc.def.ghi", "token_type": "bearer"}"#;
    let token: TokenResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(token.access_token, "abc.def.ghi");
    assert_eq!(token.token_type, "bearer");
}

#[test]
fn error_body_decodes_detail() {
    let raw = r#"{"detail": "Sweet is out of stock"}"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert_eq!(body.detail, "Sweet is out of stock");
}
