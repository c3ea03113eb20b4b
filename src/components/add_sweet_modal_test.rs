use super::*;

#[test]
fn build_new_sweet_coerces_numeric_fields() {
    let payload = build_new_sweet("Fudge", "chocolate", "9.99", "3").unwrap();
    assert_eq!(
        payload,
        NewSweet {
            name: "Fudge".to_owned(),
            category: "chocolate".to_owned(),
            price: 9.99,
            quantity: 3,
        }
    );
}

#[test]
fn build_new_sweet_trims_text_fields() {
    let payload = build_new_sweet("  Fudge ", " chocolate ", "1", "1").unwrap();
    assert_eq!(payload.name, "Fudge");
    assert_eq!(payload.category, "chocolate");
}

#[test]
fn build_new_sweet_requires_name_and_category() {
    assert_eq!(
        build_new_sweet("  ", "chocolate", "1", "1"),
        Err("Enter a name and a category.".to_owned())
    );
    assert_eq!(
        build_new_sweet("Fudge", "", "1", "1"),
        Err("Enter a name and a category.".to_owned())
    );
}

#[test]
fn build_new_sweet_rejects_bad_numbers() {
    assert_eq!(
        build_new_sweet("Fudge", "chocolate", "-1", "1"),
        Err("Price must be zero or more.".to_owned())
    );
    assert!(build_new_sweet("Fudge", "chocolate", "1", "2.5").is_err());
}
