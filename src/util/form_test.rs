use super::*;

#[test]
fn parse_price_coerces_decimal_text() {
    assert_eq!(parse_price("9.99"), Ok(9.99));
}

#[test]
fn parse_price_trims_whitespace() {
    assert_eq!(parse_price("  2.50 "), Ok(2.5));
}

#[test]
fn parse_price_allows_zero() {
    assert_eq!(parse_price("0"), Ok(0.0));
}

#[test]
fn parse_price_rejects_empty_negative_and_garbage() {
    assert_eq!(parse_price("   "), Err("Enter a price."));
    assert_eq!(parse_price("-1.00"), Err("Price must be zero or more."));
    assert_eq!(parse_price("nine"), Err("Price must be a number."));
}

#[test]
fn parse_quantity_coerces_integer_text() {
    assert_eq!(parse_quantity("3"), Ok(3));
}

#[test]
fn parse_quantity_rejects_empty_negative_and_fractions() {
    assert_eq!(parse_quantity(""), Err("Enter a quantity."));
    assert!(parse_quantity("-2").is_err());
    assert!(parse_quantity("2.5").is_err());
}
