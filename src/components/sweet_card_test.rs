use super::*;

#[test]
fn format_price_pads_two_decimals() {
    assert_eq!(format_price(9.99), "$9.99");
    assert_eq!(format_price(2.5), "$2.50");
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn stock_label_reports_count_or_out_of_stock() {
    assert_eq!(stock_label(5), "5 in stock");
    assert_eq!(stock_label(0), "Out of stock");
}

#[test]
fn purchase_disabled_when_out_of_stock() {
    assert!(purchase_disabled(0, false));
}

#[test]
fn purchase_disabled_while_in_flight() {
    assert!(purchase_disabled(3, true));
}

#[test]
fn purchase_enabled_with_stock_and_idle() {
    assert!(!purchase_disabled(3, false));
}

#[test]
fn purchase_gate_follows_refetched_quantity() {
    // Buying the last unit: the re-fetched snapshot keeps the same id but
    // drops quantity to zero, and the card built from it must disable Buy.
    assert!(!purchase_disabled(1, false));
    assert!(purchase_disabled(0, false));
}

#[test]
fn delete_disabled_only_while_in_flight() {
    assert!(delete_disabled(true));
    assert!(!delete_disabled(false));
}
