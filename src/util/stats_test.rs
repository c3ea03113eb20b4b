use super::*;

fn sweet(id: i64, quantity: u32) -> Sweet {
    Sweet {
        id,
        name: format!("sweet-{id}"),
        category: "test".to_owned(),
        price: 1.0,
        quantity,
    }
}

#[test]
fn stats_count_out_of_stock_and_units() {
    let sweets = vec![sweet(1, 0), sweet(2, 5)];
    let stats = InventoryStats::from_sweets(&sweets);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.in_stock_units, 5);
    assert_eq!(stats.out_of_stock, 1);
}

#[test]
fn stats_on_empty_list_are_zero() {
    assert_eq!(InventoryStats::from_sweets(&[]), InventoryStats::default());
}

#[test]
fn stats_sum_units_across_many_sweets() {
    let sweets = vec![sweet(1, 2), sweet(2, 3), sweet(3, 0), sweet(4, 0)];
    let stats = InventoryStats::from_sweets(&sweets);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.in_stock_units, 5);
    assert_eq!(stats.out_of_stock, 2);
}
