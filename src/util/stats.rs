//! Derived inventory statistics for the profile view.
//!
//! DESIGN
//! ======
//! Statistics are recomputed from the cache's latest snapshot on every render
//! and never persisted, so they can't drift from backend state.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::Sweet;

/// Aggregate counts over the currently cached sweet list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Number of distinct sweets.
    pub total: usize,
    /// Sum of quantities across all sweets.
    pub in_stock_units: u32,
    /// Number of sweets with zero quantity.
    pub out_of_stock: usize,
}

impl InventoryStats {
    /// Compute stats from a snapshot of the sweet list.
    pub fn from_sweets(sweets: &[Sweet]) -> Self {
        Self {
            total: sweets.len(),
            in_stock_units: sweets.iter().map(|s| s.quantity).sum(),
            out_of_stock: sweets.iter().filter(|s| s.quantity == 0).count(),
        }
    }
}
