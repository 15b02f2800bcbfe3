//! The fixed service menu.
//!
//! Names and prices are part of the shop's public menu and are looked up by
//! their 1-based option number.

use crate::error::ShopError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub name: &'static str,
    pub price: f64,
}

pub const CATALOG: [Service; 4] = [
    Service { name: "Americano", price: 15.0 },
    Service { name: "Mullet", price: 15.0 },
    Service { name: "Low Fade", price: 18.0 },
    Service { name: "Social", price: 12.0 },
];

/// Looks up a service by its menu option (1-based).
pub fn select(option: usize) -> Result<Service, ShopError> {
    option
        .checked_sub(1)
        .and_then(|idx| CATALOG.get(idx))
        .copied()
        .ok_or_else(|| ShopError::InvalidSelection(option.to_string()))
}
