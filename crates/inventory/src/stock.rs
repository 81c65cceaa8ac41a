use serde::{Deserialize, Serialize};

/// A stock entry: the unit price and how many units are held.
///
/// Price is stored as given; it is not validated.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub price: f64,
    pub quantity: i64,
}

impl Stock {
    pub fn new(price: f64, quantity: i64) -> Self {
        Self { price, quantity }
    }
}
