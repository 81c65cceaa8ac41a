use std::collections::HashMap;

use crate::config::{DEFAULT_LIMIT, InventoryConfig};
use crate::error::{InventoryError, InventoryResult};
use crate::stock::Stock;

/// A bounded count of stock entries keyed by item name.
///
/// `total_items` never exceeds `limit` after any operation. Every check runs
/// before any mutation, so a rejected operation leaves the inventory unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    limit: i64,
    total_items: i64,
    stocks: HashMap<String, Stock>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Create an empty inventory holding up to 100 items.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }

    /// Create an empty inventory holding up to `limit` items.
    pub fn with_limit(limit: i64) -> Self {
        Self {
            limit,
            total_items: 0,
            stocks: HashMap::new(),
        }
    }

    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::with_limit(config.limit)
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// How many more items fit.
    pub fn remaining(&self) -> i64 {
        self.limit - self.total_items
    }

    pub fn stocks(&self) -> &HashMap<String, Stock> {
        &self.stocks
    }

    pub fn stock(&self, name: &str) -> Option<&Stock> {
        self.stocks.get(name)
    }

    /// Record a new stock entry for `name`.
    ///
    /// An existing entry under the same name is replaced, not merged; the
    /// total still grows by `quantity`.
    pub fn add_new_stock(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> InventoryResult<()> {
        let name = name.into();
        if let Err(e) = self.check_add(quantity) {
            tracing::debug!(name = %name, quantity, error = %e, "add rejected");
            return Err(e);
        }

        self.stocks.insert(name.clone(), Stock::new(price, quantity));
        self.total_items += quantity;

        tracing::debug!(name = %name, price, quantity, total_items = self.total_items, "stock added");
        Ok(())
    }

    /// Take `quantity` units of `name` out of stock.
    ///
    /// At least one unit must remain; emptying an entry is rejected.
    pub fn remove_stock(&mut self, name: &str, quantity: i64) -> InventoryResult<()> {
        if let Err(e) = self.check_remove(name, quantity) {
            tracing::debug!(name, quantity, error = %e, "remove rejected");
            return Err(e);
        }

        let Some(stock) = self.stocks.get_mut(name) else {
            return Err(InventoryError::item_not_found(name));
        };
        stock.quantity -= quantity;
        self.total_items -= quantity;

        tracing::debug!(name, quantity, total_items = self.total_items, "stock removed");
        Ok(())
    }

    fn check_add(&self, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::add_non_positive(quantity));
        }
        // Compared against the remaining space so the sum cannot overflow.
        let remaining = self.remaining();
        if quantity > remaining {
            return Err(InventoryError::no_space(quantity, remaining));
        }
        Ok(())
    }

    fn check_remove(&self, name: &str, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::remove_non_positive(quantity));
        }
        let stock = self
            .stocks
            .get(name)
            .ok_or_else(|| InventoryError::item_not_found(name))?;
        if stock.quantity <= quantity {
            return Err(InventoryError::insufficient_stock(quantity, stock.quantity));
        }
        Ok(())
    }
}
