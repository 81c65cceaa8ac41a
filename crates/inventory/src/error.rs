//! Inventory error model.

use thiserror::Error;

/// Result type used by inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Reasons a stock operation is rejected.
///
/// Each variant carries the rendered message with the numbers involved, so
/// callers can surface it as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A requested quantity was non-positive, or a removal would empty the item.
    #[error("{0}")]
    InvalidQuantity(String),

    /// An addition would exceed the inventory's capacity.
    #[error("{0}")]
    NoSpace(String),

    /// A removal targeted a name with no stock entry.
    #[error("{0}")]
    ItemNotFound(String),
}

impl InventoryError {
    pub fn add_non_positive(quantity: i64) -> Self {
        Self::InvalidQuantity(format!(
            "Cannot add a quantity of {quantity}. All new stocks must have at least 1 item"
        ))
    }

    pub fn no_space(quantity: i64, remaining: i64) -> Self {
        Self::NoSpace(format!(
            "Cannot add these {quantity} items. Only {remaining} more items can be stored"
        ))
    }

    pub fn remove_non_positive(quantity: i64) -> Self {
        Self::InvalidQuantity(format!(
            "Cannot remove a quantity of {quantity}. Must remove at least 1 item"
        ))
    }

    pub fn item_not_found(name: &str) -> Self {
        Self::ItemNotFound(format!(
            "Could not find {name} in our stocks. Cannot remove non-existing stock"
        ))
    }

    pub fn insufficient_stock(quantity: i64, in_stock: i64) -> Self {
        Self::InvalidQuantity(format!(
            "Cannot remove these {quantity} items. Only {in_stock} items are in stock"
        ))
    }

    /// The rendered message, without the variant.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidQuantity(msg) | Self::NoSpace(msg) | Self::ItemNotFound(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = InventoryError::no_space(25, 10);
        assert_eq!(
            err.to_string(),
            "Cannot add these 25 items. Only 10 more items can be stored"
        );
        assert_eq!(err.message(), err.to_string());
    }

    #[test]
    fn constructors_pick_the_right_kind() {
        assert!(matches!(
            InventoryError::add_non_positive(0),
            InventoryError::InvalidQuantity(_)
        ));
        assert!(matches!(
            InventoryError::remove_non_positive(-1),
            InventoryError::InvalidQuantity(_)
        ));
        assert!(matches!(
            InventoryError::insufficient_stock(3, 3),
            InventoryError::InvalidQuantity(_)
        ));
        assert!(matches!(
            InventoryError::item_not_found("Hat"),
            InventoryError::ItemNotFound(_)
        ));
    }
}
