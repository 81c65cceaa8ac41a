//! Bounded in-memory stock record.
//!
//! An [`Inventory`] holds stock entries keyed by item name and enforces a
//! fixed capacity on the total item count. Pure in-process logic: no IO, no
//! storage, no synchronization.

pub mod config;
pub mod error;
pub mod inventory;
pub mod stock;

pub use config::{DEFAULT_LIMIT, InventoryConfig};
pub use error::{InventoryError, InventoryResult};
pub use inventory::Inventory;
pub use stock::Stock;
