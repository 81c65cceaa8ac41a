//! Inventory configuration.

use serde::{Deserialize, Serialize};

/// Capacity used when none is configured.
pub const DEFAULT_LIMIT: i64 = 100;

/// Environment variable holding the capacity.
pub const LIMIT_ENV: &str = "STOCKROOM_LIMIT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Maximum total item count the inventory may hold.
    pub limit: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl InventoryConfig {
    /// Read the capacity from `STOCKROOM_LIMIT`, falling back to the default.
    pub fn from_env() -> Self {
        Self::from_limit_var(std::env::var(LIMIT_ENV).ok().as_deref())
    }

    fn from_limit_var(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match raw.trim().parse::<i64>() {
            Ok(limit) if limit > 0 => Self { limit },
            Ok(limit) => {
                tracing::warn!(limit, "{LIMIT_ENV} must be positive; using default {DEFAULT_LIMIT}");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(value = raw, error = %e, "{LIMIT_ENV} is not an integer; using default {DEFAULT_LIMIT}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default() {
        assert_eq!(InventoryConfig::from_limit_var(None).limit, DEFAULT_LIMIT);
    }

    #[test]
    fn parses_positive_limit() {
        assert_eq!(InventoryConfig::from_limit_var(Some(" 25 ")).limit, 25);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for raw in ["0", "-5", "lots"] {
            assert_eq!(
                InventoryConfig::from_limit_var(Some(raw)).limit,
                DEFAULT_LIMIT,
                "raw = {raw}"
            );
        }
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let cfg: InventoryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, InventoryConfig::default());

        let cfg: InventoryConfig = serde_json::from_str(r#"{"limit": 7}"#).unwrap();
        assert_eq!(cfg.limit, 7);
    }
}
