//! Collections configuration module.
//!
//! Initial capacity hints for the vector- and map-backed containers. The
//! hints only pre-size storage; they never limit how many items a container
//! can hold.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest initial capacity a configuration may request.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Initial capacities for the containers built from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionsConfig {
    /// Items a `VecStack` can hold before reallocating
    pub stack_capacity: usize,

    /// Items a `VecQueue` can hold before reallocating
    pub queue_capacity: usize,

    /// Distinct items a `Bag` can hold before rehashing
    pub bag_capacity: usize,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            stack_capacity: 16,
            queue_capacity: 16,
            bag_capacity: 16,
        }
    }
}

impl Validate for CollectionsConfig {
    fn validate(&self) -> ConfigResult<()> {
        let capacities = [
            ("collections.stack_capacity", self.stack_capacity),
            ("collections.queue_capacity", self.queue_capacity),
            ("collections.bag_capacity", self.bag_capacity),
        ];

        for (key, value) in capacities {
            if value > MAX_INITIAL_CAPACITY {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    message: format!("{value} exceeds the maximum of {MAX_INITIAL_CAPACITY}"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collections_config_is_valid() {
        assert!(CollectionsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_capacity_is_rejected() {
        let config = CollectionsConfig {
            queue_capacity: MAX_INITIAL_CAPACITY + 1,
            ..CollectionsConfig::default()
        };

        match config.validate() {
            Err(ConfigError::ValueOutOfRange { key, .. }) => {
                assert_eq!(key, "collections.queue_capacity")
            }
            other => panic!("expected ValueOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_capacity_is_allowed() {
        let config = CollectionsConfig {
            stack_capacity: 0,
            queue_capacity: 0,
            bag_capacity: 0,
        };
        assert!(config.validate().is_ok());
    }
}
