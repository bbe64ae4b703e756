//! Configuration types for seed generation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a full seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub users: UserSeedConfig,
    pub products: ProductSeedConfig,
    pub orders: OrderSeedConfig,
    pub reviews: ReviewSeedConfig,
    pub retry: RetryConfig,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: UserSeedConfig::default(),
            products: ProductSeedConfig::default(),
            orders: OrderSeedConfig::default(),
            reviews: ReviewSeedConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSeedConfig {
    /// Number of regular (non-admin) accounts to create.
    pub count: usize,
    /// Email for the single admin account.
    pub admin_email: String,
    /// Display name for the admin account.
    pub admin_name: String,
    /// Plaintext password shared by every seeded account.
    pub password: String,
}

impl Default for UserSeedConfig {
    fn default() -> Self {
        Self {
            count: 25,
            admin_email: "admin@storefront.dev".to_string(),
            admin_name: "Store Admin".to_string(),
            password: "storefront-dev".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSeedConfig {
    /// Products generated per category (inclusive range).
    pub per_category: (usize, usize),
}

impl Default for ProductSeedConfig {
    fn default() -> Self {
        Self { per_category: (8, 15) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSeedConfig {
    /// Total orders to create (inclusive range).
    pub count: (usize, usize),
    /// Line items per order (inclusive range).
    pub items_per_order: (usize, usize),
    /// Quantity per line item (inclusive range).
    pub quantity: (u32, u32),
    /// Orders are dated up to this many days in the past.
    pub days_back: i64,
    /// Attempts to pick a product not already in the order before accepting
    /// a repeat.
    pub max_duplicate_attempts: u32,
}

impl Default for OrderSeedConfig {
    fn default() -> Self {
        Self {
            count: (50, 100),
            items_per_order: (1, 5),
            quantity: (1, 3),
            days_back: 180,
            max_duplicate_attempts: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSeedConfig {
    /// Maximum reviews per product; the minimum is zero.
    pub max_per_product: usize,
    /// Reviews are dated up to this many days in the past.
    pub days_back: i64,
    /// Attempts to find a user who has not yet reviewed the product before
    /// skipping the iteration.
    pub max_duplicate_attempts: u32,
}

impl Default for ReviewSeedConfig {
    fn default() -> Self {
        Self {
            max_per_product: 15,
            days_back: 90,
            max_duplicate_attempts: 30,
        }
    }
}

/// Bounded retry policy for prerequisite reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total fetch attempts before giving up.
    pub attempts: u32,
    /// Backoff grows linearly: the wait before attempt N is `base_delay * N`.
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected_volumes() {
        let config = SeedConfig::default();
        assert_eq!(config.orders.count, (50, 100));
        assert_eq!(config.orders.items_per_order, (1, 5));
        assert_eq!(config.reviews.max_per_product, 15);
        assert_eq!(config.retry.attempts, 3);
        assert_eq!(config.retry.base_delay, Duration::from_millis(500));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = SeedConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SeedConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.orders.count, config.orders.count);
        assert_eq!(back.retry.base_delay, config.retry.base_delay);
    }
}
