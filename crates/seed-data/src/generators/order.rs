//! Order content generation: addresses, statuses, and dates.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use storefront::models::OrderStatus;

/// Fixed pool of JSON shipping/billing addresses.
const ADDRESSES: [&str; 15] = [
    r#"{"street": "123 Main St", "city": "New York", "state": "NY", "zip": "10001", "country": "USA"}"#,
    r#"{"street": "456 Oak Ave", "city": "Los Angeles", "state": "CA", "zip": "90210", "country": "USA"}"#,
    r#"{"street": "789 Pine Rd", "city": "Chicago", "state": "IL", "zip": "60601", "country": "USA"}"#,
    r#"{"street": "321 Elm St", "city": "Houston", "state": "TX", "zip": "77001", "country": "USA"}"#,
    r#"{"street": "654 Maple Dr", "city": "Phoenix", "state": "AZ", "zip": "85001", "country": "USA"}"#,
    r#"{"street": "987 Cedar Ln", "city": "Philadelphia", "state": "PA", "zip": "19101", "country": "USA"}"#,
    r#"{"street": "147 Birch Way", "city": "San Antonio", "state": "TX", "zip": "78201", "country": "USA"}"#,
    r#"{"street": "258 Spruce St", "city": "San Diego", "state": "CA", "zip": "92101", "country": "USA"}"#,
    r#"{"street": "369 Willow Ave", "city": "Dallas", "state": "TX", "zip": "75201", "country": "USA"}"#,
    r#"{"street": "741 Poplar Rd", "city": "San Jose", "state": "CA", "zip": "95101", "country": "USA"}"#,
    r#"{"street": "852 Beach Blvd", "city": "Miami", "state": "FL", "zip": "33101", "country": "USA"}"#,
    r#"{"street": "963 Mountain Rd", "city": "Denver", "state": "CO", "zip": "80201", "country": "USA"}"#,
    r#"{"street": "159 Lake Dr", "city": "Seattle", "state": "WA", "zip": "98101", "country": "USA"}"#,
    r#"{"street": "753 Park Ave", "city": "Boston", "state": "MA", "zip": "02101", "country": "USA"}"#,
    r#"{"street": "951 Broadway", "city": "Nashville", "state": "TN", "zip": "37201", "country": "USA"}"#,
];

/// Generates the randomized parts of a seeded order.
pub struct OrderGenerator;

impl OrderGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Picks a random address from the fixed pool.
    pub fn random_address(&self, rng: &mut impl Rng) -> &'static str {
        ADDRESSES[rng.gen_range(0..ADDRESSES.len())]
    }

    /// Picks a uniformly random order status.
    pub fn random_status(&self, rng: &mut impl Rng) -> OrderStatus {
        OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())]
    }

    /// Returns a timestamp up to `days_back` days in the past.
    pub fn random_created_at(&self, days_back: i64, rng: &mut impl Rng) -> OffsetDateTime {
        OffsetDateTime::now_utc() - Duration::days(rng.gen_range(0..days_back))
    }
}

impl Default for OrderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
