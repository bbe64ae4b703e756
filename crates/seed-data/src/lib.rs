//! Seed data generation for storefront.
//!
//! This crate fills a development database with synthetic categories,
//! products, users, orders, and reviews. Each entity is owned by a
//! [`units::SeedUnit`] carrying a priority; the [`runner::SeedRunner`]
//! executes registered units in ascending priority order so that foreign-key
//! prerequisites exist before their dependents run. Runs are not idempotent
//! on purpose: repeating a run appends a fresh batch of demo data.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = storefront::database::connect_from_env().await?;
//! let runner = SeedRunner::new(pool, SeedConfig::default());
//! runner.run_all().await?;
//! ```

pub mod config;
pub mod generators;
pub mod runner;
pub mod units;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{
        OrderSeedConfig, ProductSeedConfig, RetryConfig, ReviewSeedConfig, SeedConfig,
        UserSeedConfig,
    };
    pub use crate::generators::{OrderGenerator, ProductGenerator, ReviewGenerator, UserGenerator};
    pub use crate::runner::{SeedError, SeedRunner};
    pub use crate::units::SeedUnit;
}
