//! Seeds catalog products for each category.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::{SeedUnit, fetch_prerequisites};
use crate::config::{ProductSeedConfig, RetryConfig};
use crate::generators::ProductGenerator;
use crate::runner::SeedError;

/// Fills every category with a randomized batch of products.
pub struct ProductUnit {
    config: ProductSeedConfig,
    retry: RetryConfig,
}

impl ProductUnit {
    pub fn new(config: ProductSeedConfig, retry: RetryConfig) -> Self {
        Self { config, retry }
    }
}

#[async_trait]
impl SeedUnit for ProductUnit {
    fn name(&self) -> &'static str {
        "products"
    }

    fn priority(&self) -> i32 {
        2
    }

    async fn run(&self, pool: &PgPool) -> Result<(), SeedError> {
        let categories = fetch_prerequisites("categories", &self.retry, || async move {
            sqlx::query_as::<_, (Uuid, String)>(
                "SELECT id, name FROM categories ORDER BY created_at",
            )
            .fetch_all(pool)
            .await
        })
        .await?;
        info!(count = categories.len(), "found categories for products");

        let product_gen = ProductGenerator::new();
        let mut rng = StdRng::from_entropy();
        let (min, max) = self.config.per_category;
        let mut inserted = 0;

        for (category_id, category_name) in &categories {
            let count = rng.gen_range(min..=max);
            for _ in 0..count {
                let product = product_gen.generate(*category_id, category_name, &mut rng);

                let result = sqlx::query(
                    r#"
                    INSERT INTO products (id, category_id, name, description, price, stock, in_stock, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
                    "#,
                )
                .bind(product.id)
                .bind(product.category_id)
                .bind(&product.name)
                .bind(&product.description)
                .bind(product.price)
                .bind(product.stock)
                .bind(product.in_stock)
                .execute(pool)
                .await;

                match result {
                    Ok(_) => inserted += 1,
                    Err(err) => {
                        warn!(product = %product.name, error = %err, "failed to insert product")
                    }
                }
            }
        }

        info!(
            "seeded {inserted} products across {} categories",
            categories.len()
        );
        Ok(())
    }
}
