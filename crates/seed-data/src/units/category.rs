//! Seeds the fixed category catalog.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::SeedUnit;
use crate::generators::CATEGORIES;
use crate::runner::SeedError;

/// Inserts the fixed category pool. Existing names are left untouched.
pub struct CategoryUnit;

#[async_trait]
impl SeedUnit for CategoryUnit {
    fn name(&self) -> &'static str {
        "categories"
    }

    fn priority(&self) -> i32 {
        1
    }

    async fn run(&self, pool: &PgPool) -> Result<(), SeedError> {
        let mut inserted = 0;

        for (name, description) in CATEGORIES {
            let result = sqlx::query(
                r#"
                INSERT INTO categories (id, name, description, created_at)
                VALUES ($1, $2, $3, NOW())
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(name)
            .bind(description)
            .execute(pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!(category = name, error = %err, "failed to insert category"),
            }
        }

        info!("seeded {inserted} categories");
        Ok(())
    }
}
