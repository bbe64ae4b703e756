//! Seeds product reviews from distinct users.

use std::collections::HashSet;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::{SeedUnit, fetch_prerequisites};
use crate::config::{RetryConfig, ReviewSeedConfig};
use crate::generators::ReviewGenerator;
use crate::runner::SeedError;

/// Writes up to a handful of reviews per product, one per user.
///
/// Unlike [`super::OrderUnit`], which accepts a repeated product once its
/// attempt budget runs out, this unit skips the iteration when no unused
/// reviewer turns up in time.
pub struct ReviewUnit {
    config: ReviewSeedConfig,
    retry: RetryConfig,
}

impl ReviewUnit {
    pub fn new(config: ReviewSeedConfig, retry: RetryConfig) -> Self {
        Self { config, retry }
    }

    /// Picks a user who has not yet reviewed the current product, or `None`
    /// when the attempt budget runs out.
    fn pick_reviewer(
        &self,
        users: &[(Uuid, String)],
        used: &HashSet<Uuid>,
        rng: &mut impl Rng,
    ) -> Option<Uuid> {
        for _ in 0..self.config.max_duplicate_attempts {
            let (id, _) = &users[rng.gen_range(0..users.len())];
            if !used.contains(id) {
                return Some(*id);
            }
        }
        None
    }
}

#[async_trait]
impl SeedUnit for ReviewUnit {
    fn name(&self) -> &'static str {
        "reviews"
    }

    fn priority(&self) -> i32 {
        5
    }

    async fn run(&self, pool: &PgPool) -> Result<(), SeedError> {
        let users = fetch_prerequisites("users", &self.retry, || async move {
            sqlx::query_as::<_, (Uuid, String)>(
                "SELECT id, name FROM users WHERE role = 'user' ORDER BY created_at",
            )
            .fetch_all(pool)
            .await
        })
        .await?;
        info!(count = users.len(), "found regular users for reviews");

        let products = fetch_prerequisites("products", &self.retry, || async move {
            sqlx::query_as::<_, (Uuid, String)>(
                "SELECT id, name FROM products ORDER BY created_at",
            )
            .fetch_all(pool)
            .await
        })
        .await?;
        info!(count = products.len(), "found products for reviews");

        let review_gen = ReviewGenerator::new();
        let mut rng = StdRng::from_entropy();
        let mut total_reviews = 0;

        for (product_id, product_name) in &products {
            let num_reviews = rng.gen_range(0..=self.config.max_per_product);
            if num_reviews == 0 {
                continue;
            }

            let mut used_users: HashSet<Uuid> = HashSet::new();
            let mut reviews_added = 0;

            for _ in 0..num_reviews {
                let Some(user_id) = self.pick_reviewer(&users, &used_users, &mut rng) else {
                    continue;
                };
                used_users.insert(user_id);

                let user_exists: bool = match sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)",
                )
                .bind(user_id)
                .fetch_one(pool)
                .await
                {
                    Ok(exists) => exists,
                    Err(err) => {
                        warn!(user = %user_id, error = %err, "user existence check failed");
                        continue;
                    }
                };
                if !user_exists {
                    continue;
                }

                let rating = review_gen.random_rating(&mut rng);
                let comment = review_gen.comment_for(rating, &mut rng);
                let created_at = review_gen.random_created_at(self.config.days_back, &mut rng);

                let result = sqlx::query(
                    r#"
                    INSERT INTO reviews (id, user_id, product_id, rating, comment, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $6)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(user_id)
                .bind(product_id)
                .bind(rating)
                .bind(comment)
                .bind(created_at)
                .execute(pool)
                .await;

                match result {
                    Ok(_) => reviews_added += 1,
                    Err(err) => {
                        warn!(product = %product_name, user = %user_id, error = %err, "failed to insert review")
                    }
                }
            }

            if reviews_added > 0 {
                info!(product = %product_name, count = reviews_added, "added reviews");
                total_reviews += reviews_added;
            }
        }

        info!("seeded {total_reviews} reviews");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_with_attempts(attempts: u32) -> ReviewUnit {
        ReviewUnit::new(
            ReviewSeedConfig {
                max_duplicate_attempts: attempts,
                ..Default::default()
            },
            RetryConfig::default(),
        )
    }

    fn users(count: usize) -> Vec<(Uuid, String)> {
        (0..count)
            .map(|i| (Uuid::new_v4(), format!("User {i}")))
            .collect()
    }

    #[test]
    fn pick_reviewer_finds_the_remaining_user() {
        let users = users(4);
        let used: HashSet<Uuid> = users[..3].iter().map(|(id, _)| *id).collect();
        let unit = unit_with_attempts(1000);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            assert_eq!(unit.pick_reviewer(&users, &used, &mut rng), Some(users[3].0));
        }
    }

    #[test]
    fn pick_reviewer_gives_up_when_everyone_reviewed() {
        let users = users(3);
        let used: HashSet<Uuid> = users.iter().map(|(id, _)| *id).collect();
        let unit = unit_with_attempts(30);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(unit.pick_reviewer(&users, &used, &mut rng), None);
    }
}
