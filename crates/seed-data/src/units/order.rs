//! Seeds orders with line items drawn from the live catalog.

use std::collections::HashSet;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use super::{SeedUnit, fetch_prerequisites};
use crate::config::{OrderSeedConfig, RetryConfig};
use crate::generators::OrderGenerator;
use crate::runner::SeedError;

/// Creates a randomized batch of orders for existing regular users.
///
/// Each order starts with a zero total; the persisted total is recomputed
/// from the line items that actually made it into the database. An order
/// whose every item insert failed is deleted, never kept.
pub struct OrderUnit {
    config: OrderSeedConfig,
    retry: RetryConfig,
}

impl OrderUnit {
    pub fn new(config: OrderSeedConfig, retry: RetryConfig) -> Self {
        Self { config, retry }
    }

    /// Picks a product index not yet present in the order. When the attempt
    /// budget runs out a repeat is accepted.
    fn pick_product(
        &self,
        products: &[(Uuid, f64)],
        used: &HashSet<Uuid>,
        rng: &mut impl Rng,
    ) -> usize {
        for _ in 0..self.config.max_duplicate_attempts {
            let index = rng.gen_range(0..products.len());
            if !used.contains(&products[index].0) {
                return index;
            }
        }
        rng.gen_range(0..products.len())
    }
}

#[async_trait]
impl SeedUnit for OrderUnit {
    fn name(&self) -> &'static str {
        "orders"
    }

    fn priority(&self) -> i32 {
        4
    }

    async fn run(&self, pool: &PgPool) -> Result<(), SeedError> {
        let users = fetch_prerequisites("users", &self.retry, || async move {
            sqlx::query_as::<_, (Uuid,)>(
                "SELECT id FROM users WHERE role = 'user' ORDER BY created_at",
            )
            .fetch_all(pool)
            .await
        })
        .await?;
        info!(count = users.len(), "found regular users for orders");

        let products = fetch_prerequisites("products", &self.retry, || async move {
            sqlx::query_as::<_, (Uuid, f64)>(
                "SELECT id, price FROM products WHERE in_stock = true",
            )
            .fetch_all(pool)
            .await
        })
        .await?;
        info!(count = products.len(), "found in-stock products for orders");

        let order_gen = OrderGenerator::new();
        let mut rng = StdRng::from_entropy();
        let (min, max) = self.config.count;
        let num_orders = rng.gen_range(min..=max);
        info!("creating {num_orders} orders");

        let mut created = 0;
        for _ in 0..num_orders {
            let (user_id,) = users[rng.gen_range(0..users.len())];

            // The prerequisite read may be stale; confirm the row is still
            // there before hanging an order off it.
            let user_exists: bool = match sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND role = 'user')",
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
                warn!(user = %user_id, "user no longer exists, skipping order");
                continue;
            }

            let order_id = Uuid::new_v4();
            let status = order_gen.random_status(&mut rng);
            let created_at = order_gen.random_created_at(self.config.days_back, &mut rng);

            let insert = sqlx::query(
                r#"
                INSERT INTO orders (id, user_id, total, status, shipping_address, billing_address, created_at, updated_at)
                VALUES ($1, $2, 0, $3, $4, $5, $6, $6)
                "#,
            )
            .bind(order_id)
            .bind(user_id)
            .bind(status.as_str())
            .bind(order_gen.random_address(&mut rng))
            .bind(order_gen.random_address(&mut rng))
            .bind(created_at)
            .execute(pool)
            .await;
            if let Err(err) = insert {
                warn!(user = %user_id, error = %err, "failed to create order");
                continue;
            }

            let (item_min, item_max) = self.config.items_per_order;
            let num_items = rng.gen_range(item_min..=item_max);
            let mut used_products: HashSet<Uuid> = HashSet::new();
            let mut items_added = 0;
            let mut total = 0.0;

            for _ in 0..num_items {
                let index = self.pick_product(&products, &used_products, &mut rng);
                let (product_id, price) = products[index];
                used_products.insert(product_id);

                let (qty_min, qty_max) = self.config.quantity;
                let quantity = rng.gen_range(qty_min..=qty_max) as i32;

                let result = sqlx::query(
                    r#"
                    INSERT INTO order_items (id, order_id, product_id, quantity, price, created_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(Uuid::new_v4())
                .bind(order_id)
                .bind(product_id)
                .bind(quantity)
                .bind(price)
                .bind(created_at)
                .execute(pool)
                .await;

                match result {
                    Ok(_) => {
                        items_added += 1;
                        total += price * f64::from(quantity);
                    }
                    Err(err) => {
                        warn!(order = %order_id, error = %err, "failed to insert order item")
                    }
                }
            }

            if items_added > 0 {
                let update = sqlx::query("UPDATE orders SET total = $1 WHERE id = $2")
                    .bind(total)
                    .bind(order_id)
                    .execute(pool)
                    .await;
                match update {
                    Ok(_) => created += 1,
                    Err(err) => {
                        warn!(order = %order_id, error = %err, "failed to update order total")
                    }
                }
            } else {
                // An order without a single line is never kept.
                if let Err(err) = sqlx::query("DELETE FROM orders WHERE id = $1")
                    .bind(order_id)
                    .execute(pool)
                    .await
                {
                    warn!(order = %order_id, error = %err, "failed to delete empty order");
                }
            }
        }

        info!("seeded {created} orders");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_with_attempts(attempts: u32) -> OrderUnit {
        OrderUnit::new(
            OrderSeedConfig {
                max_duplicate_attempts: attempts,
                ..Default::default()
            },
            RetryConfig::default(),
        )
    }

    #[test]
    fn pick_product_avoids_used_products_when_possible() {
        let products: Vec<(Uuid, f64)> = (0..5).map(|_| (Uuid::new_v4(), 10.0)).collect();
        let used: HashSet<Uuid> = products[..4].iter().map(|(id, _)| *id).collect();
        let unit = unit_with_attempts(1000);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(unit.pick_product(&products, &used, &mut rng), 4);
        }
    }

    #[test]
    fn pick_product_accepts_a_repeat_once_the_budget_runs_out() {
        let products: Vec<(Uuid, f64)> = (0..5).map(|_| (Uuid::new_v4(), 10.0)).collect();
        let used: HashSet<Uuid> = products.iter().map(|(id, _)| *id).collect();
        let unit = unit_with_attempts(20);
        let mut rng = StdRng::seed_from_u64(42);

        let index = unit.pick_product(&products, &used, &mut rng);
        assert!(index < products.len());
    }
}
