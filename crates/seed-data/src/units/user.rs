//! Seeds the admin account plus a batch of regular users.

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use storefront::auth;
use storefront::models::UserRole;

use super::SeedUnit;
use crate::config::UserSeedConfig;
use crate::generators::UserGenerator;
use crate::runner::SeedError;

/// Inserts one admin and the configured number of regular accounts.
/// Existing emails are left untouched.
pub struct UserUnit {
    config: UserSeedConfig,
}

impl UserUnit {
    pub fn new(config: UserSeedConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl SeedUnit for UserUnit {
    fn name(&self) -> &'static str {
        "users"
    }

    fn priority(&self) -> i32 {
        3
    }

    async fn run(&self, pool: &PgPool) -> Result<(), SeedError> {
        // Every seeded account shares the dev password; hash it once.
        let password_hash = auth::hash_password(&self.config.password)?;

        let admin = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&self.config.admin_name)
        .bind(&self.config.admin_email)
        .bind(&password_hash)
        .bind(UserRole::Admin.as_str())
        .execute(pool)
        .await;
        if let Err(err) = admin {
            warn!(email = %self.config.admin_email, error = %err, "failed to insert admin user");
        }

        let user_gen = UserGenerator::new();
        let mut rng = StdRng::from_entropy();
        let users = user_gen.generate_batch(self.config.count, &mut rng);

        let mut inserted = 0;
        for user in &users {
            let result = sqlx::query(
                r#"
                INSERT INTO users (id, name, email, password_hash, role, created_at)
                VALUES ($1, $2, $3, $4, $5, NOW())
                ON CONFLICT (email) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&password_hash)
            .bind(UserRole::User.as_str())
            .execute(pool)
            .await;

            match result {
                Ok(_) => inserted += 1,
                Err(err) => warn!(email = %user.email, error = %err, "failed to insert user"),
            }
        }

        info!("seeded {inserted} regular users");
        Ok(())
    }
}
