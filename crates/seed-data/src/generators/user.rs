//! Account generation for seeded users.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use uuid::Uuid;

/// Generated account data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Generates the account holders that later units attach orders and reviews
/// to.
pub struct UserGenerator;

impl UserGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedUser {
        let id = Uuid::new_v4();
        let name: String = Name().fake_with_rng(rng);
        let email = self.generate_email(&name, rng);
        GeneratedUser { id, name, email }
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Derives an email address from a display name.
    fn generate_email(&self, name: &str, rng: &mut impl Rng) -> String {
        let normalized: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(".");

        let suffix: u32 = rng.gen_range(1..9999);
        let domains = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];
        let domain = domains[rng.gen_range(0..domains.len())];

        format!("{normalized}{suffix}@{domain}")
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_users_look_plausible() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let user = user_gen.generate(&mut rng);

        assert!(!user.name.is_empty());
        assert!(user.email.contains('@'));
        assert!(user.email.chars().all(|c| !c.is_whitespace()));
    }

    #[test]
    fn batch_ids_are_unique() {
        let user_gen = UserGenerator::new();
        let mut rng = rand::thread_rng();
        let users = user_gen.generate_batch(25, &mut rng);

        assert_eq!(users.len(), 25);
        let ids: std::collections::HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 25);
    }
}
