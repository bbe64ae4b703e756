//! Category and product content generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use uuid::Uuid;

/// Fixed category pool inserted by the category seed unit.
pub const CATEGORIES: [(&str, &str); 8] = [
    ("Electronics", "Phones, laptops, audio gear, and accessories"),
    ("Books", "Fiction, non-fiction, and technical titles"),
    ("Clothing", "Apparel and footwear for every season"),
    ("Home & Kitchen", "Cookware, furniture, and small appliances"),
    ("Sports & Outdoors", "Training equipment and outdoor essentials"),
    ("Toys & Games", "Board games, puzzles, and toys for all ages"),
    ("Beauty", "Skincare, haircare, and grooming products"),
    ("Automotive", "Parts, tools, and car care supplies"),
];

/// Generated product data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub in_stock: bool,
}

/// Configuration for product generation.
#[derive(Debug, Clone)]
pub struct ProductGenConfig {
    /// Mean list price.
    pub price_mean: f64,
    /// Standard deviation of list prices.
    pub price_std: f64,
    /// Prices are clamped to this range before rounding to cents.
    pub price_range: (f64, f64),
    /// Probability that a product is in stock.
    pub in_stock_rate: f64,
    /// Maximum stock level for in-stock products.
    pub max_stock: i32,
}

impl Default for ProductGenConfig {
    fn default() -> Self {
        Self {
            price_mean: 79.0,
            price_std: 45.0,
            price_range: (4.99, 499.99),
            in_stock_rate: 0.9,
            max_stock: 250,
        }
    }
}

/// Generates catalog entries with category-flavored names.
pub struct ProductGenerator {
    config: ProductGenConfig,
}

impl ProductGenerator {
    /// Creates a generator with default pricing and stock behavior.
    pub fn new() -> Self {
        Self {
            config: ProductGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProductGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single product for the given category.
    pub fn generate(
        &self,
        category_id: Uuid,
        category_name: &str,
        rng: &mut impl Rng,
    ) -> GeneratedProduct {
        let id = Uuid::new_v4();
        let name = self.generate_name(category_name, rng);
        let description = format!("{name} from our {category_name} range.");
        let price = self.generate_price(rng);
        let in_stock = rng.r#gen::<f64>() < self.config.in_stock_rate;
        let stock = if in_stock {
            rng.gen_range(1..=self.config.max_stock)
        } else {
            0
        };

        GeneratedProduct {
            id,
            category_id,
            name,
            description,
            price,
            stock,
            in_stock,
        }
    }

    fn generate_name(&self, category_name: &str, rng: &mut impl Rng) -> String {
        let adjectives = [
            "Classic", "Compact", "Premium", "Everyday", "Pro", "Essential", "Deluxe", "Eco",
        ];
        let nouns = nouns_for(category_name);
        format!(
            "{} {}",
            adjectives[rng.gen_range(0..adjectives.len())],
            nouns[rng.gen_range(0..nouns.len())]
        )
    }

    /// Draws a price from a clamped normal distribution, rounded to cents.
    fn generate_price(&self, rng: &mut impl Rng) -> f64 {
        let normal = Normal::new(self.config.price_mean, self.config.price_std).unwrap();
        let price: f64 = normal.sample(rng);
        let (min, max) = self.config.price_range;
        (price.clamp(min, max) * 100.0).round() / 100.0
    }
}

impl Default for ProductGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Noun pool keyed by category; unknown categories fall back to a generic
/// pool.
fn nouns_for(category_name: &str) -> &'static [&'static str] {
    match category_name {
        "Electronics" => &[
            "Headphones",
            "Keyboard",
            "Monitor",
            "Speaker",
            "Webcam",
            "Charger",
        ],
        "Books" => &["Novel", "Cookbook", "Field Guide", "Anthology", "Handbook"],
        "Clothing" => &["Jacket", "Hoodie", "Sneakers", "T-Shirt", "Beanie"],
        "Home & Kitchen" => &["Blender", "Skillet", "Kettle", "Lamp", "Cutting Board"],
        "Sports & Outdoors" => &[
            "Backpack",
            "Water Bottle",
            "Yoga Mat",
            "Tent",
            "Dumbbell Set",
        ],
        "Toys & Games" => &["Board Game", "Puzzle", "Building Set", "Plush Bear"],
        "Beauty" => &["Moisturizer", "Shampoo", "Face Serum", "Beard Oil"],
        "Automotive" => &["Floor Mats", "Tire Gauge", "Seat Cover", "Jump Starter"],
        _ => &["Gadget", "Kit", "Set", "Bundle"],
    }
}
