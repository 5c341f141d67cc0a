//! Shared data structures for the product page
//!
//! These structs describe the single product on sale and flow from the
//! catalog loader into the controller and the UI layer.

use std::path::PathBuf;

/// Price of one pair of the built-in sneakers
pub const UNIT_PRICE: f64 = 125.00;

/// One image of the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    /// Caption drawn on the placeholder when no image is available
    pub label: String,
    /// Image file on disk (None = placeholder only)
    pub path: Option<PathBuf>,
}

impl Slide {
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }

    pub fn from_path(path: PathBuf) -> Self {
        let label = path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            label,
            path: Some(path),
        }
    }
}

/// The product on sale
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Brand line above the title (e.g., "SNEAKER COMPANY")
    pub company: String,
    pub name: String,
    pub description: String,
    /// Price of a single unit, in dollars
    pub unit_price: f64,
    /// Carousel images, in display order
    pub slides: Vec<Slide>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            company: "SNEAKER COMPANY".to_string(),
            name: "Fall Limited Edition Sneakers".to_string(),
            description: "These low-profile sneakers are your perfect casual wear companion. \
                Featuring a durable rubber outer sole, they'll withstand everything \
                the weather can offer."
                .to_string(),
            unit_price: UNIT_PRICE,
            slides: (1..=4)
                .map(|i| Slide::placeholder(format!("Product {}", i)))
                .collect(),
        }
    }
}

/// Total for `quantity` units
pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
    unit_price * f64::from(quantity)
}

/// Format an amount as dollars with two decimals (e.g., "$375.00")
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}
