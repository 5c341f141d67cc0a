//! Product catalog loading
//!
//! The catalog is an optional JSON file overriding the built-in product:
//!
//! ```json
//! {
//!   "name": "Fall Limited Edition Sneakers",
//!   "unit_price": 125.0,
//!   "slides_dir": "/home/me/shots"
//! }
//! ```
//!
//! Every field is optional. `slides` (explicit image paths) wins over
//! `slides_dir` (every image in a folder, sorted by filename).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::state::data::{Product, Slide};

/// Environment variable pointing at a catalog file
pub const CATALOG_ENV: &str = "PRODUCT_PAGE_CATALOG";

/// Image extensions picked up from `slides_dir`
const SLIDE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
    #[error("malformed catalog {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("invalid unit price {0}")]
    InvalidPrice(f64),
    #[error("no slide images found in {}", .0.display())]
    NoSlides(PathBuf),
}

/// On-disk catalog; absent fields keep the built-in product's values
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Catalog {
    pub company: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit_price: Option<f64>,
    /// Explicit slide images, in display order
    pub slides: Vec<PathBuf>,
    /// Folder scanned for slide images when `slides` is empty
    pub slides_dir: Option<PathBuf>,
}

impl Catalog {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Merge onto the default product
    pub fn into_product(self) -> Result<Product, CatalogError> {
        let mut product = Product::default();

        if let Some(company) = self.company {
            product.company = company;
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.unit_price {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::InvalidPrice(price));
            }
            product.unit_price = price;
        }

        if !self.slides.is_empty() {
            product.slides = self.slides.into_iter().map(Slide::from_path).collect();
        } else if let Some(dir) = self.slides_dir {
            let found = scan_slides(&dir);
            if found.is_empty() {
                return Err(CatalogError::NoSlides(dir));
            }
            product.slides = found.into_iter().map(Slide::from_path).collect();
        }

        Ok(product)
    }
}

/// Where the catalog is looked up:
/// `$PRODUCT_PAGE_CATALOG`, else `<config dir>/product-page/catalog.json`
pub fn catalog_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CATALOG_ENV) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|mut path| {
        path.push("product-page");
        path.push("catalog.json");
        path
    })
}

/// Load the product from `path`; a missing file yields the built-in product
pub async fn load_product(path: Option<PathBuf>) -> Result<Product, CatalogError> {
    let Some(path) = path else {
        return Ok(Product::default());
    };

    let json = match tokio::fs::read_to_string(&path).await {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No catalog at {}, using built-in product", path.display());
            return Ok(Product::default());
        }
        Err(e) => {
            return Err(CatalogError::Read {
                path,
                reason: e.to_string(),
            })
        }
    };

    let catalog = Catalog::from_json(&json).map_err(|e| CatalogError::Parse {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    log::info!("📦 Loaded catalog from {}", path.display());
    catalog.into_product()
}

/// Image files directly inside `dir`, sorted by filename
fn scan_slides(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy().to_lowercase();
                    SLIDE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("product-page-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_catalog_is_default_product() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert_eq!(catalog.into_product().unwrap(), Product::default());
    }

    #[test]
    fn test_overrides() {
        let catalog = Catalog::from_json(
            r#"{ "name": "Winter Boots", "unit_price": 80.5, "slides": ["a.jpg", "b.jpg"] }"#,
        )
        .unwrap();
        let product = catalog.into_product().unwrap();
        assert_eq!(product.name, "Winter Boots");
        assert_eq!(product.unit_price, 80.5);
        assert_eq!(product.company, "SNEAKER COMPANY");
        assert_eq!(product.slides.len(), 2);
        assert_eq!(product.slides[1].label, "b");
    }

    #[test]
    fn test_negative_price_rejected() {
        let catalog = Catalog::from_json(r#"{ "unit_price": -1.0 }"#).unwrap();
        assert_eq!(
            catalog.into_product().unwrap_err(),
            CatalogError::InvalidPrice(-1.0)
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(Catalog::from_json(r#"{ "unit_price": "cheap" }"#).is_err());
    }

    #[test]
    fn test_slides_dir_scan_sorted_and_filtered() {
        let dir = scratch_dir("scan");
        for name in ["3.png", "1.JPG", "notes.txt", "2.webp"] {
            fs::write(dir.join(name), b"x").unwrap();
        }
        fs::create_dir_all(dir.join("nested.jpg")).unwrap();

        let slides = scan_slides(&dir);
        let names: Vec<String> = slides
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["1.JPG", "2.webp", "3.png"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_empty_slides_dir_rejected() {
        let dir = scratch_dir("empty");
        let catalog = Catalog {
            slides_dir: Some(dir.clone()),
            ..Catalog::default()
        };
        assert_eq!(
            catalog.into_product().unwrap_err(),
            CatalogError::NoSlides(dir.clone())
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_is_default_product() {
        let path = std::env::temp_dir().join("product-page-tests-does-not-exist.json");
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let product = rt.block_on(load_product(Some(path))).unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = scratch_dir("malformed");
        let path = dir.join("catalog.json");
        fs::write(&path, "{ not json").unwrap();

        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let err = rt.block_on(load_product(Some(path))).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}
