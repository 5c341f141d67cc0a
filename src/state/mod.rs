//! State management module
//!
//! This module handles all page state, including:
//! - The page regions and their capability interface (page.rs)
//! - The controller driving those regions from user events (controller.rs)
//! - The product model and price formatting (data.rs)

pub mod controller;
pub mod data;
pub mod page;
