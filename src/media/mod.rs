//! Slide image handling
//!
//! This module handles:
//! - Decoding slide images from disk
//! - Bounding full-size slides for display
//! - Generating thumbnails for the strip under the carousel

pub mod thumbnail;
