use image::{imageops::FilterType, DynamicImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest edge of a displayed slide
const SLIDE_MAX_EDGE: u32 = 1280;

/// Longest edge of a thumbnail
const THUMBNAIL_SIZE: u32 = 96;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThumbnailError {
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("image task failed: {0}")]
    Task(String),
}

/// Decoded RGBA pixels ready for the image widget
#[derive(Debug, Clone, PartialEq)]
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Pixels {
    fn from_image(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        }
    }
}

/// A slide and its thumbnail
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePixels {
    pub slide: Pixels,
    pub thumbnail: Pixels,
}

/// Decode a slide image from disk
pub fn decode(path: &Path) -> Result<DynamicImage, ThumbnailError> {
    image::open(path).map_err(|e| ThumbnailError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Shrink to the display bound; smaller images are kept as they are
pub fn bound_slide(img: &DynamicImage) -> Pixels {
    if img.width() > SLIDE_MAX_EDGE || img.height() > SLIDE_MAX_EDGE {
        Pixels::from_image(&img.resize(SLIDE_MAX_EDGE, SLIDE_MAX_EDGE, FilterType::Lanczos3))
    } else {
        Pixels::from_image(img)
    }
}

/// Resize to thumbnail size, keeping the aspect ratio
pub fn make_thumbnail(img: &DynamicImage) -> Pixels {
    Pixels::from_image(&img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3))
}

/// Load one slide and its thumbnail
pub fn load_slide(path: &Path) -> Result<SlidePixels, ThumbnailError> {
    let img = decode(path)?;
    Ok(SlidePixels {
        slide: bound_slide(&img),
        thumbnail: make_thumbnail(&img),
    })
}

/// Load every slide off the UI thread.
/// Slides without a path, or that fail to decode, come back as `None`.
pub async fn load_slides(paths: Vec<Option<PathBuf>>) -> Vec<Option<SlidePixels>> {
    // Spawn blocking task for CPU-bound work
    let result = tokio::task::spawn_blocking(move || {
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref()?;
                match load_slide(path) {
                    Ok(pixels) => {
                        log::info!("📸 Loaded slide: {}", path.display());
                        Some(pixels)
                    }
                    Err(e) => {
                        log::warn!("⚠️  {}", e);
                        None
                    }
                }
            })
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| ThumbnailError::Task(e.to_string()));

    match result {
        Ok(slides) => slides,
        Err(e) => {
            log::error!("{}", e);
            Vec::new()
        }
    }
}
