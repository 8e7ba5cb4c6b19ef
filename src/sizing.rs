//! Pure calculation functions for article image dimensions.
//!
//! All functions here are pure and testable without any I/O or collaborator
//! services. The image stage combines them with asset metadata to decide
//! what to ask the resize service for.
//!
//! Widths flow through three steps: the configured width (per rendering
//! pass) → the basis width (halved once for nested articles) → the target
//! width (scaled by the article's size class). Heights are always derived
//! from the source asset's aspect ratio, never chosen independently.

use crate::types::SizeClass;

/// Target dimensions for a rendered image.
///
/// Always integral and aspect-ratio-consistent with the source asset:
/// `height == round(orig_height * width / orig_width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Pixel width available to an article's image before size-class scaling.
///
/// Nested articles get half the configured width. The halving applies
/// exactly once — it does not compound across nesting levels, which is why
/// this takes a boolean rather than a depth.
///
/// # Examples
/// ```
/// # use frontlist::sizing::basis_width;
/// assert_eq!(basis_width(468, true), 468);
/// assert_eq!(basis_width(468, false), 234);
/// ```
pub fn basis_width(configured_width: u32, top_level: bool) -> u32 {
    if top_level {
        configured_width
    } else {
        (configured_width as f64 * 0.5).round() as u32
    }
}

/// Scale a basis width by the article's size class.
///
/// `Full` leaves the basis width unchanged; the named fractions match what
/// the list editor offers (`half`, `third`, `quarter`).
///
/// # Examples
/// ```
/// # use frontlist::sizing::target_width;
/// # use frontlist::types::SizeClass;
/// assert_eq!(target_width(468, SizeClass::Half), 234);
/// assert_eq!(target_width(468, SizeClass::Third), 154);
/// assert_eq!(target_width(468, SizeClass::Quarter), 117);
/// assert_eq!(target_width(468, SizeClass::Full), 468);
/// ```
pub fn target_width(basis: u32, size: SizeClass) -> u32 {
    let factor = match size {
        SizeClass::Full => return basis,
        SizeClass::Half => 0.5,
        SizeClass::Third => 0.33,
        SizeClass::Quarter => 0.25,
    };
    (basis as f64 * factor).round() as u32
}

/// Height preserving the source aspect ratio at a given target width.
pub fn scaled_height(original: (u32, u32), width: u32) -> u32 {
    let (orig_w, orig_h) = original;
    (orig_h as f64 * (width as f64 / orig_w as f64)).round() as u32
}

/// Full sizing decision for one article image.
///
/// # Arguments
/// * `configured_width` - Pass-wide basis width from [`RenderConfig`](crate::config::RenderConfig)
/// * `top_level` - Whether the article is top-level (see [`Article::is_top_level`](crate::types::Article::is_top_level))
/// * `size` - The article's size class
/// * `original` - Source asset dimensions (width, height)
///
/// # Examples
/// ```
/// # use frontlist::sizing::{scaled_dimensions, ImageDimensions};
/// # use frontlist::types::SizeClass;
/// // Top-level half-width image from a 1000x500 asset at width 468
/// assert_eq!(
///     scaled_dimensions(468, true, SizeClass::Half, (1000, 500)),
///     ImageDimensions { width: 234, height: 117 }
/// );
/// ```
pub fn scaled_dimensions(
    configured_width: u32,
    top_level: bool,
    size: SizeClass,
    original: (u32, u32),
) -> ImageDimensions {
    let width = target_width(basis_width(configured_width, top_level), size);
    ImageDimensions {
        width,
        height: scaled_height(original, width),
    }
}
