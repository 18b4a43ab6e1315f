//! Image Reference Fallback

/// Inline placeholder substituted when a product image fails to load
///
/// 400x300, neutral dark fill, centered "imagen no encontrada" caption.
/// The rendering layer swaps a failed [`Product::image`](super::Product)
/// for this data URI; the exact bytes matter for visual parity.
pub const FALLBACK_IMAGE_DATA_URI: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='400' height='300' viewBox='0 0 400 300'%3E%3Crect width='100%25' height='100%25' fill='%23111111'/%3E%3Ctext x='50%25' y='50%25' fill='%23888888' font-size='16' font-family='Arial' text-anchor='middle' dy='.3em'%3Eimagen no encontrada%3C/text%3E%3C/svg%3E";

/// Whether an image reference is the fallback placeholder
pub fn is_fallback(image: &str) -> bool {
    image == FALLBACK_IMAGE_DATA_URI
}
