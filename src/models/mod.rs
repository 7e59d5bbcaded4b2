//! Data models for hex colors and match results.
//!
//! Models are independent of the UI and of any match service.

pub mod color_match;
pub mod hex_color;
pub mod rgb;

// Re-export all model types
pub use color_match::ColorMatch;
pub use hex_color::{coerce_prefix, is_valid_hex, normalize_hex, HexColor, CANONICAL_LEN};
pub use rgb::RgbColor;
