//! Hex color validation and canonicalization.
//!
//! Accepted surface forms are `#RGB` and `#RRGGBB` (digits in any case).
//! The canonical form is always `#RRGGBB` with uppercase digits.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Length of a canonical hex color including the `#` prefix.
pub const CANONICAL_LEN: usize = 7;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").expect("hex color pattern is valid")
});

/// Returns true if `input` is `#` followed by exactly 3 or 6 hex digits.
///
/// No surrounding whitespace, alpha channel or named colors are accepted.
///
/// # Examples
///
/// ```
/// use hexmatch::models::is_valid_hex;
///
/// assert!(is_valid_hex("#ff0000"));
/// assert!(is_valid_hex("#f00"));
/// assert!(!is_valid_hex("ff0000"));
/// assert!(!is_valid_hex("#ff00"));
/// ```
pub fn is_valid_hex(input: &str) -> bool {
    HEX_PATTERN.is_match(input)
}

/// Converts a valid hex color into canonical `#RRGGBB` uppercase form.
///
/// Shorthand digits are doubled, so `#a3f` becomes `#AA33FF`.
///
/// # Examples
///
/// ```
/// use hexmatch::models::normalize_hex;
///
/// assert_eq!(normalize_hex("#ff0000").unwrap(), "#FF0000");
/// assert_eq!(normalize_hex("#f00").unwrap(), "#FF0000");
/// assert!(normalize_hex("#zzzzzz").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if `input` does not pass [`is_valid_hex`].
pub fn normalize_hex(input: &str) -> Result<String> {
    if !is_valid_hex(input) {
        return Err(Error::invalid_format(input));
    }

    let digits = input.trim_start_matches('#').to_ascii_uppercase();
    let mut canonical = String::with_capacity(CANONICAL_LEN);
    canonical.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            canonical.push(c);
            canonical.push(c);
        }
    } else {
        canonical.push_str(&digits);
    }

    Ok(canonical)
}

/// Prepends `#` when the text does not already start with one.
///
/// Used while the user is still typing. This is not validation.
pub fn coerce_prefix(input: &str) -> String {
    if input.starts_with('#') {
        input.to_string()
    } else {
        format!("#{input}")
    }
}

/// A color in canonical `#RRGGBB` form.
///
/// The only way to build one is through validation, so a `HexColor` is always
/// 7 characters: `#` plus 6 uppercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validates and canonicalizes `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexmatch::models::HexColor;
    ///
    /// let color = HexColor::parse("#abc").unwrap();
    /// assert_eq!(color.as_str(), "#AABBCC");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        normalize_hex(input).map(Self)
    }

    /// The canonical string, e.g. `#C8102E`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without the `#` prefix.
    pub fn digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

    #[test]
    fn test_is_valid_hex_accepts_both_lengths() {
        assert!(is_valid_hex("#ff0000"));
        assert!(is_valid_hex("#FF0000"));
        assert!(is_valid_hex("#f00"));
        assert!(is_valid_hex("#F0a"));
        assert!(is_valid_hex("#c8102E"));
    }

    #[test]
    fn test_is_valid_hex_accepts_every_digit() {
        for c in HEX_DIGITS.chars() {
            let short = format!("#{c}{c}{c}");
            let full = format!("#{c}{c}{c}{c}{c}{c}");
            assert!(is_valid_hex(&short), "{short} should be valid");
            assert!(is_valid_hex(&full), "{full} should be valid");
        }
    }

    #[test]
    fn test_is_valid_hex_rejects_missing_prefix() {
        assert!(!is_valid_hex("ff0000"));
        assert!(!is_valid_hex("f00"));
    }

    #[test]
    fn test_is_valid_hex_rejects_wrong_length() {
        assert!(!is_valid_hex(""));
        assert!(!is_valid_hex("#"));
        assert!(!is_valid_hex("#f"));
        assert!(!is_valid_hex("#ff"));
        assert!(!is_valid_hex("#ff00"));
        assert!(!is_valid_hex("#ff000"));
        assert!(!is_valid_hex("#ff00000"));
        assert!(!is_valid_hex("#ff000080"));
    }

    #[test]
    fn test_is_valid_hex_rejects_non_hex_and_whitespace() {
        assert!(!is_valid_hex("#zzzzzz"));
        assert!(!is_valid_hex("#gg0000"));
        assert!(!is_valid_hex(" #ff0000"));
        assert!(!is_valid_hex("#ff0000 "));
        assert!(!is_valid_hex("#ff0000\n"));
        assert!(!is_valid_hex("##ff000"));
        assert!(!is_valid_hex("red"));
        assert!(!is_valid_hex("#ｆｆ0000"));
    }

    #[test]
    fn test_normalize_hex_full_form() {
        assert_eq!(normalize_hex("#ff0000").unwrap(), "#FF0000");
        assert_eq!(normalize_hex("#c8102e").unwrap(), "#C8102E");
        assert_eq!(normalize_hex("#ABCDEF").unwrap(), "#ABCDEF");
    }

    #[test]
    fn test_normalize_hex_expands_shorthand() {
        assert_eq!(normalize_hex("#f00").unwrap(), "#FF0000");
        assert_eq!(normalize_hex("#abc").unwrap(), "#AABBCC");
        assert_eq!(normalize_hex("#A3f").unwrap(), "#AA33FF");
        assert_eq!(normalize_hex("#000").unwrap(), "#000000");
    }

    #[test]
    fn test_normalize_hex_is_idempotent() {
        for input in ["#ff0000", "#c8102e", "#AbCdEf", "#123456", "#f00", "#abc"] {
            let once = normalize_hex(input).unwrap();
            let twice = normalize_hex(&once).unwrap();
            assert_eq!(once, twice, "normalizing {input} twice changed it");
            assert_eq!(once.len(), CANONICAL_LEN);
        }
    }

    #[test]
    fn test_normalize_hex_rejects_invalid() {
        assert_eq!(
            normalize_hex("#zzzzzz"),
            Err(Error::invalid_format("#zzzzzz"))
        );
        assert!(normalize_hex("ff0000").is_err());
        assert!(normalize_hex("#ff00").is_err());
        assert!(normalize_hex("").is_err());
    }

    #[test]
    fn test_coerce_prefix() {
        assert_eq!(coerce_prefix("ff0000"), "#ff0000");
        assert_eq!(coerce_prefix("#ff0000"), "#ff0000");
        assert_eq!(coerce_prefix(""), "#");
        // Not validation: garbage passes through with a prefix
        assert_eq!(coerce_prefix("zz"), "#zz");
    }

    #[test]
    fn test_hex_color_parse_and_display() {
        let color = HexColor::parse("#a3f").unwrap();
        assert_eq!(color.as_str(), "#AA33FF");
        assert_eq!(color.digits(), "AA33FF");
        assert_eq!(color.to_string(), "#AA33FF");

        let parsed: HexColor = "#c8102e".parse().unwrap();
        assert_eq!(parsed.as_str(), "#C8102E");
        assert!("c8102e".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_hex_color_serde_canonicalizes() {
        let color: HexColor = serde_json::from_str("\"#f00\"").unwrap();
        assert_eq!(color.as_str(), "#FF0000");
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#FF0000\"");

        let bad: std::result::Result<HexColor, _> = serde_json::from_str("\"#ff00\"");
        assert!(bad.is_err());
    }
}
