//! Inline style storage with pixel-string round-trips.
//!
//! Responsibilities:
//! - Hold per-element style properties as raw CSS strings, the way a
//!   browser holds `style.left`.
//! - Convert between numeric pixel values and their string form.
//!
//! Invariants:
//! - `parse_px` follows `parseInt` semantics: optional sign, leading
//!   digits, everything after the digits ignored.
//! - `set_px` writes integral values without a fractional part, so a
//!   written value parses back to itself.

use std::collections::BTreeMap;

/// Inline style map for a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    props: BTreeMap<String, String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.props.get(prop).map(String::as_str)
    }

    pub fn set(&mut self, prop: &str, value: impl Into<String>) {
        self.props.insert(prop.to_string(), value.into());
    }

    /// Write a numeric pixel value, e.g. `set_px("left", 75.0)` stores `"75px"`.
    pub fn set_px(&mut self, prop: &str, value: f64) {
        self.set(prop, format_px(value));
    }

    /// Read a property back as an integer pixel value.
    pub fn px(&self, prop: &str) -> Option<i64> {
        self.get(prop).and_then(parse_px)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Format a pixel value the way script-assigned styles read: integral
/// values without a trailing `.0`.
pub fn format_px(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// Parse the leading integer of a pixel string, `parseInt` style.
///
/// Returns `None` when the string has no leading integer at all.
pub fn parse_px(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px_plain_values() {
        assert_eq!(parse_px("75px"), Some(75));
        assert_eq!(parse_px("-50px"), Some(-50));
        assert_eq!(parse_px("+10px"), Some(10));
        assert_eq!(parse_px("0px"), Some(0));
    }

    #[test]
    fn test_parse_px_truncates_fractions() {
        assert_eq!(parse_px("75.5px"), Some(75));
        assert_eq!(parse_px("-0.9px"), Some(0));
    }

    #[test]
    fn test_parse_px_rejects_non_numeric() {
        assert_eq!(parse_px("px"), None);
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("-px"), None);
    }

    #[test]
    fn test_format_px_drops_integral_fraction() {
        assert_eq!(format_px(75.0), "75px");
        assert_eq!(format_px(-50.0), "-50px");
        assert_eq!(format_px(75.5), "75.5px");
    }

    #[test]
    fn test_set_px_round_trips() {
        let mut style = InlineStyle::new();
        style.set_px("left", 490.0);
        assert_eq!(style.get("left"), Some("490px"));
        assert_eq!(style.px("left"), Some(490));
    }

    #[test]
    fn test_px_on_missing_property() {
        let style = InlineStyle::new();
        assert_eq!(style.px("top"), None);
    }
}
