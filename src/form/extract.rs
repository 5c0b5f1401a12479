//! Display-cell to edit-value conversion
//!
//! Entering edit mode re-populates inputs from the *currently displayed*
//! cell content, which may be derived markup rather than the raw stored
//! value. Each input kind knows how to pull its raw value back out.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::age::birthdate_string_from_age;
use crate::model::InputKind;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\b").expect("valid pattern"));

static URL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:href|src)="([^"]*)""#).expect("valid pattern"));

/// Converts displayed cell content into an edit-ready raw value.
///
/// - Color cells yield the first `#RRGGBB`/`#RGB` code found in the markup.
/// - Date cells invert an age string back into an ISO date (relative to
///   `today`).
/// - URL cells yield the first `href=`/`src=` attribute value.
/// - Everything else uses the displayed text as-is.
///
/// A cell that does not match its expected shape yields an empty value; the
/// user fills the field in again.
pub fn edit_value(kind: &InputKind, displayed: &str, today: NaiveDate) -> String {
    match kind {
        InputKind::Color => HEX_COLOR
            .find(displayed)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        InputKind::Date => birthdate_string_from_age(displayed, today).unwrap_or_default(),
        InputKind::Url => URL_ATTR
            .captures(displayed)
            .map(|c| c[1].to_string())
            .unwrap_or_default(),
        _ => displayed.to_string(),
    }
}

/// Splits a multi-input column's displayed text into positional tokens.
///
/// Tokens are assigned to sub-inputs in order; missing trailing tokens come
/// back empty so every sub-input still gets a value slot.
pub fn split_positional(displayed: &str, count: usize) -> Vec<String> {
    let mut tokens: Vec<String> = displayed
        .split_whitespace()
        .take(count)
        .map(str::to_string)
        .collect();
    tokens.resize(count, String::new());
    tokens
}
