//! Raw cell value normalization
//!
//! Source surveys mix plain numbers, comma-decimal numerals, and 5-point
//! Likert answers written out in English or French. This module collapses
//! all of that into `Option<f32>`: a finite number, or `None` for anything
//! unusable. The function is total. No input, however garbled, aborts the
//! pipeline; a bad cell simply becomes a missing one.
//!
//! Matching order for text cells:
//!
//! 1. numeric parse, with `,` accepted as the decimal separator
//! 2. the intensity vocabulary (very low … very high, EN + FR, including
//!    accent-stripped French spellings)
//! 3. the agreement vocabulary (strongly disagree … strongly agree)
//!
//! First match wins; no match is `None`.

use crate::table::RawValue;

/// 5-point intensity vocabulary, English and French, lowercase.
/// Accent-stripped variants cover CSVs that lost their encoding on export.
const INTENSITY_SCALE: &[(&str, f32)] = &[
    ("very low", 1.0),
    ("très faible", 1.0),
    ("low", 2.0),
    ("faible", 2.0),
    ("medium", 3.0),
    ("moyen", 3.0),
    ("moderate", 3.0),
    ("high", 4.0),
    ("élevé", 4.0),
    ("eleve", 4.0),
    ("very high", 5.0),
    ("très élevé", 5.0),
    ("tres eleve", 5.0),
    ("très eleve", 5.0),
];

/// 5-point agreement vocabulary, lowercase.
const AGREEMENT_SCALE: &[(&str, f32)] = &[
    ("strongly disagree", 1.0),
    ("disagree", 2.0),
    ("neutral", 3.0),
    ("agree", 4.0),
    ("strongly agree", 5.0),
];

/// Converts a raw cell into a finite number, or `None`.
///
/// A `Some` result is always finite; downstream stages rely on that and
/// never re-check.
///
/// # Examples
///
/// ```
/// use riskgrid_prep::{normalize::normalize, table::RawValue};
///
/// assert_eq!(normalize(&RawValue::Number(2.5)), Some(2.5));
/// assert_eq!(normalize(&RawValue::Text("3,5".to_owned())), Some(3.5));
/// assert_eq!(normalize(&RawValue::Text("très élevé".to_owned())), Some(5.0));
/// assert_eq!(normalize(&RawValue::Text("banana".to_owned())), None);
/// assert_eq!(normalize(&RawValue::Null), None);
/// ```
#[must_use]
pub fn normalize(raw: &RawValue) -> Option<f32> {
    match raw {
        RawValue::Null => None,
        RawValue::Number(n) => n.is_finite().then_some(*n),
        RawValue::Text(s) => normalize_text(s),
    }
}

fn normalize_text(text: &str) -> Option<f32> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Comma as decimal separator: only the first one, "1,234,5" stays junk.
    if let Ok(parsed) = trimmed.replacen(',', ".", 1).parse::<f32>()
        && parsed.is_finite()
    {
        return Some(parsed);
    }

    let lower = trimmed.to_lowercase();
    scale_lookup(INTENSITY_SCALE, &lower).or_else(|| scale_lookup(AGREEMENT_SCALE, &lower))
}

fn scale_lookup(scale: &[(&str, f32)], needle: &str) -> Option<f32> {
    scale
        .iter()
        .find_map(|(label, value)| (*label == needle).then_some(*value))
}
