use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::warn;

pub fn wrap_twiml(twiml: String) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{twiml}")
}

/// Parse a numeric webhook parameter from its text form, leaving it unset when the text is
/// empty or does not parse.
///
/// Going through `String` first keeps this working behind `#[serde(flatten)]`, where values
/// arrive as buffered strings rather than from the urlencoded deserializer.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| parse_or_warn(&raw)))
}

/// Like [`lenient_number`], but also drops scores outside `0.0..=1.0`.
pub fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let confidence = lenient_number::<D, f32>(deserializer)?;
    Ok(confidence.filter(|c| {
        let in_range = c.is_finite() && (0.0..=1.0).contains(c);
        if !in_range {
            warn!(confidence = %c, "discarding out of range confidence");
        }
        in_range
    }))
}

fn parse_or_warn<T: FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(value = %raw, "discarding unparseable numeric webhook parameter");
            None
        }
    }
}
