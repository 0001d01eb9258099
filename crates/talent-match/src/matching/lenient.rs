//! Tolerant field decoders for the job-board wire format.
//!
//! The remote API is loose about types: identifiers arrive as numbers or numeric strings,
//! skill and language lists arrive either as arrays or as JSON encoded into a string, and
//! numeric fields are sometimes strings typed into a form. Money amounts keep their fraction,
//! experience years are whole numbers. Every decoder here degrades to an empty or zero value
//! instead of failing, except identifiers, which are required.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::domain::{LanguageEntry, SkillEntry};

/// Lower-cases and trims a skill or language name for comparisons.
pub fn normalize_term(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Parses a JSON-encoded list of skill entries, falling back to an empty list.
pub fn parse_skill_entries(raw: &str) -> Vec<SkillEntry> {
    serde_json::from_str::<Value>(raw)
        .map(|value| skill_entries_from_value(&value))
        .unwrap_or_default()
}

/// Parses a JSON-encoded list of language entries, falling back to an empty list.
pub fn parse_language_entries(raw: &str) -> Vec<LanguageEntry> {
    serde_json::from_str::<Value>(raw)
        .map(|value| language_entries_from_value(&value))
        .unwrap_or_default()
}

/// Splits a comma separated skill list, dropping blank items.
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leading-integer parse: optional sign, then digits, anything after is ignored.
///
/// `"4 years"` reads as 4, `"3.5"` as 3, negative values clamp to 0 and text without a
/// leading digit yields `None`.
pub fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Reads a non-negative whole number out of an arbitrary JSON value, defaulting to 0.
pub fn count_or_zero(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number.as_u64().unwrap_or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && *float > 0.0)
                .map(|float| float.trunc() as u64)
                .unwrap_or(0)
        }),
        Value::String(text) => leading_integer(text).unwrap_or(0),
        _ => 0,
    }
}

/// Leading-decimal parse for money fields: `"1200.50 USD"` reads as 1200.5.
///
/// The sign is kept; text without a leading digit yields `None`.
pub fn leading_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(&['-', '+'][..]).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();

    let mut seen_dot = false;
    let end = unsigned
        .char_indices()
        .find(|&(_, ch)| match ch {
            '.' if !seen_dot => {
                seen_dot = true;
                false
            }
            ch => !ch.is_ascii_digit(),
        })
        .map(|(idx, _)| idx)
        .unwrap_or(unsigned.len());

    let number = &unsigned[..end];
    if !number.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    trimmed[..sign_len + end].parse::<f64>().ok()
}

/// Reads a non-negative amount out of an arbitrary JSON value, defaulting to 0.
pub fn amount_or_zero(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => leading_amount(text).unwrap_or(0.0),
        _ => 0.0,
    };
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

fn optional_count(value: &Value) -> Option<u64> {
    (!is_blank(value)).then(|| count_or_zero(value))
}

fn clamp_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub(crate) fn skill_entries_from_value(value: &Value) -> Vec<SkillEntry> {
    match value {
        Value::String(raw) => parse_skill_entries(raw),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let skill = item.get("skill").and_then(Value::as_str)?.trim();
                if skill.is_empty() {
                    return None;
                }
                let experience_years = item
                    .get("experience_years")
                    .map(count_or_zero)
                    .map(clamp_u32)
                    .unwrap_or(0);
                Some(SkillEntry {
                    skill: skill.to_string(),
                    experience_years,
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn language_entries_from_value(value: &Value) -> Vec<LanguageEntry> {
    match value {
        Value::String(raw) => parse_language_entries(raw),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| {
                let language = item.get("language").and_then(Value::as_str)?.trim();
                if language.is_empty() {
                    return None;
                }
                let level = item
                    .get("level")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|level| !level.is_empty())
                    .map(str::to_string);
                Some(LanguageEntry {
                    language: language.to_string(),
                    level,
                })
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn required_skills_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(raw) => split_skill_list(raw),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS` (read as UTC), or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Number(u64),
    Text(String),
}

pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawIdentifier::deserialize(deserializer)? {
        RawIdentifier::Number(id) => Ok(id),
        RawIdentifier::Text(text) => text.trim().parse::<u64>().map_err(|_| {
            serde::de::Error::custom(format!("identifier '{text}' is not a non-negative integer"))
        }),
    }
}

pub(crate) fn skill_entries<'de, D>(deserializer: D) -> Result<Vec<SkillEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(skill_entries_from_value(&value))
}

pub(crate) fn language_entries<'de, D>(deserializer: D) -> Result<Vec<LanguageEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(language_entries_from_value(&value))
}

pub(crate) fn required_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(required_skills_from_value(&value))
}

pub(crate) fn optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok((!is_blank(&value)).then(|| amount_or_zero(&value)))
}

pub(crate) fn optional_years<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(optional_count(&value).map(clamp_u32))
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// `null` decodes as the type's default; anything else must match `T`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_u64().is_some_and(|n| n != 0),
        Value::String(text) => matches!(text.trim(), "true" | "1"),
        _ => false,
    })
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_timestamp))
}
