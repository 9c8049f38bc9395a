//! Parse completion text into display content

use crate::error::OracleError;
use crate::types::FinanceTips;
use gotham_domain::{ContentItem, FinanceTrack, WisdomKind};
use serde::Deserialize;
use serde_json::Value;

/// One structured item as the model emits it
#[derive(Debug, Deserialize)]
struct RawCard {
    title: String,
    quote: String,
    category: String,
    icon: String,
    #[serde(default)]
    track: Option<String>,
}

impl RawCard {
    fn into_item(self) -> ContentItem {
        ContentItem::new(
            self.title.trim(),
            self.quote.trim(),
            self.category.trim(),
            self.icon.trim(),
        )
    }
}

/// Parse the cards of a structured kind
///
/// The whole response is rejected when any item is malformed or the item
/// count differs from what the kind asks for.
pub fn parse_cards(kind: WisdomKind, response: &str) -> Result<Vec<ContentItem>, OracleError> {
    if !kind.is_structured() {
        return Err(OracleError::InvalidFormat(format!(
            "'{}' does not produce cards",
            kind
        )));
    }

    let raw = parse_raw_cards(response)?;
    if raw.len() != kind.expected_items() {
        return Err(OracleError::Validation(format!(
            "Expected {} items, got {}",
            kind.expected_items(),
            raw.len()
        )));
    }

    raw.into_iter()
        .enumerate()
        .map(|(idx, card)| {
            let item = card.into_item();
            item.validate()
                .map_err(|e| OracleError::Validation(format!("Item {}: {}", idx, e)))?;
            Ok(item)
        })
        .collect()
}

/// Parse finance tips and split them by track
///
/// Exactly three tips per track are required.
pub fn parse_finance_tips(response: &str) -> Result<FinanceTips, OracleError> {
    let raw = parse_raw_cards(response)?;
    let per_track = WisdomKind::FinanceTips.expected_items() / 2;

    let mut tips = FinanceTips::default();
    for (idx, card) in raw.into_iter().enumerate() {
        let track = card
            .track
            .as_deref()
            .and_then(FinanceTrack::parse)
            .ok_or_else(|| {
                OracleError::Validation(format!("Item {}: missing or invalid 'track'", idx))
            })?;
        let item = card.into_item();
        item.validate()
            .map_err(|e| OracleError::Validation(format!("Item {}: {}", idx, e)))?;
        match track {
            FinanceTrack::Rookie => tips.rookie.push(item),
            FinanceTrack::Wayne => tips.wayne.push(item),
        }
    }

    if tips.rookie.len() != per_track || tips.wayne.len() != per_track {
        return Err(OracleError::Validation(format!(
            "Expected {} rookie and {} wayne tips, got {} and {}",
            per_track,
            per_track,
            tips.rookie.len(),
            tips.wayne.len()
        )));
    }
    Ok(tips)
}

/// Clean a single-text completion
///
/// Trims whitespace and one pair of surrounding quotes.
pub fn clean_text(response: &str) -> Result<String, OracleError> {
    let trimmed = response.trim();
    let unquoted = [('"', '"'), ('\u{201C}', '\u{201D}'), ('\'', '\'')]
        .iter()
        .find_map(|(open, close)| {
            trimmed
                .strip_prefix(*open)
                .and_then(|rest| rest.strip_suffix(*close))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return Err(OracleError::Empty);
    }
    Ok(unquoted.to_string())
}

fn parse_raw_cards(response: &str) -> Result<Vec<RawCard>, OracleError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| OracleError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let items = match json {
        Value::Array(items) => items,
        _ => return Err(OracleError::InvalidFormat("Expected JSON array".to_string())),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            serde_json::from_value(item)
                .map_err(|e| OracleError::InvalidFormat(format!("Item {}: {}", idx, e)))
        })
        .collect()
}

/// Extract JSON from a response, handling markdown code blocks
///
/// Fences may sit on their own lines or share a line with the JSON.
fn extract_json(response: &str) -> Result<String, OracleError> {
    let trimmed = response.trim();

    let Some(fenced) = trimmed.strip_prefix("```") else {
        return Ok(trimmed.to_string());
    };
    let body = fenced.strip_suffix("```").unwrap_or(fenced);
    // Optional language tag such as `json`
    let body = body.trim_start_matches(|c: char| c.is_ascii_alphanumeric()).trim();

    if body.is_empty() {
        return Err(OracleError::InvalidFormat("Empty code block".to_string()));
    }
    Ok(body.to_string())
}
