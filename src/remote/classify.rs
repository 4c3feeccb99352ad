//! Turns a raw listing body into entries or a remote error.
//!
//! The API is inconsistent about how it reports failures: some arrive as an
//! HTML page, some as JSON with a `message` field. The checks run in a fixed
//! order and the first one that finds something decides.

use super::entry::RemoteEntry;
use crate::errors::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/// Text of a `<title>` element, case-insensitive, spanning lines.
static HTML_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").unwrap());

static HTML_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap());

/// Returns the joined, decoded and trimmed text of every title element, if any.
fn html_title(body: &str) -> Option<String> {
    let raw: String = HTML_TITLE_RE
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    let text = decode_entities(&raw);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Decodes the common named entities and numeric character references.
/// Anything unrecognised is left as written.
fn decode_entities(text: &str) -> Cow<'_, str> {
    HTML_ENTITY_RE.replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[1];
        let decoded = match name {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some('\u{a0}'),
            _ => name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .map(|hex| u32::from_str_radix(hex, 16).ok())
                .unwrap_or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                .and_then(char::from_u32),
        };
        decoded.map_or_else(|| caps[0].to_string(), String::from)
    })
}

/// Renders a JSON field as text: strings as-is, other values as JSON. `null` is empty.
fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Classifies a listing response body.
///
/// 1. A non-empty HTML `<title>` is an error carrying the title text
///    (all title elements joined, entities decoded).
/// 2. A non-empty top-level JSON `message` is an error carrying the message.
/// 3. A missing or empty `value` field is `Error::ListingNotFound`.
/// 4. Otherwise the `value` array is returned as the listing.
///
/// # Examples
/// ```
/// use tfsgit::remote::classify;
/// use tfsgit::errors::Error;
///
/// let err = classify(r#"{"message":"Access Denied"}"#).unwrap_err();
/// assert!(matches!(err, Error::Remote(ref m) if m == "Access Denied"));
///
/// let entries = classify(r#"{"count":0,"value":[]}"#).unwrap();
/// assert!(entries.is_empty());
/// ```
pub fn classify(body: &str) -> Result<Vec<RemoteEntry>> {
    if let Some(title) = html_title(body) {
        return Err(Error::Remote(title));
    }

    let json: Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            log::debug!("Listing body is not JSON: {}", e);
            return Err(Error::ListingNotFound);
        }
    };

    if let Some(message) = json.get("message").map(field_text) {
        if !message.is_empty() {
            return Err(Error::Remote(message));
        }
    }

    let value = match json.get("value") {
        None | Some(Value::Null) => return Err(Error::ListingNotFound),
        Some(Value::String(s)) if s.is_empty() => return Err(Error::ListingNotFound),
        Some(value) => value,
    };
    log::trace!("Value {}", value);

    Vec::<RemoteEntry>::deserialize(value).map_err(Error::MalformedListing)
}
