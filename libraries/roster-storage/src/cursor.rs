//! Opaque pagination cursors
//!
//! A cursor is the URL-safe, unpadded base64 encoding of an RFC 3339
//! timestamp with nanosecond precision, so it can be echoed back in a query
//! string without escaping. Clients must treat it as opaque.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, SecondsFormat, Utc};
use roster_core::{Result, RosterError};

/// Encode a creation timestamp into a cursor
pub fn encode_cursor(created_at: DateTime<Utc>) -> String {
    URL_SAFE_NO_PAD.encode(created_at.to_rfc3339_opts(SecondsFormat::Nanos, true))
}

/// Decode a cursor back into the timestamp it was built from
///
/// An empty cursor means "no lower bound" and decodes to `None`.
///
/// # Errors
/// Returns `BadInput` if a non-empty cursor is not valid base64 or does not
/// hold an RFC 3339 timestamp.
pub fn decode_cursor(cursor: &str) -> Result<Option<DateTime<Utc>>> {
    if cursor.is_empty() {
        return Ok(None);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|e| RosterError::bad_input(format!("cursor is not base64: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| RosterError::bad_input("cursor is not valid UTF-8"))?;
    let timestamp = DateTime::parse_from_rfc3339(&text)
        .map_err(|e| RosterError::bad_input(format!("cursor is not a timestamp: {}", e)))?;

    Ok(Some(timestamp.with_timezone(&Utc)))
}
