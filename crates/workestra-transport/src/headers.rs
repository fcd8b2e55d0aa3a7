//! Raw HTTP header-block parsing
//!
//! The Workestra API is plain HTTP/1.1; this module turns a raw header block
//! (the bytes between the status line and the body) into a name/value map,
//! including support for the legacy folded-header syntax where a line
//! beginning with whitespace continues the previous field value.

use std::collections::HashMap;

/// Parse a raw header block into a `Name -> Value` map.
///
/// Continuation lines (CRLF followed by SP or HT) are re-joined onto the
/// previous field with a single space before parsing. Each remaining line is
/// parsed as `Name: Value` with surrounding value whitespace trimmed; lines
/// that do not match (the status line, blank lines) are ignored. Header names
/// are kept exactly as received; a repeated name keeps the last value.
pub fn parse_header_block(raw: &str) -> HashMap<String, String> {
    let mut parsed = HashMap::new();

    for field in unfold(raw).split("\r\n") {
        let Some((name, value)) = field.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        parsed.insert(name.to_string(), value.to_string());
    }

    parsed
}

/// Replace each CRLF-plus-whitespace continuation with a single space.
fn unfold(raw: &str) -> String {
    let mut unfolded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find("\r\n") {
        unfolded.push_str(&rest[..pos]);
        let tail = &rest[pos + 2..];
        let continued = tail.trim_start_matches([' ', '\t']);
        if continued.len() == tail.len() {
            unfolded.push_str("\r\n");
            rest = tail;
        } else {
            unfolded.push(' ');
            rest = continued;
        }
    }

    unfolded.push_str(rest);
    unfolded
}
