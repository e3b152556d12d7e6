//! Percent-encoding of individual connection string fields.
//!
//! Every field is escaped independently, so grammar delimiters appearing in
//! a value (`: @ , / ? = &`) can never be confused with structure.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::{ConnStrError, ConnStrResult};

/// Characters escaped in a field value.
///
/// Only ASCII alphanumerics and `- _ . ! ~ * ' ( )` pass through unescaped.
pub const FIELD: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single field value.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, FIELD).to_string()
}

/// Percent-decode a single field value.
///
/// `field` names the value in the error when the input holds a truncated or
/// non-hex escape, or decodes to bytes that are not UTF-8. A `+` is kept
/// literally.
pub fn decode(field: &str, raw: &str) -> ConnStrResult<String> {
    if !has_valid_escapes(raw) {
        return Err(ConnStrError::invalid_encoding(field, raw));
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ConnStrError::invalid_encoding(field, raw))
}

fn has_valid_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
