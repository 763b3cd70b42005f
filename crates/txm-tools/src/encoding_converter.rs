//! Reversible Base64 and URL component encodings

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use txm_core::{EncodingResult, EncodingType, Error, Result};

/// Characters left as-is by URI component encoding
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Converts text to and from Base64 and percent-encoding
pub struct EncodingConverter;

impl EncodingConverter {
    /// Apply an encoding conversion
    pub fn convert(text: &str, encoding: EncodingType) -> Result<EncodingResult> {
        Self::converter(encoding)(text)
    }

    /// Get the conversion function for an encoding.
    ///
    /// Encoders never fail; decoders reject malformed input with `Error::Decode`.
    pub fn converter(encoding: EncodingType) -> fn(&str) -> Result<EncodingResult> {
        match encoding {
            EncodingType::Base64Encode => |text| Ok(base64_encode(text)),
            EncodingType::Base64Decode => base64_decode,
            EncodingType::UrlEncode => |text| Ok(url_encode(text)),
            EncodingType::UrlDecode => url_decode,
        }
    }
}

pub fn base64_encode(text: &str) -> EncodingResult {
    EncodingResult {
        original: text.to_string(),
        converted: STANDARD.encode(text.as_bytes()),
        encoding: EncodingType::Base64Encode,
        description: "Encoded text to Base64".to_string(),
    }
}

/// Decode standard padded Base64. Surrounding whitespace is ignored.
pub fn base64_decode(text: &str) -> Result<EncodingResult> {
    let payload = text.trim();
    let leading = text.len() - text.trim_start().len();

    let bytes = STANDARD.decode(payload).map_err(|err| match err {
        base64::DecodeError::InvalidByte(offset, byte) => Error::decode(
            format!(
                "Invalid Base64 character {:?} at position {}",
                byte as char,
                leading + offset
            ),
            Some(leading + offset),
        ),
        base64::DecodeError::InvalidLastSymbol(offset, byte) => Error::decode(
            format!(
                "Invalid trailing Base64 symbol {:?} at position {}",
                byte as char,
                leading + offset
            ),
            Some(leading + offset),
        ),
        base64::DecodeError::InvalidPadding => {
            Error::decode("Invalid Base64 padding", None)
        }
        other => Error::decode(format!("Invalid Base64 input: {}", other), None),
    })?;

    let converted = String::from_utf8(bytes).map_err(|err| {
        Error::decode(
            format!(
                "Decoded Base64 is not valid UTF-8 (invalid byte at decoded offset {})",
                err.utf8_error().valid_up_to()
            ),
            None,
        )
    })?;

    Ok(EncodingResult {
        original: text.to_string(),
        converted,
        encoding: EncodingType::Base64Decode,
        description: "Decoded Base64 to text".to_string(),
    })
}

pub fn url_encode(text: &str) -> EncodingResult {
    EncodingResult {
        original: text.to_string(),
        converted: utf8_percent_encode(text, URI_COMPONENT).to_string(),
        encoding: EncodingType::UrlEncode,
        description: "Percent-encoded text for use in a URL component".to_string(),
    }
}

/// Decode percent-escapes. `+` stays a literal plus.
pub fn url_decode(text: &str) -> Result<EncodingResult> {
    if let Some(position) = find_malformed_escape(text) {
        let escape: String = text[position..].chars().take(3).collect();
        return Err(Error::decode(
            format!(
                "Malformed percent-escape {:?} at position {}",
                escape, position
            ),
            Some(position),
        ));
    }

    let converted = percent_decode_str(text).decode_utf8().map_err(|err| {
        Error::decode(
            format!(
                "Percent-decoded bytes are not valid UTF-8 (invalid byte at decoded offset {})",
                err.valid_up_to()
            ),
            None,
        )
    })?;

    Ok(EncodingResult {
        original: text.to_string(),
        converted: converted.into_owned(),
        encoding: EncodingType::UrlDecode,
        description: "Decoded percent-encoded URL text".to_string(),
    })
}

/// Byte offset of the first `%` not followed by two hex digits
fn find_malformed_escape(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Some(i);
        }
        i += 3;
    }

    None
}
