//! Hex dump input

use hex::FromHexError;

use crate::error::DecodeError;

/// Parse a hex dump into bytes.
///
/// Surrounding whitespace is ignored; anything else that is not a hex digit
/// is rejected, as is an odd number of digits.
///
/// # Example
///
/// ```
/// use stream_tree::hex::parse_hex;
///
/// assert_eq!(parse_hex("aced0005").unwrap(), vec![0xac, 0xed, 0x00, 0x05]);
/// assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
/// assert!(parse_hex("acx").is_err());
/// assert!(parse_hex("ace").is_err());
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = text.trim();
    let offset = text.len() - text.trim_start().len();

    hex::decode(trimmed).map_err(|err| match err {
        FromHexError::InvalidHexCharacter { c, index } => DecodeError::InvalidHex {
            position: offset + index,
            character: c,
        },
        FromHexError::OddLength => DecodeError::IncompleteHex {
            digits: trimmed.len(),
        },
        other => DecodeError::Corrupted(other.to_string()),
    })
}
