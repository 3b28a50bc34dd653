//! # Message Word Codec
//!
//! Transactions carry an optional message, stored canonically as four
//! 64-bit words (32 bytes). The same conversions are used on both sides of
//! the ledger: ingestion derives words from the request's text or hex form,
//! and contract dispatch derives the hex and text forms back from the words
//! a contract produced.
//!
//! Layout: UTF-8 bytes, zero-padded to 32, packed little-endian into words.
//! A text payload survives a full round trip as long as its UTF-8 form is at
//! most 32 bytes and carries no trailing NUL.

use crate::errors::MessageError;

/// Number of 64-bit words in a message payload.
pub const MESSAGE_WORDS: usize = 4;

/// Message payload size in bytes.
pub const MESSAGE_BYTES: usize = MESSAGE_WORDS * 8;

/// Maximum hexadecimal message length (32 bytes).
pub const MAX_HEX_CHARS: usize = MESSAGE_BYTES * 2;

/// Encodes text to a lowercase hexadecimal string.
///
/// # Errors
///
/// [`MessageError::TooLong`] when the UTF-8 form exceeds 32 bytes.
pub fn text_to_hex(text: &str) -> Result<String, MessageError> {
    let bytes = text.as_bytes();
    if bytes.len() * 2 > MAX_HEX_CHARS {
        return Err(MessageError::TooLong {
            len: bytes.len() * 2,
            max: MAX_HEX_CHARS,
        });
    }
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        hex.push(hex_digit(byte >> 4));
        hex.push(hex_digit(byte & 0x0f));
    }
    Ok(hex)
}

/// Decodes a hexadecimal string back to text, stripping zero padding.
///
/// # Errors
///
/// [`MessageError::OddLength`] / [`MessageError::InvalidHexDigit`] on
/// malformed hex, [`MessageError::InvalidUtf8`] when the payload is not
/// valid UTF-8.
pub fn hex_to_text(hex: &str) -> Result<String, MessageError> {
    let mut bytes = hex_to_bytes(hex)?;
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    String::from_utf8(bytes).map_err(|_| MessageError::InvalidUtf8)
}

/// Packs a hexadecimal string into the fixed four-word payload.
///
/// Shorter inputs are zero padded; an empty string yields all-zero words.
///
/// # Errors
///
/// [`MessageError::TooLong`] beyond 64 hex chars, plus the malformed-hex
/// errors of [`hex_to_text`].
pub fn hex_to_words(hex: &str) -> Result<[u64; MESSAGE_WORDS], MessageError> {
    if hex.len() > MAX_HEX_CHARS {
        return Err(MessageError::TooLong {
            len: hex.len(),
            max: MAX_HEX_CHARS,
        });
    }
    let bytes = hex_to_bytes(hex)?;
    let mut padded = [0u8; MESSAGE_BYTES];
    padded[..bytes.len()].copy_from_slice(&bytes);
    let mut words = [0u64; MESSAGE_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&padded[i * 8..i * 8 + 8]);
        *word = u64::from_le_bytes(chunk);
    }
    Ok(words)
}

/// Unpacks the four-word payload into its full 64-char hexadecimal form.
#[must_use]
pub fn words_to_hex(words: &[u64; MESSAGE_WORDS]) -> String {
    let mut hex = String::with_capacity(MAX_HEX_CHARS);
    for word in words {
        for byte in word.to_le_bytes() {
            hex.push(hex_digit(byte >> 4));
            hex.push(hex_digit(byte & 0x0f));
        }
    }
    hex
}

const fn hex_digit(nibble: u8) -> char {
    (match nibble {
        0..=9 => b'0' + nibble,
        _ => b'a' + nibble - 10,
    }) as char
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, MessageError> {
    if hex.len() % 2 != 0 {
        return Err(MessageError::OddLength(hex.len()));
    }
    hex.as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| {
            let hi = nibble_value(pair[0]).ok_or(MessageError::InvalidHexDigit {
                index: i * 2,
                ch: pair[0] as char,
            })?;
            let lo = nibble_value(pair[1]).ok_or(MessageError::InvalidHexDigit {
                index: i * 2 + 1,
                ch: pair[1] as char,
            })?;
            Ok(hi << 4 | lo)
        })
        .collect()
}

fn nibble_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
