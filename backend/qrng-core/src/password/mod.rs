use crate::error::password::PasswordError;

use common::ErrorLocation;

use std::panic::Location;

/// Special characters used by class 3, indexed by `byte % 8`.
const SPECIAL_CHARS: &[u8; 8] = b"!@#$%^&*";

/// Feature toggles from the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordOptions {
    pub start_uppercase: bool,
    pub include_special: bool,
    pub include_numbers: bool,
}

/// Map a quantum byte buffer to a password of exactly `length` characters.
///
/// Each byte selects a character class via `byte % 4`:
///
/// * 0 - lowercase letter `'a' + byte % 26`
/// * 1 - uppercase letter `'A' + byte % 26`
/// * 2 - digit `'0' + byte % 10`, lowercase fallback when numbers are off
/// * 3 - one of `!@#$%^&*` by `byte % 8`, lowercase fallback when specials
///   are off
///
/// When `start_uppercase` is set and the output is non-empty, position 0 is
/// replaced with `'A' + bytes[0] % 26`. The first byte is reused for the
/// override rather than drawing a fresh one; the original character's class
/// is discarded. This skews the first character's distribution but matches
/// the established behavior, which downstream users rely on.
///
/// Pure and deterministic: identical buffer and options always produce the
/// identical string.
///
/// # Errors
///
/// [`PasswordError::BufferTooShort`] when the buffer holds fewer than
/// `length` bytes.
#[track_caller]
pub fn format_password(
    bytes: &[u8],
    length: usize,
    options: &PasswordOptions,
) -> Result<String, PasswordError> {
    if bytes.len() < length {
        return Err(PasswordError::BufferTooShort {
            requested: length,
            available: bytes.len(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut password = String::with_capacity(length);

    for &byte in &bytes[..length] {
        let ch = match byte % 4 {
            0 => lowercase(byte),
            1 => uppercase(byte),
            2 if options.include_numbers => (b'0' + byte % 10) as char,
            3 if options.include_special => SPECIAL_CHARS[(byte % 8) as usize] as char,
            _ => lowercase(byte),
        };
        password.push(ch);
    }

    if options.start_uppercase && !password.is_empty() {
        // Reuses bytes[0], already consumed for position 0.
        let first = uppercase(bytes[0]);
        password.replace_range(0..1, first.encode_utf8(&mut [0u8; 4]));
    }

    Ok(password)
}

#[inline]
fn lowercase(byte: u8) -> char {
    (b'a' + byte % 26) as char
}

#[inline]
fn uppercase(byte: u8) -> char {
    (b'A' + byte % 26) as char
}
