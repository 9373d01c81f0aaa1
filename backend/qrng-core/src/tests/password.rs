// Unit tests for the password formatter
// The formatter is the one piece of real logic in the pipeline, so these
// tests pin down the byte-to-character mapping exactly.

use crate::error::password::PasswordError;
use crate::password::{PasswordOptions, format_password};

const ALL_FLAGS: PasswordOptions = PasswordOptions {
    start_uppercase: false,
    include_special: true,
    include_numbers: true,
};

/// Every byte value, handy for exhaustive property checks.
fn all_bytes() -> Vec<u8> {
    (0..=255u8).collect()
}

/// **VALUE**: Pins the worked example from the password mapping: buffer
/// [98, 1, 55] with numbers on and specials off must yield "8Bd".
///
/// **WHY THIS MATTERS**: This single case exercises three of the four
/// classes plus the special-character fallback, all with known arithmetic
/// (98%4=2 → '8', 1%4=1 → 'B', 55%4=3 with specials off → 'd').
///
/// **BUG THIS CATCHES**: Any off-by-one in the class selector or the
/// per-class sub-mapping changes at least one of these characters.
#[test]
fn given_known_buffer_when_formatted_then_yields_expected_string() {
    // GIVEN: The worked-example buffer and flags
    let options = PasswordOptions {
        start_uppercase: false,
        include_special: false,
        include_numbers: true,
    };

    // WHEN: Formatting
    let password = format_password(&[98, 1, 55], 3, &options).unwrap();

    // THEN: Exact expected output
    assert_eq!(password, "8Bd");
}

/// **VALUE**: Verifies `byte % 4` decides the character category for every
/// possible byte value.
///
/// **WHY THIS MATTERS**: The classifier is the core contract - each byte
/// maps deterministically into one of four character sets.
///
/// **BUG THIS CATCHES**: A reordered match arm or changed modulus would put
/// some byte into the wrong category.
#[test]
fn given_every_byte_when_classified_then_category_follows_mod_four() {
    let bytes = all_bytes();
    let password = format_password(&bytes, bytes.len(), &ALL_FLAGS).unwrap();

    for (b, ch) in bytes.iter().zip(password.chars()) {
        match b % 4 {
            0 => assert!(ch.is_ascii_lowercase(), "byte {b} should be lowercase, got {ch}"),
            1 => assert!(ch.is_ascii_uppercase(), "byte {b} should be uppercase, got {ch}"),
            2 => assert!(ch.is_ascii_digit(), "byte {b} should be a digit, got {ch}"),
            _ => assert!(
                "!@#$%^&*".contains(ch),
                "byte {b} should be special, got {ch}"
            ),
        }
    }
}

/// **VALUE**: Verifies output length always equals the requested length when
/// the buffer suffices, including length 0.
///
/// **BUG THIS CATCHES**: An off-by-one in the byte slice consumed per
/// password character.
#[test]
fn given_sufficient_buffer_when_formatted_then_length_matches_request() {
    let bytes = all_bytes();

    for length in [0usize, 1, 7, 128, 255] {
        let password = format_password(&bytes, length, &ALL_FLAGS).unwrap();
        assert_eq!(password.chars().count(), length);
    }
}

/// **VALUE**: Verifies the formatter is a pure function - identical buffer
/// and flags give an identical password.
///
/// **BUG THIS CATCHES**: Any hidden randomness or state sneaking into the
/// mapping.
#[test]
fn given_same_inputs_when_formatted_twice_then_outputs_are_identical() {
    let bytes = all_bytes();

    let first = format_password(&bytes, 200, &ALL_FLAGS).unwrap();
    let second = format_password(&bytes, 200, &ALL_FLAGS).unwrap();

    assert_eq!(first, second);
}

/// **VALUE**: Verifies the start-uppercase override always produces an
/// ASCII uppercase first character, for every possible first byte.
///
/// **WHY THIS MATTERS**: Users enable this flag for password policies that
/// demand a leading capital; a single byte value slipping through as a
/// digit or special would break those policies intermittently.
///
/// **BUG THIS CATCHES**: The override being applied before (instead of
/// after) classification, or skipped for some classes.
#[test]
fn given_start_uppercase_when_formatted_then_first_char_is_always_uppercase() {
    let options = PasswordOptions {
        start_uppercase: true,
        include_special: true,
        include_numbers: true,
    };

    for b0 in 0..=255u8 {
        let password = format_password(&[b0, 10, 20], 3, &options).unwrap();
        let first = password.chars().next().unwrap();
        assert!(
            first.is_ascii_uppercase(),
            "byte {b0} produced non-uppercase first char {first}"
        );
    }
}

/// **VALUE**: Verifies the override reuses byte 0 rather than drawing a
/// fresh byte: first char must be exactly `'A' + bytes[0] % 26`.
///
/// **WHY THIS MATTERS**: This reuse is deliberate established behavior (it
/// shapes the first character's distribution); silently "fixing" it would
/// change output for identical inputs across versions.
///
/// **BUG THIS CATCHES**: An implementation that consumes an extra byte or
/// re-derives the override from a different position.
#[test]
fn given_start_uppercase_when_formatted_then_override_reuses_first_byte() {
    let options = PasswordOptions {
        start_uppercase: true,
        include_special: true,
        include_numbers: true,
    };

    // byte 7 is class 3 (special); the override must discard that and
    // produce 'A' + 7 = 'H'
    let password = format_password(&[7, 0, 0], 3, &options).unwrap();
    assert_eq!(password.chars().next().unwrap(), 'H');
}

/// **VALUE**: Verifies the numbers-off fallback: no output character is
/// ever a digit when `include_numbers` is false.
///
/// **BUG THIS CATCHES**: The class-2 arm ignoring the flag, or the fallback
/// using the wrong character set.
#[test]
fn given_numbers_disabled_when_formatted_then_no_digits_appear() {
    let options = PasswordOptions {
        start_uppercase: false,
        include_special: true,
        include_numbers: false,
    };

    let bytes = all_bytes();
    let password = format_password(&bytes, bytes.len(), &options).unwrap();

    assert!(!password.chars().any(|c| c.is_ascii_digit()));
}

/// **VALUE**: Verifies the specials-off fallback: none of `!@#$%^&*` ever
/// appears when `include_special` is false.
///
/// **BUG THIS CATCHES**: The class-3 arm ignoring the flag.
#[test]
fn given_specials_disabled_when_formatted_then_no_special_chars_appear() {
    let options = PasswordOptions {
        start_uppercase: false,
        include_special: false,
        include_numbers: true,
    };

    let bytes = all_bytes();
    let password = format_password(&bytes, bytes.len(), &options).unwrap();

    assert!(!password.chars().any(|c| "!@#$%^&*".contains(c)));
}

/// **VALUE**: Verifies a zero-length request yields the empty string with
/// no error, even on an empty buffer.
///
/// **BUG THIS CATCHES**: A bounds check written as `<=` instead of `<`, or
/// the override panicking on an empty result.
#[test]
fn given_zero_length_when_formatted_then_returns_empty_string() {
    let options = PasswordOptions {
        start_uppercase: true,
        include_special: true,
        include_numbers: true,
    };

    let password = format_password(&[], 0, &options).unwrap();
    assert_eq!(password, "");
}

/// **VALUE**: Verifies a short buffer is reported as a named error with the
/// requested and available counts, not an out-of-bounds panic.
///
/// **WHY THIS MATTERS**: The API is trusted to return the requested count
/// but nothing enforces it; a short response must degrade into a clear
/// error the shell can show, never a crash.
///
/// **BUG THIS CATCHES**: Removal of the explicit length check, which would
/// reintroduce the original's out-of-range fault.
#[test]
fn given_short_buffer_when_formatted_then_returns_buffer_too_short() {
    let result = format_password(&[1, 2, 3], 10, &ALL_FLAGS);

    match result {
        Err(PasswordError::BufferTooShort {
            requested,
            available,
            ..
        }) => {
            assert_eq!(requested, 10);
            assert_eq!(available, 3);
        }
        other => panic!("expected BufferTooShort, got {other:?}"),
    }
}
