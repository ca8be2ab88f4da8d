//! Base-25 integer codec over [`ALPHABET`](crate::alphabet::ALPHABET).

use crate::alphabet::{char_of, digit_of, BASE, ZERO};
use crate::error::{Error, Field, Result};

/// Encodes `n` as its minimal base-25 representation.
///
/// Zero encodes to a single [`ZERO`] symbol; no other value has a leading
/// zero symbol.
pub fn encode(mut n: u64) -> String {
    let mut digits = Vec::new();
    while n >= BASE {
        digits.push(symbol(n % BASE));
        n /= BASE;
    }
    digits.push(symbol(n));
    digits.iter().rev().collect()
}

fn symbol(d: u64) -> char {
    // d < BASE at every call site
    char_of(d as u32).unwrap_or(ZERO)
}

/// Decodes a base-25 string. Leading zero symbols are accepted and carry no
/// value, so `decode("CCM") == decode("M")`.
pub fn decode(s: &str) -> Result<u64> {
    if s.is_empty() {
        return Err(Error::Empty);
    }

    let mut n: u64 = 0;
    for (position, ch) in s.chars().enumerate() {
        let d = digit_of(ch).ok_or(Error::InvalidCharacter { ch, position })?;
        n = n
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(d as u64))
            .ok_or(Error::ValueOverflow)?;
    }
    Ok(n)
}

/// Largest value whose encoding fits in `width` symbols.
pub fn max_for_width(width: usize) -> u64 {
    match u32::try_from(width).ok().and_then(|w| BASE.checked_pow(w)) {
        Some(p) => p - 1,
        None => u64::MAX,
    }
}

/// Encodes `n` left-padded with [`ZERO`] to exactly `width` symbols.
///
/// Fails with [`Error::FieldOverflow`] when the natural encoding is longer
/// than `width`; the value is never truncated.
pub fn encode_field(field: Field, n: u64, width: usize) -> Result<String> {
    let encoded = encode(n);
    let len = encoded.chars().count();
    if len > width {
        return Err(Error::FieldOverflow {
            field,
            value: n,
            width,
        });
    }

    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat(ZERO).take(width - len));
    padded.push_str(&encoded);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), "C");
    }

    #[test]
    fn test_encode_lengths() {
        for n in 0..25 {
            assert_eq!(encode(n).len(), 1, "n = {n}");
        }
        for n in 25..625 {
            assert_eq!(encode(n).len(), 2, "n = {n}");
        }
        assert_eq!(encode(625).len(), 3);
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(24), "Y");
        assert_eq!(encode(25), "MC");
        assert_eq!(encode(100), "DC");
        assert_eq!(encode(155), "N6");
        assert_eq!(encode(224), "RY");
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("DC").unwrap(), 100);
        assert_eq!(decode("MC").unwrap(), 25);
        assert_eq!(decode("C").unwrap(), 0);
        assert_eq!(decode("CCN6").unwrap(), 155);
    }

    #[test]
    fn test_round_trip() {
        for n in (0..100_000).step_by(7).chain([u64::MAX - 1, u64::MAX]) {
            assert_eq!(decode(&encode(n)).unwrap(), n);
        }
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("CMA7"),
            Err(Error::InvalidCharacter {
                ch: 'A',
                position: 2
            })
        );
        // Decoding is case-sensitive.
        assert!(matches!(
            decode("dc"),
            Err(Error::InvalidCharacter { ch: 'd', position: 0 })
        ));
    }

    #[test]
    fn test_decode_empty_and_overflow() {
        assert_eq!(decode(""), Err(Error::Empty));
        let too_long = "Y".repeat(20);
        assert_eq!(decode(&too_long), Err(Error::ValueOverflow));
    }

    #[test]
    fn test_encode_field_padding() {
        assert_eq!(encode_field(Field::Store, 0, 3).unwrap(), "CCC");
        assert_eq!(encode_field(Field::Store, 24, 3).unwrap(), "CCY");
        assert_eq!(encode_field(Field::Store, 155, 3).unwrap(), "CN6");
        assert_eq!(encode_field(Field::Store, 15624, 3).unwrap(), "YYY");
    }

    #[test]
    fn test_encode_field_overflow() {
        let err = encode_field(Field::Store, 15625, 3).unwrap_err();
        assert_eq!(
            err,
            Error::FieldOverflow {
                field: Field::Store,
                value: 15625,
                width: 3
            }
        );
    }

    #[test]
    fn test_max_for_width() {
        assert_eq!(max_for_width(0), 0);
        assert_eq!(max_for_width(1), 24);
        assert_eq!(max_for_width(3), 15624);
        assert_eq!(max_for_width(5), 9_765_624);
        assert_eq!(max_for_width(40), u64::MAX);
    }
}
