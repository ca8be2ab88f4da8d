//! Check digit computation.
//!
//! The check digit scheme is inferred from observed codes. It sits behind
//! [`CheckDigit`] so another scheme can be swapped into the
//! [`Assembler`](crate::Assembler) without touching the codec or the layout.

use crate::alphabet::{digit_of, BASE};
use crate::error::{Error, Result};

/// Computes the check digit for a code payload.
pub trait CheckDigit {
    /// Returns the check digit (`0..BASE`) for `payload`, which must not
    /// already contain a check symbol.
    fn check_digit(&self, payload: &str) -> Result<u32>;
}

/// Luhn's algorithm carried over to base 25.
///
/// Walking the payload from its last symbol, every other digit (starting with
/// the last one) is doubled; a doubled value that needs two base-25 digits is
/// replaced by the sum of those digits. The check digit brings the total to a
/// multiple of 25.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Luhn25;

impl CheckDigit for Luhn25 {
    fn check_digit(&self, payload: &str) -> Result<u32> {
        let len = payload.chars().count();
        let mut total: u64 = 0;

        for (x, ch) in payload.chars().rev().enumerate() {
            let mut v = digit_of(ch).ok_or(Error::InvalidCharacter {
                ch,
                position: len - 1 - x,
            })? as u64;

            if x % 2 == 0 {
                v *= 2;
                if v >= BASE {
                    v = v / BASE + v % BASE;
                }
            }

            total += v;
        }

        let rem = total % BASE;
        let check = if rem > 0 { BASE - rem } else { 0 };
        Ok(check as u32)
    }
}

/// Computes the [`Luhn25`] check digit for `payload`.
pub fn check_digit(payload: &str) -> Result<u32> {
    Luhn25.check_digit(payload)
}

/// Reports whether the last symbol of `code` is the [`Luhn25`] check digit of
/// the symbols before it. Hyphens are ignored.
pub fn verify(code: &str) -> Result<bool> {
    let bare: String = code.chars().filter(|&c| c != '-').collect();
    let mut chars = bare.chars();
    let last = chars.next_back().ok_or(Error::Empty)?;
    let payload = chars.as_str();
    if payload.is_empty() {
        return Err(Error::InvalidLength {
            expected: 2,
            got: 1,
        });
    }

    let expected = check_digit(payload)?;
    let got = digit_of(last).ok_or(Error::InvalidCharacter {
        ch: last,
        position: payload.chars().count(),
    })?;
    Ok(expected == got)
}
