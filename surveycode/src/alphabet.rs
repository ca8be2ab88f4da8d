//! The 25-symbol survey code alphabet.

/// Symbols in digit order: the index of a symbol is its digit value.
pub const ALPHABET: [char; 25] = [
    'C', 'M', '7', 'W', 'D', '6', 'N', '4', 'R', 'H', 'F', '9', 'Z', 'L', '3', 'X', 'K', 'Q',
    'G', 'V', 'P', 'B', 'T', 'J', 'Y',
];

/// Radix of the survey code numeral system.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Symbol for digit zero, used for left padding.
pub const ZERO: char = ALPHABET[0];

/// Returns the digit value of `c`, or `None` if it is not an alphabet symbol.
pub fn digit_of(c: char) -> Option<u32> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u32)
}

/// Returns the symbol for digit `d`, or `None` if `d >= BASE`.
pub fn char_of(d: u32) -> Option<char> {
    ALPHABET.get(d as usize).copied()
}

/// Reports whether `c` is an alphabet symbol.
pub fn is_alphabet_char(c: char) -> bool {
    digit_of(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_is_distinct() {
        let set: HashSet<char> = ALPHABET.iter().copied().collect();
        assert_eq!(set.len(), 25);
        assert_eq!(BASE, 25);
    }

    #[test]
    fn test_digit_char_inverse() {
        for d in 0..25u32 {
            let c = char_of(d).unwrap();
            assert_eq!(digit_of(c), Some(d));
        }
        assert_eq!(char_of(25), None);
    }

    #[test]
    fn test_unknown_symbols() {
        // Vowels, zero, one and lowercase are not part of the alphabet.
        for c in ['A', 'E', 'I', 'O', 'U', '0', '1', 'c', '-'] {
            assert!(!is_alphabet_char(c), "{c:?} should be rejected");
        }
        assert_eq!(ZERO, 'C');
    }
}
