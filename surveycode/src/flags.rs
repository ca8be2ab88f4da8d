//! Order flags added to the order id before encoding.
//!
//! Nothing on the survey side is known to validate these values. They are the
//! offsets observed in genuine receipt codes.

/// Added for every order. Decodes from `"DC"`.
pub const FLAG_ALWAYS: u64 = 100;

/// Added only for the visit types in [`FLAGGED_VISIT_TYPES`]. Decodes from `"MC"`.
pub const FLAG_VISIT: u64 = 25;

/// Visit types that carry [`FLAG_VISIT`].
pub const FLAGGED_VISIT_TYPES: [u8; 2] = [3, 5];

/// Order ids are reduced modulo this value before the flags are added.
pub const ORDER_MODULUS: u64 = 100;

/// Returns the flags for an order of the given visit type.
pub fn order_flags(visit_type: u8) -> u64 {
    let mut flags = FLAG_ALWAYS;
    if FLAGGED_VISIT_TYPES.contains(&visit_type) {
        flags += FLAG_VISIT;
    }
    flags
}

/// Returns the value stored in the order field.
pub fn order_value(order_id: u64, visit_type: u8) -> u64 {
    order_id % ORDER_MODULUS + order_flags(visit_type)
}

/// Recovers `order_id % 100` from an order field value.
///
/// Returns `None` when the value cannot have been produced by
/// [`order_value`] for this visit type.
pub fn split_order_value(value: u64, visit_type: u8) -> Option<u64> {
    value
        .checked_sub(order_flags(visit_type))
        .filter(|&id| id < ORDER_MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    #[test]
    fn test_flag_constants_match_symbols() {
        assert_eq!(decode("DC").unwrap(), FLAG_ALWAYS);
        assert_eq!(decode("MC").unwrap(), FLAG_VISIT);
    }

    #[test]
    fn test_order_flags() {
        assert_eq!(order_flags(3), 125);
        assert_eq!(order_flags(5), 125);
        assert_eq!(order_flags(1), 100);
        assert_eq!(order_flags(4), 100);
    }

    #[test]
    fn test_order_value() {
        assert_eq!(order_value(42, 3), 167);
        assert_eq!(order_value(42, 1), 142);
        assert_eq!(order_value(1042, 1), 142);
        assert_eq!(order_value(99, 5), 224);
    }

    #[test]
    fn test_split_order_value() {
        assert_eq!(split_order_value(167, 3), Some(42));
        assert_eq!(split_order_value(142, 1), Some(42));
        assert_eq!(split_order_value(99, 1), None);
        assert_eq!(split_order_value(225, 3), None);
    }
}
