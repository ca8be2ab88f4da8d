//! Field widths and grouping of a survey code.

use serde::{Deserialize, Serialize};

use crate::error::Field;

/// Widths of the code fields, in symbols, and the size of the hyphenated
/// display groups.
///
/// Field order is store, visit type, order, minutes, check digit. The check
/// digit is always a single symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    pub store_width: usize,
    pub visit_width: usize,
    pub order_width: usize,
    pub minutes_width: usize,
    pub group_size: usize,
}

impl Layout {
    /// The layout of genuine receipt codes: a two-symbol order field and
    /// twelve symbols in total, shown as `XXXX-XXXX-XXXX`.
    pub const OBSERVED: Layout = Layout {
        store_width: 3,
        visit_width: 1,
        order_width: 2,
        minutes_width: 5,
        group_size: 4,
    };

    /// A single-symbol order field, eleven symbols in total, shown as
    /// `XXXX-XXXX-XXX`. Flagged order values never fit this layout.
    pub const COMPACT: Layout = Layout {
        order_width: 1,
        ..Layout::OBSERVED
    };

    /// Widths of the payload fields in code order.
    pub fn fields(&self) -> [(Field, usize); 4] {
        [
            (Field::Store, self.store_width),
            (Field::VisitType, self.visit_width),
            (Field::Order, self.order_width),
            (Field::Minutes, self.minutes_width),
        ]
    }

    /// Number of symbols before the check digit.
    pub fn payload_len(&self) -> usize {
        self.fields().iter().map(|(_, w)| w).sum()
    }

    /// Number of symbols including the check digit.
    pub fn code_len(&self) -> usize {
        self.payload_len() + 1
    }

    /// Splits `bare` into display groups. The last group holds the remainder.
    pub fn groups<'a>(&self, bare: &'a str) -> Vec<&'a str> {
        if self.group_size == 0 || bare.is_empty() {
            return vec![bare];
        }
        let mut groups = Vec::with_capacity(bare.len().div_ceil(self.group_size));
        let mut rest = bare;
        while !rest.is_empty() {
            let at = rest
                .char_indices()
                .nth(self.group_size)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let (head, tail) = rest.split_at(at);
            groups.push(head);
            rest = tail;
        }
        groups
    }

    /// Joins the display groups of `bare` with hyphens.
    pub fn format(&self, bare: &str) -> String {
        self.groups(bare).join("-")
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::OBSERVED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(Layout::OBSERVED.payload_len(), 11);
        assert_eq!(Layout::OBSERVED.code_len(), 12);
        assert_eq!(Layout::COMPACT.payload_len(), 10);
        assert_eq!(Layout::COMPACT.code_len(), 11);
        assert_eq!(Layout::default(), Layout::OBSERVED);
    }

    #[test]
    fn test_format() {
        assert_eq!(Layout::OBSERVED.format("CN6WNQ9LYH76"), "CN6W-NQ9L-YH76");
        assert_eq!(Layout::COMPACT.format("CN6WNQ9LYH7"), "CN6W-NQ9L-YH7");
        assert_eq!(Layout::OBSERVED.format(""), "");
    }

    #[test]
    fn test_no_grouping() {
        let layout = Layout {
            group_size: 0,
            ..Layout::OBSERVED
        };
        assert_eq!(layout.groups("CN6WNQ9LYH76"), vec!["CN6WNQ9LYH76"]);
    }
}
