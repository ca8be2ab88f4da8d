//! Survey code assembly.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::alphabet::is_alphabet_char;
use crate::checksum::{CheckDigit, Luhn25};
use crate::codec::encode_field;
use crate::epoch::minutes_since_epoch;
use crate::error::{Error, Field, Result};
use crate::flags::order_value;
use crate::layout::Layout;

/// Kind of visit printed on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitType(pub u8);

impl VisitType {
    /// The visit type used when none is given.
    pub const DEFAULT: VisitType = VisitType(3);
}

impl Default for VisitType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The receipt details a survey code is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub store_id: u64,
    pub order_id: u64,
    pub purchased: NaiveDateTime,
    #[serde(default)]
    pub visit_type: VisitType,
}

impl Receipt {
    /// Creates a receipt with the default visit type.
    pub fn new(store_id: u64, order_id: u64, purchased: NaiveDateTime) -> Self {
        Self {
            store_id,
            order_id,
            purchased,
            visit_type: VisitType::default(),
        }
    }

    /// Sets the visit type.
    pub fn with_visit_type(mut self, visit_type: u8) -> Self {
        self.visit_type = VisitType(visit_type);
        self
    }
}

/// Builds survey codes from receipts.
#[derive(Debug, Clone)]
pub struct Assembler<C = Luhn25> {
    layout: Layout,
    check: C,
}

impl Assembler<Luhn25> {
    /// Creates an assembler for [`Layout::OBSERVED`] with the [`Luhn25`]
    /// check digit.
    pub fn new() -> Self {
        Self {
            layout: Layout::default(),
            check: Luhn25,
        }
    }
}

impl Default for Assembler<Luhn25> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CheckDigit> Assembler<C> {
    /// Uses `layout` for field widths and grouping.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces the check digit scheme.
    pub fn with_check_digit<D: CheckDigit>(self, check: D) -> Assembler<D> {
        Assembler {
            layout: self.layout,
            check,
        }
    }

    /// Returns the layout in use.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Encodes the receipt fields without the check digit.
    pub fn payload(&self, receipt: &Receipt) -> Result<String> {
        let visit = receipt.visit_type.0;
        let minutes = minutes_since_epoch(receipt.purchased)?;

        let mut payload = String::with_capacity(self.layout.payload_len());
        payload.push_str(&encode_field(
            Field::Store,
            receipt.store_id,
            self.layout.store_width,
        )?);
        payload.push_str(&encode_field(
            Field::VisitType,
            visit as u64,
            self.layout.visit_width,
        )?);
        payload.push_str(&encode_field(
            Field::Order,
            order_value(receipt.order_id, visit),
            self.layout.order_width,
        )?);
        payload.push_str(&encode_field(
            Field::Minutes,
            minutes,
            self.layout.minutes_width,
        )?);
        Ok(payload)
    }

    /// Builds the survey code for `receipt`.
    pub fn assemble(&self, receipt: &Receipt) -> Result<SurveyCode> {
        let mut bare = self.payload(receipt)?;
        let check = self.check.check_digit(&bare)?;
        bare.push_str(&encode_field(Field::CheckDigit, check as u64, 1)?);

        let code = SurveyCode {
            bare,
            layout: self.layout,
        };
        debug!(
            "store {} order {} visit {} purchased {} -> {}",
            receipt.store_id, receipt.order_id, receipt.visit_type, receipt.purchased, code
        );
        Ok(code)
    }
}

/// A survey code whose symbols and length match its layout.
///
/// Displays and serializes as the hyphenated form, e.g. `CN6W-NQ9L-YH76`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurveyCode {
    bare: String,
    layout: Layout,
}

impl SurveyCode {
    /// Parses a code for the given layout.
    ///
    /// Hyphens and whitespace are ignored and lowercase input is accepted.
    pub fn parse_with_layout(s: &str, layout: Layout) -> Result<Self> {
        let bare: String = s
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if bare.is_empty() {
            return Err(Error::Empty);
        }
        if let Some((position, ch)) = bare.chars().enumerate().find(|(_, c)| !is_alphabet_char(*c))
        {
            return Err(Error::InvalidCharacter { ch, position });
        }
        let got = bare.chars().count();
        if got != layout.code_len() {
            return Err(Error::InvalidLength {
                expected: layout.code_len(),
                got,
            });
        }

        Ok(Self { bare, layout })
    }

    /// Parses a code in either known layout, chosen by its symbol count:
    /// eleven symbols read as [`Layout::COMPACT`], anything else as
    /// [`Layout::OBSERVED`].
    pub fn parse_any(s: &str) -> Result<Self> {
        let count = s
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .count();
        let layout = if count == Layout::COMPACT.code_len() {
            Layout::COMPACT
        } else {
            Layout::OBSERVED
        };
        Self::parse_with_layout(s, layout)
    }

    /// Returns the symbols without hyphens.
    pub fn as_str(&self) -> &str {
        &self.bare
    }

    /// Returns the layout the code was built or parsed with.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the hyphen-separated groups.
    pub fn groups(&self) -> Vec<&str> {
        self.layout.groups(&self.bare)
    }

    /// Returns the symbols before the check digit.
    pub fn payload(&self) -> &str {
        // all symbols are ASCII
        &self.bare[..self.bare.len() - 1]
    }

    /// Returns the check symbol.
    pub fn check_char(&self) -> char {
        self.bare.chars().last().unwrap_or_default()
    }
}

impl fmt::Display for SurveyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.layout.format(&self.bare))
    }
}

impl FromStr for SurveyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_layout(s, Layout::default())
    }
}

impl Serialize for SurveyCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SurveyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_any(&s).map_err(serde::de::Error::custom)
    }
}

/// Generates the survey code for a receipt with the default visit type.
///
/// Returns the hyphenated code, e.g. `CN6W-NQ9L-YH76`.
pub fn generate_code(store_id: u64, order_id: u64, purchased: NaiveDateTime) -> Result<String> {
    generate_code_with_visit_type(store_id, order_id, purchased, VisitType::DEFAULT.0)
}

/// Generates the survey code for a receipt.
pub fn generate_code_with_visit_type(
    store_id: u64,
    order_id: u64,
    purchased: NaiveDateTime,
    visit_type: u8,
) -> Result<String> {
    let receipt = Receipt::new(store_id, order_id, purchased).with_visit_type(visit_type);
    Ok(Assembler::new().assemble(&receipt)?.to_string())
}
