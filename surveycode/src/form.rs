//! Survey entry form fields.

use serde::{Deserialize, Serialize};

use crate::code::SurveyCode;
use crate::error::{Error, Result};

/// Values for the survey's entry form: the three code groups and the price
/// split into whole units and cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    #[serde(rename = "CN1")]
    pub cn1: String,
    #[serde(rename = "CN2")]
    pub cn2: String,
    #[serde(rename = "CN3")]
    pub cn3: String,
    #[serde(rename = "AmountSpent1")]
    pub amount_spent1: String,
    #[serde(rename = "AmountSpent2")]
    pub amount_spent2: String,
}

impl FormFields {
    /// Maps `code` and `price` (e.g. `"2.99"`) onto the form.
    pub fn new(code: &SurveyCode, price: &str) -> Result<Self> {
        let groups = code.groups();
        let [cn1, cn2, cn3] = groups.as_slice() else {
            return Err(Error::InvalidGroups {
                expected: 3,
                got: groups.len(),
            });
        };
        let (whole, cents) = split_price(price)?;

        Ok(Self {
            cn1: cn1.to_string(),
            cn2: cn2.to_string(),
            cn3: cn3.to_string(),
            amount_spent1: whole.to_string(),
            amount_spent2: cents.to_string(),
        })
    }

    /// Returns `(input name, value)` pairs in form order.
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("CN1", self.cn1.as_str()),
            ("CN2", self.cn2.as_str()),
            ("CN3", self.cn3.as_str()),
            ("AmountSpent1", self.amount_spent1.as_str()),
            ("AmountSpent2", self.amount_spent2.as_str()),
        ]
    }
}

fn split_price(price: &str) -> Result<(&str, &str)> {
    let invalid = || Error::InvalidPrice(price.to_string());
    let (whole, cents) = price.trim().split_once('.').ok_or_else(invalid)?;

    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !digits(cents) || cents.len() != 2 {
        return Err(invalid());
    }
    Ok((whole, cents))
}
