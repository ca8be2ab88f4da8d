//! Reading receipt fields back out of a survey code.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checksum::{CheckDigit, Luhn25};
use crate::code::SurveyCode;
use crate::codec::decode;
use crate::epoch::from_minutes;
use crate::error::{Error, Field, Result};
use crate::flags::{order_flags, split_order_value};

/// Fields decoded from a survey code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub store_id: u64,
    pub visit_type: u8,
    /// Raw order field value, flags included.
    pub order_value: u64,
    /// The order id modulo 100, if the order value carries the expected flags.
    pub order_id: Option<u64>,
    pub flags: u64,
    pub minutes: u64,
    /// Purchase time truncated to the minute.
    pub purchased: Option<NaiveDateTime>,
    pub check_valid: bool,
}

/// Decodes `code` using its own layout and the [`Luhn25`] check digit.
pub fn inspect(code: &SurveyCode) -> Result<Decoded> {
    inspect_with(code, &Luhn25)
}

/// Decodes `code`, validating the check symbol with `check`.
pub fn inspect_with<C: CheckDigit>(code: &SurveyCode, check: &C) -> Result<Decoded> {
    let layout = code.layout();
    let payload = code.payload();

    let mut values = [0u64; 4];
    let mut offset = 0;
    for (slot, (_, width)) in values.iter_mut().zip(layout.fields()) {
        *slot = decode(&payload[offset..offset + width])?;
        offset += width;
    }
    let [store_id, visit, order_value, minutes] = values;

    let visit_type = u8::try_from(visit).map_err(|_| Error::FieldOverflow {
        field: Field::VisitType,
        value: visit,
        width: layout.visit_width,
    })?;

    let expected = check.check_digit(payload)?;
    let got = decode(&code.check_char().to_string())?;

    let decoded = Decoded {
        store_id,
        visit_type,
        order_value,
        order_id: split_order_value(order_value, visit_type),
        flags: order_flags(visit_type),
        minutes,
        purchased: from_minutes(minutes),
        check_valid: expected as u64 == got,
    };
    debug!("inspected {} -> {:?}", code, decoded);
    Ok(decoded)
}
