//! Receipt survey code generation.
//!
//! A survey code packs a store id, visit type, flagged order id and the
//! purchase time into base-25 symbols and appends a check symbol:
//!
//! - [`codec`]: integer encoding over the 25-symbol [`alphabet`]
//! - [`checksum`]: the base-25 Luhn check digit
//! - [`flags`]: order flags added to the order id
//! - [`epoch`]: minute offsets from 2016-02-01T00:00:00
//! - [`Assembler`]: builds a [`SurveyCode`] from a [`Receipt`]
//!
//! All operations are pure and deterministic.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use receipt_surveycode::{generate_code, FormFields, SurveyCode};
//!
//! let purchased = NaiveDate::from_ymd_opt(2024, 9, 1)
//!     .unwrap()
//!     .and_hms_opt(13, 47, 52)
//!     .unwrap();
//! let code = generate_code(155, 42, purchased).unwrap();
//! assert_eq!(code, "CN6W-NQ9L-YH76");
//!
//! let code: SurveyCode = code.parse().unwrap();
//! let form = FormFields::new(&code, "2.99").unwrap();
//! assert_eq!(form.cn3, "YH76");
//! assert_eq!(form.amount_spent2, "99");
//! ```

pub mod alphabet;
pub mod checksum;
pub mod codec;
pub mod epoch;
pub mod flags;

mod code;
mod error;
mod form;
mod inspect;
mod layout;

pub use checksum::{check_digit, verify, CheckDigit, Luhn25};
pub use code::{
    generate_code, generate_code_with_visit_type, Assembler, Receipt, SurveyCode, VisitType,
};
pub use codec::{decode, encode};
pub use error::{Error, Field, Result};
pub use form::FormFields;
pub use inspect::{inspect, inspect_with, Decoded};
pub use layout::Layout;
