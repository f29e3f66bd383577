//! # ssn-personnummer
//!
//! Parsing and validation of Swedish personal identity numbers
//! (personnummer) and coordination numbers (samordningsnummer).
//!
//! ## Format
//!
//! `[CC]YYMMDD[-+]NNNC`
//!
//! - `CC`: optional century digits
//! - `YYMMDD`: birth date; coordination numbers add 60 to the day
//! - `-` or `+`: optional separator, `+` conventionally marking 100+ years
//! - `NNN`: birth-order serial
//! - `C`: Luhn check digit over `YYMMDDNNN`
//!
//! Examples:
//! - `510818-9167`
//! - `19900101-0017`
//! - `701063-2391` (coordination number, born 1970-10-03)
//!
//! ## Usage
//!
//! ```
//! use ssn_personnummer::{validate, Personnummer};
//!
//! assert_eq!(validate("510818-9167"), Ok(true));
//! assert_eq!(validate(5108189168_i64), Ok(false));
//! assert!(validate("510818-916").unwrap_err().is_parsing());
//!
//! let pnr: Personnummer = "701063-2391".parse().unwrap();
//! assert!(pnr.is_coordination_number());
//! ```
//!
//! Two-digit years resolve through a [`CenturyWindow`]; build a
//! [`Validator`] to use a window other than the default.

pub mod checksum;
mod date;
mod error;
mod input;
mod parse;
mod validator;

pub use date::{birth_date, CenturyWindow, NumberKind, COORDINATION_DAY_OFFSET};
pub use error::PersonnummerError;
pub use input::Candidate;
pub use parse::{ParsedIdentifier, Separator};
pub use validator::{validate, Personnummer, Sex, Validator, DEFAULT_VALIDATOR};
