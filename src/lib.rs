//! Loose-input number formatting with ECMAScript coercion semantics.
//!
//! Values arrive as numbers, numeric strings, or nothing at all, and come
//! back as locale-formatted currency, percentage, or plain-unit strings.
//! Coercion follows the ECMAScript `Number()` rules (trimmed text, radix
//! prefixes, `Infinity` spellings), rendering follows CLDR-style
//! per-language conventions, and everything that fails to coerce degrades
//! to a formatted zero rather than an error.
//!
//! ```
//! use valfmt::{CURRENCY, FormatOptions, format_as, terse};
//!
//! let opts = FormatOptions::new();
//! assert_eq!(format_as(0, Some(CURRENCY), &opts).unwrap(), "$0.00");
//! assert_eq!(format_as("12345", Some(CURRENCY), &terse(&opts)).unwrap(), "$12,345");
//! ```

mod attainment;
mod coerce;
mod format;
mod intl;
mod number;
mod options;
mod round;
mod value_type;

pub use attainment::{AttainmentOptions, to_attainment_percentage};
pub use coerce::{Input, Numeric, is_number, to_number, trim};
pub use format::{format_as, format_attainment_percentage};
pub use intl::{FormatError, NumberFormat, NumberFormatOptions};
pub use options::{FormatOptions, terse};
pub use round::round;
pub use value_type::{CURRENCY, PERCENTAGE, Style, UNIT, ValueType, is_valid_type};
