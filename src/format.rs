//! End-user formatting entry points. These resolve loose caller options into
//! a concrete [`NumberFormat`] request, coerce the value, and delegate.

use crate::attainment::{AttainmentOptions, to_attainment_percentage};
use crate::coerce::{Input, Numeric, to_number};
use crate::intl::{FormatError, NumberFormat, NumberFormatOptions};
use crate::number;
use crate::options::FormatOptions;
use crate::value_type::ValueType;

// Everything decided before the formatter is built: the locale tag, the
// coerced payload (absence still pending), and the facility options.
struct Resolved {
    locale: String,
    payload: Numeric,
    options: NumberFormatOptions,
}

fn resolve(value: Input, value_type: Option<ValueType>, opts: &FormatOptions) -> Resolved {
    let locale = match opts.locale.as_deref() {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => "en".to_string(),
    };
    let currency = match opts.currency.as_deref() {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => "usd".to_string(),
    };
    let style = opts
        .style
        .or_else(|| value_type.map(ValueType::style))
        .unwrap_or_default();

    // Percentage values arrive pre-multiplied (55.56 meaning 55.56%), so
    // divide back down before the percent style re-scales them. Absence
    // becomes 0 here so that 0% still comes out the other side.
    let coerced = to_number(value);
    let payload = if value_type == Some(ValueType::Percentage) {
        let n = match coerced {
            Numeric::Number(n) => n,
            Numeric::Absent => 0.0,
        };
        Numeric::Number(n / 100.0)
    } else {
        coerced
    };

    let mut minimum_fraction_digits = opts.minimum_fraction_digits;
    let mut maximum_fraction_digits = opts.maximum_fraction_digits;
    if maximum_fraction_digits.is_none() {
        if value_type == Some(ValueType::Percentage) {
            maximum_fraction_digits = Some(2);
        } else if opts.terse {
            // Integer-after-rounding values drop their fraction entirely.
            // A non-number payload stays on the style's defaults, so terse
            // currency for an absent value still renders cents.
            if let Numeric::Number(n) = payload {
                if number::is_integer(number::round2(n)) {
                    minimum_fraction_digits = Some(0);
                    maximum_fraction_digits = Some(0);
                }
            }
        }
    }

    Resolved {
        locale,
        payload,
        options: NumberFormatOptions {
            style,
            currency: Some(currency),
            minimum_fraction_digits,
            maximum_fraction_digits,
        },
    }
}

/// Format a loosely-typed value under a value type and caller options.
///
/// The value type supplies the style when the options do not name one:
/// currency, percent, or plain decimal for [`ValueType::Unit`] and for
/// `None`. Values that coerce to nothing format as zero. The only failures
/// are rejected option combinations, reported by [`NumberFormat::new`].
pub fn format_as(
    value: impl Into<Input>,
    value_type: Option<ValueType>,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let resolved = resolve(value.into(), value_type, opts);
    let format = NumberFormat::new(&resolved.locale, resolved.options)?;
    let value = match resolved.payload {
        Numeric::Number(n) => n,
        Numeric::Absent => 0.0,
    };
    Ok(format.format(value))
}

/// Compute attainment of `target` and format it as a percentage in one step.
/// Rounding to two places is on unless the options turn it off.
pub fn format_attainment_percentage(
    attainment: impl Into<Input>,
    target: impl Into<Input>,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let rounded = opts.rounded.unwrap_or(true);
    let percentage = to_attainment_percentage(attainment, target, AttainmentOptions { rounded });
    format_as(percentage, Some(ValueType::Percentage), opts)
}
