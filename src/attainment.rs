use crate::coerce::{Input, Numeric, to_number};
use crate::round::round;

/// Options for [`to_attainment_percentage`]. The default pre-rounds the
/// percentage to 2 decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttainmentOptions {
    pub rounded: bool,
}

impl Default for AttainmentOptions {
    fn default() -> Self {
        Self { rounded: true }
    }
}

/// Attainment against target as a percentage: attainment ÷ target × 100,
/// rounded to 2 places unless `opts.rounded` is false. A target of exactly
/// zero counts as fully attained (100%) instead of dividing by zero.
/// Absence of either input propagates.
pub fn to_attainment_percentage(
    attainment: impl Into<Input>,
    target: impl Into<Input>,
    opts: AttainmentOptions,
) -> Numeric {
    let Numeric::Number(attainment) = to_number(attainment) else {
        return Numeric::Absent;
    };
    let Numeric::Number(target) = to_number(target) else {
        return Numeric::Absent;
    };
    let quotient = if target == 0.0 {
        1.0
    } else {
        attainment / target
    };
    let percentage = quotient * 100.0;
    if opts.rounded {
        round(percentage)
    } else {
        Numeric::Number(percentage)
    }
}
