use crate::coerce::{Input, Numeric, to_number};
use crate::number;

/// Coerce and round to 2 decimal places. Absence propagates; rounding works
/// on the decimal rendering (shift two places in string space, round, shift
/// back), so values like 1.005 round up rather than falling to the binary
/// misrounding of a multiply-round-divide.
pub fn round(value: impl Into<Input>) -> Numeric {
    match to_number(value) {
        Numeric::Number(n) => Numeric::Number(number::round2(n)),
        Numeric::Absent => Numeric::Absent,
    }
}
