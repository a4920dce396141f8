//! Coercion of loosely-typed input into either a usable number or an
//! explicit absent signal.

use crate::number;

/// Loosely-typed input accepted by every coercion entry point: nothing, a
/// number, or a candidate numeric string.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Absent,
    Number(f64),
    Text(String),
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Number(value)
    }
}

impl From<f32> for Input {
    fn from(value: f32) -> Self {
        Input::Number(f64::from(value))
    }
}

impl From<i32> for Input {
    fn from(value: i32) -> Self {
        Input::Number(f64::from(value))
    }
}

impl From<u32> for Input {
    fn from(value: u32) -> Self {
        Input::Number(f64::from(value))
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Number(value as f64)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<Numeric> for Input {
    fn from(value: Numeric) -> Self {
        match value {
            Numeric::Number(n) => Input::Number(n),
            Numeric::Absent => Input::Absent,
        }
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Input::Absent,
        }
    }
}

/// Result of coercion: a usable floating-point value, or an explicit
/// "no valid numeric value" signal distinct from zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric {
    Number(f64),
    Absent,
}

impl Numeric {
    pub fn is_absent(self) -> bool {
        matches!(self, Numeric::Absent)
    }

    /// The carried value, if any.
    pub fn number(self) -> Option<f64> {
        match self {
            Numeric::Number(n) => Some(n),
            Numeric::Absent => None,
        }
    }
}

// The one coercion path both is_number and to_number are views of. A number
// input is valid unless it is NaN; a string input is valid when its trimmed
// form is non-empty and reads under the numeric grammar.
fn coerce(input: &Input) -> Numeric {
    match input {
        Input::Absent => Numeric::Absent,
        Input::Number(n) => {
            if n.is_nan() {
                Numeric::Absent
            } else {
                Numeric::Number(*n)
            }
        }
        Input::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Numeric::Absent;
            }
            let parsed = number::parse(trimmed);
            if parsed.is_nan() {
                Numeric::Absent
            } else {
                Numeric::Number(parsed)
            }
        }
    }
}

/// Empty string for absent input; otherwise the input's string form with
/// leading and trailing whitespace (newlines included) stripped. Numbers
/// render in shortest round-trip notation. Never fails.
pub fn trim(value: impl Into<Input>) -> String {
    match value.into() {
        Input::Absent => String::new(),
        Input::Number(n) => number::to_string(n),
        Input::Text(s) => s.trim().to_string(),
    }
}

/// Whether the input coerces to a valid number. Infinite values count;
/// NaN, absent input, and empty or non-numeric strings do not.
pub fn is_number(value: impl Into<Input>) -> bool {
    matches!(coerce(&value.into()), Numeric::Number(_))
}

/// Coerce to a number, or to [`Numeric::Absent`] when [`is_number`] would
/// not hold. Never zero-fills and never fails.
pub fn to_number(value: impl Into<Input>) -> Numeric {
    coerce(&value.into())
}
