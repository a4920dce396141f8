use std::fmt;

/// The three semantic kinds of display value. The set is closed: any other
/// tag is invalid and formatting falls back to plain decimal style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Currency,
    Percentage,
    Unit,
}

pub const CURRENCY: ValueType = ValueType::Currency;
pub const PERCENTAGE: ValueType = ValueType::Percentage;
pub const UNIT: ValueType = ValueType::Unit;

impl ValueType {
    /// The registered tag string.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Currency => "currency",
            ValueType::Percentage => "percentage",
            ValueType::Unit => "unit",
        }
    }

    /// Exact, case-sensitive lookup of a tag string.
    pub fn parse(tag: &str) -> Option<ValueType> {
        match tag {
            "currency" => Some(ValueType::Currency),
            "percentage" => Some(ValueType::Percentage),
            "unit" => Some(ValueType::Unit),
            _ => None,
        }
    }

    /// Rendering style the formatter uses for this kind. Unit values render
    /// as plain decimals, not as a dedicated unit notation.
    pub fn style(self) -> Style {
        match self {
            ValueType::Currency => Style::Currency,
            ValueType::Percentage => Style::Percent,
            ValueType::Unit => Style::Decimal,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the tag is exactly one of the three registered value types.
/// No trimming, no case folding.
pub fn is_valid_type(tag: &str) -> bool {
    ValueType::parse(tag).is_some()
}

/// Rendering style understood by [`NumberFormat`](crate::NumberFormat).
/// Percent multiplies by 100 on display; decimal is the plain fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Decimal,
    Currency,
    Percent,
}
