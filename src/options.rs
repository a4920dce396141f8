use crate::value_type::Style;

/// Caller-supplied formatting preferences. Every field is optional; unset
/// fields take the documented defaults at format time (`"en"` locale,
/// `"usd"` currency, style derived from the value type). The record is
/// never mutated by a formatting call — each call works on its own copy —
/// so one value can be shared and reused freely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub(crate) locale: Option<String>,
    pub(crate) currency: Option<String>,
    pub(crate) style: Option<Style>,
    pub(crate) minimum_fraction_digits: Option<u32>,
    pub(crate) maximum_fraction_digits: Option<u32>,
    pub(crate) rounded: Option<bool>,
    pub(crate) terse: bool,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// BCP-47 locale tag. An empty or malformed tag falls back to `"en"`
    /// rendering rather than failing.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Currency code, any case. Must be 3 ASCII letters when it reaches a
    /// currency-style format.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Override the rendering style instead of deriving it from the value
    /// type.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn minimum_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    pub fn maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Whether attainment percentages are pre-rounded to 2 places before
    /// display. Defaults to rounded; only the attainment operations read it.
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = Some(rounded);
        self
    }
}

/// A copy of the given options with terse mode switched on: whole-number
/// currency and unit values drop their fraction digits entirely. The input
/// record is left untouched.
pub fn terse(opts: &FormatOptions) -> FormatOptions {
    let mut combined = opts.clone();
    combined.terse = true;
    combined
}
