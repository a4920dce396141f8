//! Locale-aware number rendering. [`NumberFormat`] resolves a locale and a
//! set of options at construction, then formats values one at a time. All
//! rendering conventions (separators, symbol placement, spacing) are fixed
//! per-language tables keyed by the parsed language subtag, so output is
//! deterministic across environments.

use std::fmt;

use fixed_decimal::{Decimal, FloatPrecision, Sign, SignedRoundingMode, UnsignedRoundingMode};
use icu::locale::Locale as IcuLocale;
use tinystr::TinyAsciiStr;

use crate::value_type::Style;

/// Rejected option combination, reported at [`NumberFormat`] construction.
/// Formatting itself never fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// Currency code is not exactly 3 ASCII letters.
    InvalidCurrency(String),
    /// Currency style selected without a currency code.
    MissingCurrency,
    /// A fraction-digit bound above 100.
    FractionDigitsOutOfRange { field: &'static str, value: u32 },
    /// Resolved minimum fraction digits exceed the resolved maximum.
    FractionDigitsOrder { minimum: u32, maximum: u32 },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidCurrency(code) => {
                write!(f, "invalid currency code {code:?}: expected 3 ASCII letters")
            }
            FormatError::MissingCurrency => {
                write!(f, "currency style requires a currency code")
            }
            FormatError::FractionDigitsOutOfRange { field, value } => {
                write!(f, "{field} is out of range: {value}")
            }
            FormatError::FractionDigitsOrder { minimum, maximum } => {
                write!(
                    f,
                    "minimum_fraction_digits ({minimum}) is greater than maximum_fraction_digits ({maximum})"
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Options for [`NumberFormat::new`]. Fraction-digit bounds left unset take
/// per-style defaults: the currency's minor-unit count for currency style,
/// (0, 0) for percent, (0, 3) for decimal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub style: Style,
    pub currency: Option<String>,
    pub minimum_fraction_digits: Option<u32>,
    pub maximum_fraction_digits: Option<u32>,
}

/// A locale-bound number formatter. Construction resolves the locale tag
/// (falling back to `en` when the tag does not parse, underscores included),
/// validates the option combination, and fixes every rendering convention;
/// [`format`](NumberFormat::format) is then a pure computation.
#[derive(Clone, Debug)]
pub struct NumberFormat {
    style: Style,
    minimum_fraction_digits: u32,
    maximum_fraction_digits: u32,
    decimal_separator: &'static str,
    group_separator: &'static str,
    currency_symbol: String,
    currency_after: bool,
    percent_space: bool,
    nan_symbol: &'static str,
}

impl NumberFormat {
    pub fn new(locale: &str, options: NumberFormatOptions) -> Result<NumberFormat, FormatError> {
        let resolved = resolve_locale(locale);
        let language = resolved.id.language.as_str();

        let currency = match options.currency.as_deref() {
            Some(code) => Some(parse_currency(code)?),
            None => None,
        };
        if options.style == Style::Currency && currency.is_none() {
            return Err(FormatError::MissingCurrency);
        }
        let (minimum_fraction_digits, maximum_fraction_digits) = resolve_fraction_digits(
            options.style,
            currency.as_ref().map(|code| code.as_str()),
            options.minimum_fraction_digits,
            options.maximum_fraction_digits,
        )?;

        Ok(NumberFormat {
            style: options.style,
            minimum_fraction_digits,
            maximum_fraction_digits,
            decimal_separator: decimal_separator(language),
            group_separator: group_separator(language),
            currency_symbol: currency
                .map(|code| currency_symbol(code.as_str(), language))
                .unwrap_or_default(),
            currency_after: currency_position_after(language),
            percent_space: percent_has_space(language),
            nan_symbol: nan_symbol(&resolved),
        })
    }

    /// Render one value per the resolved conventions. NaN and the infinities
    /// render as their locale symbols, still wrapped in the style's currency
    /// or percent affixes.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.wrap(self.nan_symbol, false);
        }
        if value.is_infinite() {
            return self.wrap("\u{221E}", value < 0.0);
        }

        let scaled = match self.style {
            Style::Percent => value * 100.0,
            _ => value,
        };
        let mut dec = match Decimal::try_from_f64(scaled, FloatPrecision::RoundTrip) {
            Ok(d) => d,
            Err(_) => match Decimal::try_from_str(&format!("{}", scaled)) {
                Ok(d) => d,
                Err(_) => Decimal::from(0),
            },
        };
        dec.round_with_mode(
            -(self.maximum_fraction_digits as i16),
            SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        );
        dec.absolute.trim_end();
        if self.minimum_fraction_digits > 0 {
            dec.absolute.pad_end(-(self.minimum_fraction_digits as i16));
        }

        let negative = dec.sign == Sign::Negative;
        let body = self.render_digits(&dec.absolute.to_string());
        self.wrap(&body, negative)
    }

    // Localize the separators of a plain unsigned "1234.5" rendering,
    // grouping integer digits by 3 once there are more than 3 of them.
    fn render_digits(&self, raw: &str) -> String {
        let (int_part, frac_part) = match raw.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (raw, None),
        };
        let mut out = String::with_capacity(raw.len() + 8);
        if int_part.len() > 3 {
            for (i, digit) in int_part.chars().enumerate() {
                if i > 0 && (int_part.len() - i) % 3 == 0 {
                    out.push_str(self.group_separator);
                }
                out.push(digit);
            }
        } else {
            out.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            out.push_str(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    // Style affixes around an unsigned body. A prefixed currency symbol goes
    // between the sign and the digits; a suffixed one keeps the sign on the
    // number and separates the symbol with a no-break space.
    fn wrap(&self, body: &str, negative: bool) -> String {
        let sign = if negative { "-" } else { "" };
        match self.style {
            Style::Currency => {
                if self.currency_after {
                    format!("{sign}{body}\u{00A0}{}", self.currency_symbol)
                } else {
                    format!("{sign}{}{body}", self.currency_symbol)
                }
            }
            Style::Percent => {
                if self.percent_space {
                    format!("{sign}{body}\u{00A0}%")
                } else {
                    format!("{sign}{body}%")
                }
            }
            Style::Decimal => format!("{sign}{body}"),
        }
    }
}

fn resolve_locale(locale: &str) -> IcuLocale {
    locale
        .parse::<IcuLocale>()
        .unwrap_or_else(|_| "en".parse().unwrap())
}

fn parse_currency(code: &str) -> Result<TinyAsciiStr<3>, FormatError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatError::InvalidCurrency(code.to_string()));
    }
    code.to_ascii_uppercase()
        .parse::<TinyAsciiStr<3>>()
        .map_err(|_| FormatError::InvalidCurrency(code.to_string()))
}

fn resolve_fraction_digits(
    style: Style,
    currency: Option<&str>,
    minimum: Option<u32>,
    maximum: Option<u32>,
) -> Result<(u32, u32), FormatError> {
    if let Some(value) = minimum {
        if value > 100 {
            return Err(FormatError::FractionDigitsOutOfRange {
                field: "minimum_fraction_digits",
                value,
            });
        }
    }
    if let Some(value) = maximum {
        if value > 100 {
            return Err(FormatError::FractionDigitsOutOfRange {
                field: "maximum_fraction_digits",
                value,
            });
        }
    }
    let (default_minimum, default_maximum) = match style {
        Style::Currency => {
            let digits = currency_digits(currency.unwrap_or("USD"));
            (digits, digits)
        }
        Style::Percent => (0, 0),
        Style::Decimal => (0, 3),
    };
    let (minimum, maximum) = match (minimum, maximum) {
        (Some(mn), Some(mx)) => (mn, mx),
        (Some(mn), None) => (mn, default_maximum.max(mn)),
        (None, Some(mx)) => (default_minimum.min(mx), mx),
        (None, None) => (default_minimum, default_maximum),
    };
    if minimum > maximum {
        return Err(FormatError::FractionDigitsOrder { minimum, maximum });
    }
    Ok((minimum, maximum))
}

// Minor-unit digits per uppercase ISO code; 2 for everything outside the
// zero- and three-decimal sets.
fn currency_digits(code: &str) -> u32 {
    match code {
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF" | "UGX"
        | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        _ => 2,
    }
}

fn currency_symbol(code: &str, language: &str) -> String {
    match code {
        "USD" => {
            if matches!(language, "en" | "ja" | "de" | "fr") {
                "$".to_string()
            } else {
                "US$".to_string()
            }
        }
        "EUR" => "\u{20AC}".to_string(),
        "GBP" => "\u{00A3}".to_string(),
        // Japanese renders its own yen sign full-width
        "JPY" => {
            if language == "ja" {
                "\u{FFE5}".to_string()
            } else {
                "\u{00A5}".to_string()
            }
        }
        "CNY" => "\u{00A5}".to_string(),
        "KRW" => "\u{20A9}".to_string(),
        "INR" => "\u{20B9}".to_string(),
        "RUB" => "\u{20BD}".to_string(),
        "BRL" => "R$".to_string(),
        "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "ARS" | "CLP" | "COP" => {
            format!("{}$", &code[..2])
        }
        "CHF" => "CHF".to_string(),
        "SEK" | "NOK" | "DKK" | "ISK" | "CZK" => "kr".to_string(),
        "PLN" => "z\u{0142}".to_string(),
        "THB" => "\u{0E3F}".to_string(),
        "TRY" => "\u{20BA}".to_string(),
        "ILS" => "\u{20AA}".to_string(),
        "ZAR" => "R".to_string(),
        "TWD" => "NT$".to_string(),
        other => other.to_string(),
    }
}

fn currency_position_after(language: &str) -> bool {
    matches!(
        language,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ms"
    )
}

fn percent_has_space(language: &str) -> bool {
    matches!(
        language,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no"
            | "sv" | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr"
            | "el" | "uk" | "ru" | "be" | "et" | "lv" | "lt" | "ar" | "he" | "fa" | "hi"
            | "bn" | "ta" | "te" | "mr" | "gu" | "kn" | "ml" | "si" | "th" | "ka" | "hy"
            | "az" | "kk" | "uz" | "ky" | "mn" | "sq" | "mk" | "bs" | "mt" | "is" | "ga"
            | "cy" | "eu" | "gl" | "af" | "zu" | "xh" | "sw" | "rw" | "gv"
    )
}

fn decimal_separator(language: &str) -> &'static str {
    match language {
        "de" | "fr" | "es" | "pt" | "it" | "nl" | "da" | "fi" | "nb" | "nn" | "no" | "sv"
        | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr" | "el" | "uk"
        | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ca" | "gl" | "eu" => ",",
        _ => ".",
    }
}

// Comma-decimal languages split between dot grouping and no-break-space
// grouping; everything else groups with a comma.
fn group_separator(language: &str) -> &'static str {
    match language {
        "fr" | "fi" | "nb" | "nn" | "no" | "sv" | "pl" | "cs" | "sk" | "hu" | "bg" | "uk"
        | "ru" | "be" | "et" | "lv" | "lt" => "\u{00A0}",
        "de" | "es" | "pt" | "it" | "nl" | "da" | "ro" | "hr" | "sl" | "sr" | "tr" | "el"
        | "vi" | "id" | "ca" | "gl" | "eu" => ".",
        _ => ",",
    }
}

fn nan_symbol(locale: &IcuLocale) -> &'static str {
    match locale.id.language.as_str() {
        "zh" => {
            let script = locale.id.script.as_ref().map(|s| s.as_str());
            let region = locale.id.region.as_ref().map(|r| r.as_str());
            if script == Some("Hant") || matches!(region, Some("TW" | "HK" | "MO")) {
                "\u{975E}\u{6578}\u{503C}" // 非數值 (Traditional Chinese)
            } else {
                "\u{975E}\u{6570}\u{5B57}" // 非数字 (Simplified Chinese)
            }
        }
        "ar" => "\u{0644}\u{064A}\u{0633}\u{0020}\u{0631}\u{0642}\u{0645}\u{064B}\u{0627}", // ليس رقمًا
        _ => "NaN",
    }
}
