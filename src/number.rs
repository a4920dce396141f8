//! Primitive conversions between `f64` and the decimal string notation the
//! coercion and rounding layers are defined in terms of.

/// Shortest round-trip rendering: the smallest decimal string that parses
/// back to the same value. NaN, zero, and the infinities have fixed
/// spellings; everything else goes through ryu.
pub(crate) fn to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let mut buf = ryu_js::Buffer::new();
    buf.format(x).to_string()
}

/// Numeric value of a trimmed, non-empty candidate string. `Infinity`
/// spellings and `0x`/`0o`/`0b` integer prefixes are recognized alongside
/// the plain decimal grammar; anything else yields NaN rather than an error.
///
/// The stdlib float parser also accepts `inf`, `infinity`, and `nan`, which
/// the decimal grammar does not, so candidates containing any alphabetic
/// character other than an exponent marker are rejected up front.
pub(crate) fn parse(text: &str) -> f64 {
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return radix_to_number(digits, 16);
    }
    if let Some(digits) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        return radix_to_number(digits, 8);
    }
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        return radix_to_number(digits, 2);
    }
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

// Prefixed integer forms take bare digits only: no sign, no fraction, no
// exponent. Values beyond u128 still convert, digit by digit.
fn radix_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || digits.starts_with('+') || digits.starts_with('-') {
        return f64::NAN;
    }
    match u128::from_str_radix(digits, radix) {
        Ok(n) => n as f64,
        Err(_) => {
            let mut acc = 0.0f64;
            for c in digits.chars() {
                let Some(d) = c.to_digit(radix) else {
                    return f64::NAN;
                };
                acc = acc * f64::from(radix) + f64::from(d);
            }
            acc
        }
    }
}

/// Round to the nearest integer with ties toward positive infinity, so
/// -100.5 rounds to -100. Non-finite values pass through.
pub(crate) fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to 2 decimal places in string space: shift the decimal point right
/// by appending an exponent to the shortest rendering, round to an integer,
/// shift back the same way. Operating on the decimal rendering avoids the
/// misrounding a multiply-round-divide by 100 produces for values like
/// 1.005, whose binary form sits just below the tie.
///
/// Values whose shortest rendering is already exponential (magnitude 1e21
/// and up, or below 1e-7) gain a second exponent marker and reparse as NaN.
pub(crate) fn round2(x: f64) -> f64 {
    let shifted = parse(&format!("{}e2", to_string(x)));
    let rounded = round_half_up(shifted);
    parse(&format!("{}e-2", to_string(rounded)))
}

/// Whether the value is a whole number (finite, no fractional part).
pub(crate) fn is_integer(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}
