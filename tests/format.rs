use valfmt::{
    AttainmentOptions, CURRENCY, FormatError, FormatOptions, Numeric, PERCENTAGE, Style, UNIT,
    format_as, format_attainment_percentage, terse, to_attainment_percentage,
};

#[test]
fn missing_values_format_as_zero() {
    let opts = FormatOptions::new();
    assert_eq!(format_as(None::<f64>, None, &opts).unwrap(), "0");
    assert_eq!(format_as(None::<f64>, Some(CURRENCY), &opts).unwrap(), "$0.00");
    assert_eq!(format_as("", Some(CURRENCY), &opts).unwrap(), "$0.00");
    assert_eq!(format_as("abc", Some(CURRENCY), &opts).unwrap(), "$0.00");
    assert_eq!(format_as(None::<f64>, Some(PERCENTAGE), &opts).unwrap(), "0%");
}

#[test]
fn zero_per_value_type() {
    let opts = FormatOptions::new();
    assert_eq!(format_as(0, Some(CURRENCY), &opts).unwrap(), "$0.00");
    assert_eq!(format_as(0, Some(CURRENCY), &terse(&opts)).unwrap(), "$0");
    assert_eq!(format_as(0, Some(PERCENTAGE), &opts).unwrap(), "0%");
    assert_eq!(format_as(0, Some(UNIT), &opts).unwrap(), "0");
}

#[test]
fn style_option_overrides_the_value_type() {
    let opts = FormatOptions::new()
        .locale("ja-JP")
        .currency("jpy")
        .style(Style::Currency);
    assert_eq!(format_as(0, None, &opts).unwrap(), "\u{FFE5}0");
    assert_eq!(format_as(0, Some(UNIT), &opts).unwrap(), "\u{FFE5}0");
}

#[test]
fn currency_conventions_follow_the_locale() {
    let ja = FormatOptions::new().locale("ja-JP").currency("jpy");
    assert_eq!(
        format_as(12345.12345, Some(CURRENCY), &ja).unwrap(),
        "\u{FFE5}12,345"
    );

    // underscore tags do not parse; rendering falls back to en
    let en = FormatOptions::new().locale("en_US").currency("jpy");
    assert_eq!(
        format_as(12345.12345, Some(CURRENCY), &en).unwrap(),
        "\u{00A5}12,345"
    );

    let fr = FormatOptions::new().locale("fr-FR").currency("eur");
    assert_eq!(
        format_as(12345.12345, Some(CURRENCY), &fr).unwrap(),
        "12\u{00A0}345,12\u{00A0}\u{20AC}"
    );
    assert_eq!(
        format_as(12345, Some(CURRENCY), &terse(&fr)).unwrap(),
        "12\u{00A0}345\u{00A0}\u{20AC}"
    );
}

#[test]
fn explicit_fraction_digits_apply_across_value_types() {
    let opts = FormatOptions::new().maximum_fraction_digits(3);
    assert_eq!(format_as(12345.12345, Some(UNIT), &opts).unwrap(), "12,345.123");
    assert_eq!(
        format_as(12345.12345, Some(CURRENCY), &opts).unwrap(),
        "$12,345.123"
    );
    assert_eq!(
        format_as(12345.12345, Some(PERCENTAGE), &opts).unwrap(),
        "12,345.123%"
    );
}

#[test]
fn percentage_values_arrive_pre_multiplied() {
    let opts = FormatOptions::new();
    assert_eq!(format_as(55.56, Some(PERCENTAGE), &opts).unwrap(), "55.56%");
    assert_eq!(format_as(25.0 / 12.0, Some(PERCENTAGE), &opts).unwrap(), "2.08%");

    let padded = FormatOptions::new()
        .minimum_fraction_digits(3)
        .maximum_fraction_digits(3);
    assert_eq!(format_as(1, Some(PERCENTAGE), &padded).unwrap(), "1.000%");
}

#[test]
fn unit_values_format_as_plain_decimals() {
    let opts = FormatOptions::new();
    assert_eq!(format_as(12345.12345, Some(UNIT), &opts).unwrap(), "12,345.123");
    assert_eq!(format_as("12345.12345", Some(UNIT), &opts).unwrap(), "12,345.123");
    assert_eq!(format_as(-1234.5, Some(UNIT), &opts).unwrap(), "-1,234.5");
}

#[test]
fn numeric_strings_coerce_before_formatting() {
    let opts = FormatOptions::new();
    assert_eq!(format_as("  42  ", Some(CURRENCY), &opts).unwrap(), "$42.00");
    assert_eq!(format_as("0xff", None, &opts).unwrap(), "255");
    assert_eq!(format_as("0b101", None, &opts).unwrap(), "5");
    assert_eq!(format_as("Infinity", Some(CURRENCY), &opts).unwrap(), "$\u{221E}");
    assert_eq!(
        format_as("-Infinity", Some(CURRENCY), &opts).unwrap(),
        "-$\u{221E}"
    );
}

#[test]
fn binary_float_noise_rounds_away() {
    let opts = FormatOptions::new();
    assert_eq!(format_as(0.1 + 0.2, Some(CURRENCY), &opts).unwrap(), "$0.30");
    assert_eq!(format_as(0.1 + 0.2, Some(UNIT), &opts).unwrap(), "0.3");
}

#[test]
fn terse_drops_fractions_for_whole_numbers_only() {
    let opts = terse(&FormatOptions::new());
    assert_eq!(format_as(12345, Some(CURRENCY), &opts).unwrap(), "$12,345");
    assert_eq!(
        format_as(12345.12345, Some(CURRENCY), &opts).unwrap(),
        "$12,345.12"
    );
    // absent is not a whole number; the cents stay
    assert_eq!(format_as(None::<f64>, Some(CURRENCY), &opts).unwrap(), "$0.00");
    // values that round to a whole number count as whole
    assert_eq!(format_as(41.998, Some(CURRENCY), &opts).unwrap(), "$42");
}

#[test]
fn attainment_formats_as_a_percentage() {
    let opts = FormatOptions::new();
    assert_eq!(
        format_attainment_percentage(None::<f64>, None::<f64>, &opts).unwrap(),
        "0%"
    );
    assert_eq!(format_attainment_percentage(25, 12, &opts).unwrap(), "208.33%");
    assert_eq!(format_attainment_percentage("5", 9, &opts).unwrap(), "55.56%");
    assert_eq!(format_attainment_percentage(0, 1000, &opts).unwrap(), "0%");
    assert_eq!(format_attainment_percentage(0.1 + 0.2, 1, &opts).unwrap(), "30%");

    // zero target counts as full attainment
    assert_eq!(format_attainment_percentage("1", "0", &opts).unwrap(), "100%");
    assert_eq!(format_attainment_percentage(-37.5, 0, &opts).unwrap(), "100%");

    let fr = FormatOptions::new().locale("fr-FR");
    assert_eq!(
        format_attainment_percentage("5", 9, &fr).unwrap(),
        "55,56\u{00A0}%"
    );
}

#[test]
fn attainment_value_feeds_back_into_formatting() {
    let pct = to_attainment_percentage("5", 9, AttainmentOptions::default());
    assert_eq!(pct, Numeric::Number(55.56));
    assert_eq!(
        format_as(pct, Some(PERCENTAGE), &FormatOptions::new()).unwrap(),
        "55.56%"
    );
}

#[test]
fn unrounded_attainment_still_renders_two_places() {
    let opts = FormatOptions::new().rounded(false);
    assert_eq!(format_attainment_percentage("5", 9, &opts).unwrap(), "55.56%");
}

#[test]
fn rejected_option_combinations() {
    let order = FormatOptions::new()
        .minimum_fraction_digits(3)
        .maximum_fraction_digits(1);
    assert_eq!(
        format_as(1, Some(CURRENCY), &order).unwrap_err(),
        FormatError::FractionDigitsOrder {
            minimum: 3,
            maximum: 1
        }
    );

    let range = FormatOptions::new().minimum_fraction_digits(200);
    assert_eq!(
        format_as(1, Some(UNIT), &range).unwrap_err(),
        FormatError::FractionDigitsOutOfRange {
            field: "minimum_fraction_digits",
            value: 200
        }
    );

    // the implied percentage maximum of 2 conflicts with an explicit minimum
    let implied = FormatOptions::new().minimum_fraction_digits(5);
    assert_eq!(
        format_as(1, Some(PERCENTAGE), &implied).unwrap_err(),
        FormatError::FractionDigitsOrder {
            minimum: 5,
            maximum: 2
        }
    );

    // currency codes are validated whenever present, whatever the style
    let bad_code = FormatOptions::new().currency("e");
    assert_eq!(
        format_as(1, Some(UNIT), &bad_code).unwrap_err(),
        FormatError::InvalidCurrency("e".to_string())
    );
}

#[test]
fn options_are_never_mutated_by_a_call() {
    let opts = FormatOptions::new().locale("fr-FR").currency("eur");
    let snapshot = opts.clone();

    format_as(1.5, Some(CURRENCY), &opts).unwrap();
    format_as(None::<f64>, Some(PERCENTAGE), &terse(&opts)).unwrap();
    format_attainment_percentage("5", 9, &opts).unwrap();

    assert_eq!(opts, snapshot);
    assert_eq!(
        format_as(1.5, Some(CURRENCY), &opts).unwrap(),
        "1,50\u{00A0}\u{20AC}"
    );
}
