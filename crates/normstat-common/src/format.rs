//! Number rendering for report values.
//!
//! Kept apart from the statistics so rounding behaviour can be tested on its
//! own.

/// Formats a number with exactly `decimals` fractional digits.
///
/// # Examples
///
/// ```
/// use normstat_common::format_fixed;
///
/// assert_eq!(format_fixed(27.0, 2), "27.00");
/// assert_eq!(format_fixed(3.316_624_8, 2), "3.32");
/// assert_eq!(format_fixed(-0.001, 2), "0.00");
/// ```
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    // "-0.00" reads as a sign error in a report
    if rendered.starts_with('-') && rendered[1..].chars().all(|ch| ch == '0' || ch == '.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

/// Smallest magnitude written without an exponent.
const PLAIN_MIN: f64 = 1e-4;
/// Magnitude from which the exponent form is used.
const PLAIN_MAX: f64 = 1e16;

/// Formats a number in its shortest round-trip form, always as a float.
///
/// Whole values keep a trailing `.0`. Magnitudes below `1e-4` or from `1e16`
/// up use an exponent with an explicit sign and at least two digits.
///
/// # Examples
///
/// ```
/// use normstat_common::format_float;
///
/// assert_eq!(format_float(162.0), "162.0");
/// assert_eq!(format_float(27.5), "27.5");
/// assert_eq!(format_float(1e20), "1e+20");
/// assert_eq!(format_float(6e-7), "6e-07");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        let scientific = format!("{value:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e')
            && let Ok(exponent) = exponent.parse::<i32>()
        {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }
    }

    let plain = format!("{value}");
    if plain.contains('.') {
        plain
    } else {
        format!("{plain}.0")
    }
}

/// Formats whole numbers below `1e16` without a fractional part and anything
/// else like [`format_float`].
///
/// # Examples
///
/// ```
/// use normstat_common::format_compact;
///
/// assert_eq!(format_compact(148.0), "148");
/// assert_eq!(format_compact(1.5), "1.5");
/// assert_eq!(format_compact(1e20), "1e+20");
/// ```
pub fn format_compact(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < PLAIN_MAX {
        format_truncated(value)
    } else {
        format_float(value)
    }
}

/// Formats the integer part of a number, truncating toward zero.
///
/// # Examples
///
/// ```
/// use normstat_common::format_truncated;
///
/// assert_eq!(format_truncated(3.0), "3");
/// assert_eq!(format_truncated(1.7), "1");
/// assert_eq!(format_truncated(-2.5), "-2");
/// ```
pub fn format_truncated(value: f64) -> String {
    let truncated = value.trunc();
    if truncated == 0.0 {
        return "0".to_string();
    }
    format!("{truncated:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pads_and_rounds() {
        assert_eq!(format_fixed(30.0, 2), "30.00");
        assert_eq!(format_fixed(33.333_333, 2), "33.33");
        assert_eq!(format_fixed(66.666_666, 2), "66.67");
        assert_eq!(format_fixed(12.0, 0), "12");
    }

    #[test]
    fn fixed_drops_negative_zero() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.004, 2), "0.00");
        assert_eq!(format_fixed(-0.006, 2), "-0.01");
    }

    #[test]
    fn float_keeps_precision_and_point() {
        assert_eq!(format_float(1.25), "1.25");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1_000_000.0), "1000000.0");
    }

    #[test]
    fn float_switches_to_exponent_at_cutoffs() {
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.000_012_5), "1.25e-05");
        assert_eq!(format_float(-6e-7), "-6e-07");
        assert_eq!(format_float(9_999_999_999_999_998.0), "9999999999999998.0");
        assert_eq!(format_float(1_234_567_890_123_456.0), "1234567890123456.0");
        assert_eq!(format_float(1.5e16), "1.5e+16");
        assert_eq!(format_float(2.5e300), "2.5e+300");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn compact_drops_point_on_whole_numbers() {
        assert_eq!(format_compact(236.0), "236");
        assert_eq!(format_compact(-4.0), "-4");
        assert_eq!(format_compact(0.5), "0.5");
        assert_eq!(format_compact(6e-7), "6e-07");
        assert_eq!(format_compact(1e16), "1e+16");
    }

    #[test]
    fn truncated_handles_large_values() {
        assert_eq!(format_truncated(12_345_678_901.9), "12345678901");
        assert_eq!(format_truncated(-0.4), "0");
    }
}
