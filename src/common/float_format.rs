/// Formats an `f64` the way Python's `repr(float)` does, so printed
/// sequences stay byte-compatible with the capture project's existing data.
///
/// Rust's `Debug` output already picks the shortest round-tripping digits
/// and switches to scientific notation at the same thresholds; only the
/// exponent spelling (`1e-5` vs `1e-05`) and `NaN` differ.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_a_decimal_point() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(8.0), "8.0");
        assert_eq!(format_float(-3.0), "-3.0");
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_float(2.5), "2.5");
    }

    #[test]
    fn exponents_are_signed_and_padded() {
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.2345e123), "1.2345e+123");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_float(f64::NAN), "nan");
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    }
}
