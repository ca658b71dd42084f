//! Printing doubles the way the JVM does, so the Rust host and the Java
//! host produce identical output for the same call-outs.

/// Format `value` like Java's `Double.toString`: integral values keep a
/// trailing `.0`, and very large or very small magnitudes switch to
/// `E` notation.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        if value.fract() == 0.0 {
            format!("{value:.1}")
        } else {
            format!("{value}")
        }
    } else {
        // Rust gives "1e7" / "2.5e-4"; Java wants "1.0E7" / "2.5E-4".
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
            None => formatted,
        }
    }
}

/// The line the entry point prints for an `average` result.
pub fn average_line(value: f64) -> String {
    format!("The average is: {}", format_double(value))
}
