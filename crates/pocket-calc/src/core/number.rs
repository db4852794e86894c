//! Conversions between display text and numbers

/// Reads display text as an operand
///
/// Text that is not a finite number (`.`, `-`, the error marker) reads as zero.
#[must_use]
pub fn parse_operand(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::trace!(text, "operand text is not a number, reading as zero");
            0.0
        }
    }
}

/// Rounds to `precision` decimal places, halves toward positive infinity
///
/// Suppresses binary floating point artifacts such as `0.30000000000000004`.
/// Negative zero comes back as zero.
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.fract() == 0.0 {
        return normalize_zero(value);
    }
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    normalize_zero(rounded / scale)
}

/// Renders a number in canonical minimal decimal form
///
/// No exponent, no trailing zeros, no trailing point.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
