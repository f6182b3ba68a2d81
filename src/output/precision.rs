//! Significant-figure formatting for output samples.

use serde_json::Number;

/// Rounds `value` to at least `min_sig_figs` significant digits, never
/// dropping digits left of the decimal point.
///
/// Zero maps to integer `0`; a rounded value with no fractional part comes
/// back as a JSON integer, anything else as a JSON float that serializes in
/// its shortest decimal form. Non-finite input is a caller bug and carries no
/// meaningful result (the function still returns rather than panicking).
///
/// ```
/// use nem_energy_shares::format_precision;
/// use serde_json::Number;
///
/// assert_eq!(format_precision(1234.5678, 4), Number::from(1235));
/// assert_eq!(format_precision(0.123456, 4), Number::from_f64(0.1235).unwrap());
/// assert_eq!(format_precision(1000.0, 4), Number::from(1000));
/// ```
pub fn format_precision(value: f64, min_sig_figs: u32) -> Number {
    if value == 0.0 {
        return Number::from(0);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = min_sig_figs as i32 - 1 - magnitude;
    // Negative powers of ten are inexact in binary; divide by the positive
    // power instead when rounding left of the decimal point.
    let rounded = if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    };
    if rounded.fract() == 0.0 && rounded.abs() < i64::MAX as f64 {
        Number::from(rounded as i64)
    } else {
        Number::from_f64(rounded).unwrap_or_else(|| Number::from(0))
    }
}
