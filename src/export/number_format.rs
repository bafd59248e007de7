/// Formats a number in the `%.18e` layout of C's printf
///
/// Rust writes the exponent as `e-1`; FEA readers and the previous tooling expect
/// a signed, two-digit exponent such as `e-01` or `e+00`.
///
/// # Examples
///
/// ```
/// use dea_expansion::export::format_scientific;
/// assert_eq!(format_scientific(1.0), "1.000000000000000000e+00");
/// assert_eq!(format_scientific(-0.25), "-2.500000000000000000e-01");
/// ```
pub fn format_scientific(value: f64) -> String {
    let text = format!("{:.18e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => text,
        },
        None => text, // NaN and inf
    }
}

/// Formats a number in its shortest round-trip decimal form (e.g., `1.4004` or `2.0`)
pub fn format_shortest(value: f64) -> String {
    format!("{:?}", value)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
