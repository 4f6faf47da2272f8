/// Format a floating-point number without trailing zeros.
///
/// "10.50" becomes "10.5" and "10.0" becomes "10"; integral renderings are
/// left alone.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Format a monetary amount with two decimal places.
pub fn format_money(v: f64) -> String {
    format!("{v:.2}")
}
