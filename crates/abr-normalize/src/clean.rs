//! Cell-level cleaning of currency, percentage, and count text.
//!
//! Currency and count cells treat "no text" as zero; percentage cells keep
//! an explicit missing marker because a 0% buy-box share is meaningfully
//! different from "no data". Parse failures never raise.

/// Outcome of parsing one numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedCell<T> {
    Value(T),
    /// No usable text. Currency and counts default this to zero; percentages
    /// treat it as missing.
    Absent,
    /// Text was present but unparseable; degrades to the kind's default and
    /// is tallied as a defective cell.
    Garbled,
}

fn strip_wrapping(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim()
}

/// Parse a currency cell, reporting whether the text was absent or garbled.
pub fn parse_currency_cell(raw: &str, symbol: &str) -> ParsedCell<f64> {
    let cleaned = strip_wrapping(raw).replace(symbol, "").replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return ParsedCell::Absent;
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedCell::Value(value),
        _ => ParsedCell::Garbled,
    }
}

/// Parse a currency string like `"£1,234.56"` to `1234.56`.
///
/// Empty and unparseable cells both yield `0.0`; a surviving leading `-`
/// keeps the value negative.
pub fn parse_currency(raw: &str, symbol: &str) -> f64 {
    match parse_currency_cell(raw, symbol) {
        ParsedCell::Value(value) => value,
        ParsedCell::Absent | ParsedCell::Garbled => 0.0,
    }
}

/// Parse a percentage cell, reporting whether the text was absent or garbled.
pub fn parse_percentage_cell(raw: &str) -> ParsedCell<f64> {
    let cleaned = strip_wrapping(raw);
    let cleaned = cleaned.strip_suffix('%').map_or(cleaned, str::trim);
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return ParsedCell::Absent;
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedCell::Value(value),
        _ => ParsedCell::Garbled,
    }
}

/// Parse a percentage string like `"37.5%"` to `Some(37.5)`.
///
/// Empty and `nan` cells are `None`, not `0.0`. Out-of-range values pass
/// through unchanged; the range validation pass flags them.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    match parse_percentage_cell(raw) {
        ParsedCell::Value(value) => Some(value),
        ParsedCell::Absent | ParsedCell::Garbled => None,
    }
}

/// Parse a count cell, reporting whether the text was absent or garbled.
pub fn parse_count_cell(raw: &str) -> ParsedCell<i64> {
    let cleaned = strip_wrapping(raw).replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return ParsedCell::Absent;
    }
    if let Ok(value) = cleaned.parse::<i64>() {
        return ParsedCell::Value(value);
    }
    // Stray decimal text truncates toward zero rather than raising.
    match cleaned.parse::<f64>() {
        #[allow(clippy::cast_possible_truncation)]
        Ok(value) if value.is_finite() => ParsedCell::Value(value.trunc() as i64),
        _ => ParsedCell::Garbled,
    }
}

/// Parse an integer count like `"1,000"` to `1000`.
///
/// Empty and unparseable cells both yield `0`.
pub fn parse_count(raw: &str) -> i64 {
    match parse_count_cell(raw) {
        ParsedCell::Value(value) => value,
        ParsedCell::Absent | ParsedCell::Garbled => 0,
    }
}

/// Parse a boolean cell. Empty cells are false; unrecognized text is garbled.
pub fn parse_flag_cell(raw: &str) -> ParsedCell<bool> {
    let cleaned = strip_wrapping(raw);
    if cleaned.is_empty() {
        return ParsedCell::Absent;
    }
    match cleaned.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => ParsedCell::Value(true),
        "false" | "no" | "n" | "0" => ParsedCell::Value(false),
        _ => ParsedCell::Garbled,
    }
}
