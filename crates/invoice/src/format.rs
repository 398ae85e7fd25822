//! Display formatting for invoice fields

use chrono::NaiveDate;

/// Format a currency amount: glyph prefix, two decimals, no grouping
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Format a quantity: whole numbers without a decimal point
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}

/// Format a date as MM/DD/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Cap text to a maximum character count
///
/// Plain substring cut at a char boundary, no ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
