/// Reads a number typed by the user. Empty, unparsable and non-finite text
/// all come back as `None`.
pub fn parse_optional_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Like [`parse_optional_number`], but also accepts `decimal_separator` in
/// place of `.` so that `"1,5"` parses when the separator is `,`.
pub fn parse_localized_number(text: &str, decimal_separator: char) -> Option<f64> {
    if decimal_separator == '.' {
        return parse_optional_number(text);
    }
    // A dot is still fine, but not both in one number
    if text.contains(decimal_separator) && text.contains('.') {
        return None;
    }
    parse_optional_number(&text.replace(decimal_separator, "."))
}
