//! Operand text filtering and parsing
//!
//! Operand fields accept only ASCII digits and one decimal point. Filtering
//! happens on every edit; parsing happens when an operation is pressed.

/// Filters operand text down to ASCII digits and the first decimal point
///
/// Letters, signs, whitespace and any decimal point after the first are
/// dropped.
#[must_use]
pub fn sanitize_operand(text: &str) -> String {
    let mut seen_point = false;
    text.chars()
        .filter(|&c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Returns true if the character may appear in an operand field
#[must_use]
pub const fn is_operand_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parses operand text into a number
///
/// Accepts digits with at most one decimal point and at least one digit
/// (`"7"`, `"1."`, `".5"`). Everything else, including the empty string,
/// a lone `"."`, signs and exponents, is rejected, as is digit text too long
/// to fit in an `f64`.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let mut digits = 0usize;
    let mut points = 0usize;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
