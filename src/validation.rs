//! Numeric Input Masking
//!
//! Digit-only fields (DNI, phone, RUC, foreign id). Bad characters are
//! filtered as they arrive; length is checked on blur.

use std::ops::RangeInclusive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Dni,
    Phone,
    Ruc,
    /// Carné de extranjería
    ForeignId,
}

impl NumericField {
    pub fn lengths(self) -> RangeInclusive<usize> {
        match self {
            NumericField::Dni => 8..=8,
            NumericField::Phone => 9..=9,
            NumericField::Ruc => 11..=11,
            NumericField::ForeignId => 9..=12,
        }
    }

    pub fn max_len(self) -> usize {
        *self.lengths().end()
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::Dni => "DNI",
            NumericField::Phone => "teléfono",
            NumericField::Ruc => "RUC",
            NumericField::ForeignId => "carné de extranjería",
        }
    }
}

/// Keep only ASCII digits, at most `field.max_len()` of them
pub fn sanitize(raw: &str, field: NumericField) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(field.max_len())
        .collect()
}

/// Whether a keydown should reach the input. Named keys (Backspace, Tab,
/// arrows) and shortcuts pass; printable non-digits are blocked.
pub fn accepts_key(key: &str, with_modifier: bool) -> bool {
    if with_modifier {
        return true;
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit(),
        _ => true,
    }
}

/// Splice the digits of `pasted` over the selection `start..end` (character
/// offsets) of `current`. Returns the new value and the caret position.
pub fn apply_paste(current: &str, start: usize, end: usize, pasted: &str, field: NumericField) -> (String, usize) {
    let len = current.chars().count();
    let start = start.min(len);
    let end = end.clamp(start, len);

    let prefix: String = current.chars().take(start).filter(char::is_ascii_digit).collect();
    let inserted: String = pasted.chars().filter(char::is_ascii_digit).collect();
    let suffix: String = current.chars().skip(end).filter(char::is_ascii_digit).collect();

    let value = sanitize(&format!("{prefix}{inserted}{suffix}"), field);
    let caret = (prefix.len() + inserted.len()).min(value.len());
    (value, caret)
}

/// Message for `set_custom_validity`, `None` when the value is acceptable.
/// Empty values are left to the native `required` check.
pub fn validity_message(value: &str, field: NumericField) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("Solo se permiten números".to_string());
    }
    let lengths = field.lengths();
    if lengths.contains(&value.len()) {
        return None;
    }
    let (min, max) = (*lengths.start(), *lengths.end());
    Some(if min == max {
        format!("El {} debe tener {} dígitos", field.label(), min)
    } else {
        format!("El {} debe tener entre {} y {} dígitos", field.label(), min, max)
    })
}
