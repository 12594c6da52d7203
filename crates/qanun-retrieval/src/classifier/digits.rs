//! Digit-script normalization.
//!
//! Queries and article numbers arrive in Western digits, Arabic-Indic
//! digits (U+0660–U+0669), or Extended Arabic-Indic digits
//! (U+06F0–U+06F9). Everything downstream (article lookup, filter
//! clauses) works on the canonical ASCII form.

/// Map every Arabic-Indic and Extended Arabic-Indic digit to its ASCII
/// equivalent, leaving all other characters untouched.
pub fn normalize_digits(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

fn normalize_char(c: char) -> char {
    match c {
        '٠'..='٩' => char::from(b'0' + (c as u32 - 0x0660) as u8),
        '۰'..='۹' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
        _ => c,
    }
}
