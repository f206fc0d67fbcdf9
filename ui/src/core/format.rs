//! Formatting helpers for presenting amounts.

/// Whole amount with thousands separators, e.g. `1,250,000`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Swap ASCII digits and separators for the script of `lang`.
/// Only Persian is special-cased; other languages pass through.
pub fn localize_digits(text: &str, lang: &str) -> String {
    if !lang.starts_with("fa") {
        return text.to_string();
    }

    text.chars()
        .map(|ch| match ch {
            '0'..='9' => char::from_u32(0x06F0 + (ch as u32 - '0' as u32)).unwrap_or(ch),
            ',' => '٬',
            '-' => '−',
            '%' => '٪',
            other => other,
        })
        .collect()
}

/// `format_amount` in the script of `lang`.
pub fn format_amount_for(value: f64, lang: &str) -> String {
    localize_digits(&format_amount(value), lang)
}
