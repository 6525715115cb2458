//! Locale-aware display formatting for monetary and date values.
//!
//! The application presents Turkish (tr-TR) conventions: `₺1.234,56` for
//! currency, `31.12.2024` for dates, and Turkish alphabet ordering when
//! report columns are sorted by text.

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;

/// Turkish month names, indexed by month number minus one.
const MONTH_NAMES: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Turkish alphabet in collation order, with q, w and x kept at their
/// conventional Latin positions for foreign words.
const COLLATION_ORDER: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

/// Render a currency amount the way tr-TR renders TRY: lira symbol first,
/// dot thousands separators, comma decimal separator, two fraction digits.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!(
        "{}₺{},{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Parse a stored date value: RFC 3339 first, then bare `YYYY-MM-DD`.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.date_naive());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Format a stored date value as `DD.MM.YYYY`. Unparsable input is
/// returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_flexible_date(value) {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => value.to_string(),
    }
}

/// Format a stored date value as `DD.MM` for compact table rows.
pub fn format_short_date(value: &str) -> String {
    match parse_flexible_date(value) {
        Some(date) => date.format("%d.%m").to_string(),
        None => value.to_string(),
    }
}

/// Turkish name of a calendar month (1-12). Out-of-range input yields an
/// empty string.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// Compare two strings with Turkish alphabet ordering (ç after c, ı
/// before i, ş after s, and so on), case-insensitively. Non-letter
/// characters sort before letters by code point.
pub fn turkish_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(value: &str) -> Vec<u32> {
    value.chars().map(|c| char_rank(fold_lower(c))).collect()
}

/// Lowercase with the Turkish dotted/dotless I rule.
fn fold_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

fn char_rank(c: char) -> u32 {
    match COLLATION_ORDER.chars().position(|letter| letter == c) {
        Some(index) => 0x1_0000 + index as u32,
        None if (c as u32) < 0x1_0000 => c as u32,
        None => 0x2_0000 + c as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "₺0,00");
        assert_eq!(format_currency(5.0), "₺5,00");
        assert_eq!(format_currency(1234.56), "₺1.234,56");
        assert_eq!(format_currency(1_234_567.8), "₺1.234.567,80");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.56), "-₺1.234,56");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date("2024-01-02T03:04:05.678Z"), "02.01.2024");
        assert_eq!(format_date("2024-01-02"), "02.01.2024");
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_short_date("2024-12-31"), "31.12");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "Ocak");
        assert_eq!(month_name(8), "Ağustos");
        assert_eq!(month_name(12), "Aralık");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_turkish_letter_ordering() {
        assert_eq!(turkish_cmp("çilek", "elma"), Ordering::Less);
        assert_eq!(turkish_cmp("can", "çan"), Ordering::Less);
        assert_eq!(turkish_cmp("şeker", "seker"), Ordering::Greater);
        // Dotless ı sorts before dotted i.
        assert_eq!(turkish_cmp("ılık", "ilik"), Ordering::Less);
    }

    #[test]
    fn test_turkish_cmp_is_case_insensitive_first() {
        assert_eq!(turkish_cmp("Istanbul", "ısparta"), Ordering::Greater);
        assert_eq!(turkish_cmp("ANKARA", "ankarb"), Ordering::Less);
    }
}
