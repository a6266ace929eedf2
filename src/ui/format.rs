//! Text formatting helpers shared by the panes.

use unicode_width::UnicodeWidthChar;

/// What: Format a whole-dollar amount with thousands separators.
///
/// Inputs:
/// - `amount`: Price value as stored on the record.
///
/// Output:
/// - `"$1,234,567"` style string.
#[must_use]
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What: Truncate `s` to at most `max_cols` display columns, appending `…` when cut.
///
/// Details:
/// - Uses display width so wide glyphs are never split across the limit.
#[must_use]
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    let budget = max_cols - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Thousands separators are inserted every three digits.
    fn price_separators() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1_099), "$1,099");
        assert_eq!(format_price(1_234_567), "$1,234,567");
    }

    #[test]
    /// What: Truncation respects display width and marks the cut.
    fn truncation() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
