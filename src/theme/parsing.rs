use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the token is unsupported.
///
/// Details:
/// - Character keys are normalized to lowercase.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a chord such as "Ctrl+R" or "Shift+Tab" into a [`KeyChord`].
///
/// Details:
/// - `Shift+Tab` becomes `BackTab` with no modifiers, as terminals report it.
pub(crate) fn parse_key_chord(text: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = None;
    for part in text.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key_part = Some(p),
        }
    }
    let key = key_part?;
    if key.eq_ignore_ascii_case("tab") && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::new(KeyCode::BackTab, KeyModifiers::empty()));
    }
    let code = parse_key_identifier(key)?;
    Some(KeyChord::new(code, mods))
}

/// What: Remove a trailing comment from a settings value.
///
/// Details:
/// - A comment starts at `#` or `//` preceded by whitespace, so URLs such as
///   `https://host/path#frag` survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, ch) in s.char_indices() {
        let starts_comment = ch == '#' || (ch == '/' && bytes.get(i + 1) == Some(&b'/'));
        if starts_comment && (i == 0 || bytes[i - 1].is_ascii_whitespace()) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// Interpret common truthy spellings.
pub(crate) fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Identifiers and chords map onto `KeyCode`/modifier combinations.
    fn key_parsing() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key_identifier("Q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key_identifier("nope"), None);
        let ch = parse_key_chord("Ctrl+R").expect("chord");
        assert_eq!(ch.code, KeyCode::Char('r'));
        assert!(ch.mods.contains(KeyModifiers::CONTROL));
        let bt = parse_key_chord("Shift+Tab").expect("chord");
        assert_eq!(bt.code, KeyCode::BackTab);
        assert!(bt.mods.is_empty());
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Inline comments are stripped but URL fragments and schemes are kept.
    fn inline_comments() {
        assert_eq!(strip_inline_comment("12 # twelve"), "12");
        assert_eq!(strip_inline_comment("12 // twelve"), "12");
        assert_eq!(
            strip_inline_comment("https://example.com/a#b"),
            "https://example.com/a#b"
        );
        assert_eq!(strip_inline_comment("# all comment"), "");
    }

    #[test]
    /// What: Boolean spellings.
    fn bools() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
