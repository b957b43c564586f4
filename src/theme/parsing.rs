use ratatui::style::Color;

/// What: Split a config line into a normalized key and its raw value.
///
/// Inputs:
/// - `line`: One line of a `key = value` config file.
///
/// Output:
/// - `Some((key, value))` for assignment lines; `None` for blanks, comments, and lines without `=`.
///
/// Details:
/// - Keys are lowercased and `.`, `-`, and spaces become `_`.
/// - The value keeps any inline comment; callers strip it as fits the value type.
pub(crate) fn split_assignment(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    Some((key, val.trim()))
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` (or bare `RRGGBB`) and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?));
    }
    None
}

/// What: Interpret a boolean setting.
///
/// Output:
/// - `Some(true)` for `true`/`1`/`yes`/`on`, `Some(false)` for `false`/`0`/`no`/`off`, else `None`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match strip_inline_comment(s).to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Map a theme key (canonical or descriptive) to its canonical palette name.
///
/// Inputs:
/// - `norm`: Normalized key.
///
/// Output:
/// - `Some(canonical)` for palette keys; `None` for anything else.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    match norm {
        "base" | "background" | "background_base" => Some("base"),
        "mantle" | "background_mantle" => Some("mantle"),
        "crust" | "background_crust" => Some("crust"),
        "surface1" | "surface_1" | "surface_level1" => Some("surface1"),
        "surface2" | "surface_2" | "surface_level2" => Some("surface2"),
        "overlay1" | "overlay_primary" | "border_primary" => Some("overlay1"),
        "overlay2" | "overlay_secondary" | "border_secondary" => Some("overlay2"),
        "text" | "text_primary" => Some("text"),
        "subtext0" | "text_secondary" => Some("subtext0"),
        "subtext1" | "text_tertiary" => Some("subtext1"),
        "sapphire" | "accent_interactive" | "accent_link" => Some("sapphire"),
        "mauve" | "accent_heading" | "accent_primary" => Some("mauve"),
        "green" | "semantic_success" => Some("green"),
        "yellow" | "semantic_warning" | "busy" => Some("yellow"),
        "red" | "semantic_error" => Some("red"),
        "lavender" | "accent_emphasis" | "accent_focus" => Some("lavender"),
        _ => None,
    }
}

/// What: Strip trailing `//` or `#` comments from a config value.
///
/// Details:
/// - A marker only starts a comment at the beginning of the value or after whitespace,
///   so URLs (`http://...`) and hex colors (`#RRGGBB`) survive.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let s = s.trim();
    let mut cut = s.len();
    for (i, _) in s.match_indices("//").chain(s.match_indices('#')) {
        let at_word_start = s[..i].chars().next_back().is_none_or(char::is_whitespace);
        let leading_hex = i == 0 && s.starts_with('#') && !s.starts_with("#/");
        if at_word_start && !leading_hex && i < cut {
            cut = i;
        }
    }
    s[..cut].trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_accept_hex_and_triplets() {
        assert_eq!(parse_color_value("#1e1e2e"), Some(Color::Rgb(30, 30, 46)));
        assert_eq!(parse_color_value("cdd6f4"), Some(Color::Rgb(205, 214, 244)));
        assert_eq!(
            parse_color_value("205, 214, 244 # text"),
            Some(Color::Rgb(205, 214, 244))
        );
        assert_eq!(parse_color_value("#12345"), None);
        assert_eq!(parse_color_value("256,0,0"), None);
        assert_eq!(parse_color_value(""), None);
    }

    #[test]
    fn inline_comments_are_stripped() {
        assert_eq!(
            strip_inline_comment("http://x:5000 // comment"),
            "http://x:5000"
        );
        assert_eq!(strip_inline_comment("// all comment"), "");
        assert_eq!(strip_inline_comment("10 # seconds"), "10");
        assert_eq!(strip_inline_comment("#abcdef # hex"), "#abcdef");
    }

    #[test]
    fn assignments_are_normalized() {
        assert_eq!(
            split_assignment("  Service-URL = http://h "),
            Some(("service_url".to_string(), "http://h"))
        );
        assert_eq!(split_assignment("# comment"), None);
        assert_eq!(split_assignment("no equals"), None);
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off // disabled"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
