use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use ratatui::style::Color;

use super::parsing::{canonical_for_key, parse_color_value, split_assignment};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Process-wide palette, loaded on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Return the application's theme palette.
///
/// Details:
/// - The built-in palette is used as is unless a `theme.conf` is found, whose
///   entries override individual colors.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |path| load_theme_file(&path))
    })
}

/// What: Load overrides from a theme file on top of the built-in palette.
///
/// Details:
/// - Diagnostics are logged; an unreadable file yields the built-in palette.
fn load_theme_file(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (theme, errors) = parse_theme(&content);
            if errors.is_empty() {
                tracing::info!(path = %path.display(), "loaded theme configuration");
            } else {
                tracing::warn!(
                    path = %path.display(),
                    errors = %errors.join("\n"),
                    "theme configuration has errors; affected lines skipped"
                );
            }
            theme
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme.conf unreadable");
            Theme::default()
        }
    }
}

/// What: Apply `key = color` lines to the built-in palette.
///
/// Output:
/// - The resulting theme and one diagnostic per rejected line.
pub(crate) fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut errors = Vec::new();
    let mut seen: HashSet<&'static str> = HashSet::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let Some((key, val)) = split_assignment(line) else {
            let t = line.trim();
            if !t.is_empty() && !t.starts_with('#') && !t.starts_with("//") {
                errors.push(format!("- Missing '=' on line {line_no}"));
            }
            continue;
        };
        let Some(canon) = canonical_for_key(&key) else {
            errors.push(format!("- Unknown key '{key}' on line {line_no}"));
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            errors.push(format!("- Invalid color for '{key}' on line {line_no}"));
            continue;
        };
        if !seen.insert(canon) {
            errors.push(format!("- Duplicate key '{key}' on line {line_no}"));
        }
        set_color(&mut theme, canon, color);
    }
    (theme, errors)
}

/// Assign one palette slot by canonical name.
fn set_color(theme: &mut Theme, canon: &str, color: Color) {
    let slot = match canon {
        "base" => &mut theme.base,
        "mantle" => &mut theme.mantle,
        "crust" => &mut theme.crust,
        "surface1" => &mut theme.surface1,
        "surface2" => &mut theme.surface2,
        "overlay1" => &mut theme.overlay1,
        "overlay2" => &mut theme.overlay2,
        "text" => &mut theme.text,
        "subtext0" => &mut theme.subtext0,
        "subtext1" => &mut theme.subtext1,
        "sapphire" => &mut theme.sapphire,
        "mauve" => &mut theme.mauve,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        "lavender" => &mut theme.lavender,
        _ => return,
    };
    *slot = color;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let (theme, errors) = parse_theme(
            "# light-ish\nbackground_base = #f5f5f7\ntext = 20,20,20\n",
        );
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(theme.base, Color::Rgb(0xf5, 0xf5, 0xf7));
        assert_eq!(theme.text, Color::Rgb(20, 20, 20));
        assert_eq!(theme.mauve, Theme::default().mauve);
    }

    #[test]
    /// What: Bad lines are reported with their line number and do not abort the load.
    fn invalid_lines_are_reported_and_skipped() {
        let (theme, errors) = parse_theme(
            "sapphire = not-a-color\nsparkle = #ffffff\njust words\nred = #ff0000\nred = #00ff00\n",
        );
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("line 1"));
        assert!(errors[1].contains("Unknown key 'sparkle'"));
        assert!(errors[2].contains("Missing '='"));
        assert!(errors[3].contains("Duplicate"));
        assert_eq!(theme.sapphire, Theme::default().sapphire);
        assert_eq!(theme.red, Color::Rgb(0, 0xff, 0));
    }
}
