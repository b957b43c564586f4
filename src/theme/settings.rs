use std::fs;

use tracing::{debug, warn};

use crate::theme::parsing::{parse_bool, split_assignment, strip_inline_comment};
use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; missing files and keys fall back to `Settings::default()`.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_config_path() else {
        debug!("[Config] no settings.conf found, using defaults");
        return out;
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "[Config] settings.conf unreadable, using defaults"
        ),
    }
    out
}

/// What: Apply `key = value` lines from settings.conf content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - Unknown keys are ignored; invalid values keep the previous value and are logged.
pub(crate) fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, raw)) = split_assignment(line) else {
            continue;
        };
        let val = strip_inline_comment(raw);
        match key.as_str() {
            "service_url" | "api_url" | "backend_url" => {
                if val.is_empty() {
                    warn!("[Config] empty service_url ignored");
                } else {
                    settings.service_url = val.trim_end_matches('/').to_string();
                }
            }
            "default_cik" | "cik" => settings.default_cik = val.to_string(),
            "connect_timeout_secs" | "connect_timeout" => match val.parse::<u64>() {
                Ok(v) if v > 0 => settings.connect_timeout_secs = v,
                _ => warn!(value = val, "[Config] invalid connect_timeout_secs ignored"),
            },
            "show_help_footer" | "show_keybinds_footer" => match parse_bool(val) {
                Some(b) => settings.show_help_footer = b,
                None => warn!(value = val, "[Config] invalid show_help_footer ignored"),
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Known keys override defaults, comments are stripped, and unknown keys are ignored.
    fn parses_known_keys() {
        let mut s = Settings::default();
        parse_settings(
            "# filingsview settings\n\
             service_url = http://filings.internal:8080/ // prod\n\
             default-cik = 0000320193\n\
             connect_timeout_secs = 3 # seconds\n\
             show_help_footer = off\n\
             colour = blue\n",
            &mut s,
        );
        assert_eq!(s.service_url, "http://filings.internal:8080");
        assert_eq!(s.default_cik, "0000320193");
        assert_eq!(s.connect_timeout_secs, 3);
        assert!(!s.show_help_footer);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let mut s = Settings::default();
        parse_settings(
            "connect_timeout_secs = soon\nshow_help_footer = perhaps\nservice_url =\n",
            &mut s,
        );
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn settings_reads_file_from_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let tmp = tempfile::tempdir().expect("tempdir");
        let dir = tmp.path().join(".config").join("filingsview");
        std::fs::create_dir_all(&dir).expect("mkdir");
        std::fs::write(dir.join("settings.conf"), "default_cik = 0001318605\n").expect("write");
        unsafe { std::env::set_var("HOME", tmp.path()) };

        let s = settings();
        assert_eq!(s.default_cik, "0001318605");
        assert_eq!(s.service_url, "http://localhost:5000");

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
