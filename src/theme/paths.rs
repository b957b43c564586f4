use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the user's config root.
const APP_DIR: &str = "filingsview";

/// Candidate locations for a config file, in priority order.
fn candidates(file: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(h) = env::var("HOME") {
        out.push(Path::new(&h).join(".config").join(APP_DIR).join(file));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        out.push(Path::new(&xdg).join(APP_DIR).join(file));
    }
    out
}

/// Locate `settings.conf`: `$HOME/.config/filingsview` first, then `$XDG_CONFIG_HOME/filingsview`.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    candidates("settings.conf").into_iter().find(|p| p.is_file())
}

/// Locate `theme.conf` in the same directories as `settings.conf`.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    candidates("theme.conf").into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/filingsview`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Config directory for filingsview (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/filingsview/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    #[test]
    fn config_and_logs_live_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let tmp = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", tmp.path()) };

        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert_eq!(cfg, tmp.path().join(".config").join("filingsview"));
        assert!(logs.ends_with("filingsview/logs"));
        assert!(logs.is_dir());
        assert!(super::resolve_settings_config_path().is_none());

        std::fs::write(cfg.join("settings.conf"), "default_cik = 1\n").expect("write");
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(cfg.join("settings.conf"))
        );

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
