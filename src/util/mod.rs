//! Small platform helpers shared by the event handlers.

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - `false` when `url` is blank and nothing was launched, otherwise `true`.
///
/// Details:
/// - On Windows, uses `cmd /c start`; elsewhere `xdg-open`, then `open` (macOS).
/// - Spawns the command in a background thread; launch failures are logged.
/// - During tests, nothing is spawned.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    tracing::info!(url, "opening link");
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let res = std::process::Command::new("cmd")
                .args(["/c", "start", "", &url])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();
            #[cfg(not(target_os = "windows"))]
            let res = std::process::Command::new("xdg-open")
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .or_else(|_| {
                    std::process::Command::new("open")
                        .arg(&url)
                        .stdin(std::process::Stdio::null())
                        .stdout(std::process::Stdio::null())
                        .stderr(std::process::Stdio::null())
                        .spawn()
                });
            if let Err(e) = res {
                tracing::warn!(url = %url, error = %e, "failed to launch URL opener");
            }
        });
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_urls_are_not_opened() {
        assert!(!open_url("   "));
        assert!(open_url("https://www.sec.gov/"));
    }
}
