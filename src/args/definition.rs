use clap::Parser;

use crate::theme::Settings;

/// filingsview - page through a company's filings in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "filingsview")]
#[command(version)]
#[command(about = "Page through a company's filings served by a filings catalog API", long_about = None)]
pub struct Args {
    /// Company identifier (CIK) to load on startup instead of the configured default
    #[arg(short, long)]
    pub cik: Option<String>,

    /// Root URL of the filings service (overrides `service_url` in settings.conf)
    #[arg(long)]
    pub service_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Layer command-line overrides on top of file settings.
    ///
    /// Inputs:
    /// - `settings`: Settings loaded from `settings.conf`.
    ///
    /// Output:
    /// - Settings with `--cik` and `--service-url` applied when given.
    #[must_use]
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(cik) = self.cik.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            settings.default_cik = cik.to_string();
        }
        if let Some(url) = self
            .service_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
        {
            settings.service_url = url.trim_end_matches('/').to_string();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "filingsview",
            "--cik",
            "0000320193",
            "--service-url",
            "http://127.0.0.1:9000/",
            "-v",
        ]);
        assert_eq!(args.cik.as_deref(), Some("0000320193"));
        assert!(args.verbose);
        assert_eq!(args.log_level, "info");

        let s = args.apply_to(Settings::default());
        assert_eq!(s.default_cik, "0000320193");
        assert_eq!(s.service_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn missing_flags_keep_settings() {
        let args = Args::parse_from(["filingsview"]);
        assert_eq!(args.apply_to(Settings::default()), Settings::default());
    }
}
