use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are [`ratatui::style::Color`] values usable directly in styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade, used for the footer.
    pub crust: Color,
    /// Surface color for inactive controls.
    pub surface1: Color,
    /// Surface color for the focused control.
    pub surface2: Color,
    /// Border color for unfocused panels.
    pub overlay1: Color,
    /// Border color for disabled pagination controls.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text (table cells, hints).
    pub subtext0: Color,
    /// Tertiary text (summary line).
    pub subtext1: Color,
    /// Interactive accent: links and the active page.
    pub sapphire: Color,
    /// Heading accent: titles and column headers.
    pub mauve: Color,
    /// Success color.
    pub green: Color,
    /// Busy indicator color.
    pub yellow: Color,
    /// Error color used by alerts.
    pub red: Color,
    /// Focus border color.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Root URL of the Filings Service.
    pub service_url: String,
    /// Identifier prefilled at startup and fetched on launch.
    pub default_cik: String,
    /// TCP connect timeout for service requests, in seconds.
    pub connect_timeout_secs: u64,
    /// Whether the key-hint footer is drawn.
    pub show_help_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:5000".to_string(),
            default_cik: "0001601830".to_string(),
            connect_timeout_secs: 10,
            show_help_footer: true,
        }
    }
}
