use ratatui::style::Color;

use crate::config::ColorsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Auto,
    Truecolor,
    Color256,
    Mono,
}

impl ColorSupport {
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "truecolor" | "24bit" => ColorSupport::Truecolor,
            "256" | "256color" => ColorSupport::Color256,
            "mono" | "monochrome" => ColorSupport::Mono,
            _ => ColorSupport::Auto,
        }
    }
}

pub fn detect_color_support() -> ColorSupport {
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorSupport::Truecolor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        return ColorSupport::Color256;
    }
    ColorSupport::Color256
}

pub fn resolve_color_support(config: &str) -> ColorSupport {
    let parsed = ColorSupport::from_config_str(config);
    if parsed == ColorSupport::Auto {
        detect_color_support()
    } else {
        parsed
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface_bg: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub alert_fg: Color,
    pub header_accent_fg: Color,
    pub header_accent_bg: Color,
    pub gauge_filled: Color,
    pub gauge_unfilled: Color,
    pub statusbar_bg: Color,
    pub pill_key_fg: Color,
    pub pill_key_bg: Color,
    pub pill_desc_fg: Color,
    pub overlay_border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x16, 0x16, 0x1e),
            surface_bg: Color::Rgb(0x20, 0x20, 0x2c),
            text_primary: Color::Rgb(0xd8, 0xd8, 0xe0),
            text_secondary: Color::Rgb(0x8a, 0x8a, 0x9a),
            alert_fg: Color::Rgb(0xe0, 0x6c, 0x5e),
            header_accent_fg: Color::Rgb(0x16, 0x16, 0x1e),
            header_accent_bg: Color::Rgb(0xb5, 0x89, 0x0a),
            gauge_filled: Color::Rgb(0xb5, 0x89, 0x0a),
            gauge_unfilled: Color::Rgb(0x2c, 0x2c, 0x38),
            statusbar_bg: Color::Rgb(0x20, 0x20, 0x2c),
            pill_key_fg: Color::Rgb(0x16, 0x16, 0x1e),
            pill_key_bg: Color::Rgb(0xb5, 0x89, 0x0a),
            pill_desc_fg: Color::Rgb(0x8a, 0x8a, 0x9a),
            overlay_border: Color::Rgb(0x3a, 0x3a, 0x4a),
        }
    }

    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xf4, 0xf4, 0xf0),
            surface_bg: Color::Rgb(0xe6, 0xe6, 0xe0),
            text_primary: Color::Rgb(0x22, 0x22, 0x28),
            text_secondary: Color::Rgb(0x60, 0x60, 0x6a),
            alert_fg: Color::Rgb(0xa1, 0x2e, 0x2e),
            header_accent_fg: Color::Rgb(0xf4, 0xf4, 0xf0),
            header_accent_bg: Color::Rgb(0x2d, 0x5a, 0x8e),
            gauge_filled: Color::Rgb(0x2d, 0x5a, 0x8e),
            gauge_unfilled: Color::Rgb(0xd0, 0xd0, 0xc8),
            statusbar_bg: Color::Rgb(0xe6, 0xe6, 0xe0),
            pill_key_fg: Color::Rgb(0xf4, 0xf4, 0xf0),
            pill_key_bg: Color::Rgb(0x2d, 0x5a, 0x8e),
            pill_desc_fg: Color::Rgb(0x60, 0x60, 0x6a),
            overlay_border: Color::Rgb(0xb8, 0xb8, 0xb0),
        }
    }

    /// Deep-sky-blue dialog look, for the nostalgic.
    pub fn sky() -> Self {
        Theme {
            background: Color::Rgb(0x00, 0xbf, 0xff),
            surface_bg: Color::Rgb(0x00, 0xa8, 0xe8),
            text_primary: Color::Rgb(0x00, 0x1a, 0x2e),
            text_secondary: Color::Rgb(0x0a, 0x3a, 0x55),
            alert_fg: Color::Rgb(0x8b, 0x00, 0x00),
            header_accent_fg: Color::Rgb(0xff, 0xff, 0xff),
            header_accent_bg: Color::Rgb(0x00, 0x5a, 0x8e),
            gauge_filled: Color::Rgb(0x00, 0x5a, 0x8e),
            gauge_unfilled: Color::Rgb(0x7f, 0xdb, 0xff),
            statusbar_bg: Color::Rgb(0x00, 0xa8, 0xe8),
            pill_key_fg: Color::Rgb(0xff, 0xff, 0xff),
            pill_key_bg: Color::Rgb(0x00, 0x5a, 0x8e),
            pill_desc_fg: Color::Rgb(0x0a, 0x3a, 0x55),
            overlay_border: Color::Rgb(0x00, 0x5a, 0x8e),
        }
    }

    pub fn mono() -> Self {
        Theme {
            background: Color::Reset,
            surface_bg: Color::Reset,
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            alert_fg: Color::Reset,
            header_accent_fg: Color::Reset,
            header_accent_bg: Color::Reset,
            gauge_filled: Color::Gray,
            gauge_unfilled: Color::Reset,
            statusbar_bg: Color::Reset,
            pill_key_fg: Color::Reset,
            pill_key_bg: Color::Reset,
            pill_desc_fg: Color::Reset,
            overlay_border: Color::Reset,
        }
    }

    pub fn named(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Theme::light(),
            "sky" => Theme::sky(),
            "mono" | "monochrome" => Theme::mono(),
            _ => Theme::dark(),
        }
    }

    pub fn from_config(colors: &ColorsConfig, support: ColorSupport) -> Self {
        if support == ColorSupport::Mono {
            return Theme::mono();
        }

        let mut theme = Theme::named(&colors.theme);
        if let Some(alert) = parse_hex_color(&colors.alert) {
            theme.alert_fg = alert;
        }
        if let Some(accent) = parse_hex_color(&colors.accent) {
            theme.header_accent_bg = accent;
            theme.pill_key_bg = accent;
            theme.gauge_filled = accent;
        }
        theme
    }
}

pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
