use ratatui::style::Color;

use crate::model::{Status, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    /// Glass fill behind popups
    pub popup_bg: Color,
    /// Bubble tint for waiting tasks
    pub todo_bubble: Color,
    /// Bubble tint for completed tasks
    pub done_bubble: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            blue: Color::Rgb(0x44, 0x88, 0xFF),
            popup_bg: Color::Rgb(0x1A, 0x10, 0x2E),
            todo_bubble: Color::Rgb(0x60, 0xA5, 0xFA),
            done_bubble: Color::Rgb(0x34, 0xD3, 0x99),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        // Apply color overrides from [ui.colors]
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("event=config_value_ignored key=ui.colors.{key} value={value}");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "blue" => theme.blue = color,
                "popup_bg" => theme.popup_bg = color,
                "todo_bubble" => theme.todo_bubble = color,
                "done_bubble" => theme.done_bubble = color,
                _ => {}
            }
        }

        theme
    }

    /// Bubble tint for a status
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Todo => self.todo_bubble,
            Status::Done => self.done_bubble,
        }
    }
}
