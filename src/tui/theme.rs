// Theme system for the TUI
//
// Runtime-switchable color themes. Each theme defines colors for the
// elements this UI actually draws: tabs, cards, banner, status bar, logs.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Ocean,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Ocean]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Resolve a configured theme name, falling back to Dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "ocean" => ThemeKind::Ocean,
            _ => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Ocean => "Ocean",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Ocean => Theme::ocean(),
        }
    }
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    pub title: Color,
    pub status_bar: Color,

    // Category tabs
    pub tab_active: Color,

    // Gallery cards
    pub card_label: Color,
    pub card_url: Color,
    pub selected_fg: Color,

    // States
    pub accent: Color, // spinner, toast border, highlights
    pub error: Color,
    pub muted: Color, // hints, placeholder text

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            tab_active: Color::Yellow,

            card_label: Color::White,
            card_url: Color::DarkGray,
            selected_fg: Color::Yellow,

            accent: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            tab_active: Color::Blue,

            card_label: Color::Black,
            card_url: Color::Gray,
            selected_fg: Color::Blue,

            accent: Color::Blue,
            error: Color::Red,
            muted: Color::Gray,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Ocean theme (fits the sea category nicely)
    pub fn ocean() -> Self {
        Self {
            bg: Color::Rgb(13, 27, 42),
            fg: Color::Rgb(224, 241, 255),
            border: Color::Rgb(65, 90, 119),
            border_focused: Color::Rgb(100, 223, 223),

            title: Color::Rgb(100, 223, 223),
            status_bar: Color::Rgb(119, 182, 234),

            tab_active: Color::Rgb(255, 214, 112),

            card_label: Color::Rgb(224, 241, 255),
            card_url: Color::Rgb(65, 90, 119),
            selected_fg: Color::Rgb(255, 214, 112),

            accent: Color::Rgb(100, 223, 223),
            error: Color::Rgb(255, 107, 107),
            muted: Color::Rgb(65, 90, 119),

            log_error: Color::Rgb(255, 107, 107),
            log_warn: Color::Rgb(255, 214, 112),
            log_info: Color::Rgb(119, 182, 234),
            log_debug: Color::Rgb(65, 90, 119),
            log_trace: Color::Rgb(65, 90, 119),
        }
    }

    // Helper methods for creating styles

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    pub fn tab_active_style(&self) -> Style {
        Style::default()
            .fg(self.tab_active)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for a log level tag in the help overlay
    pub fn log_level_style(&self, level: crate::logging::LogLevel) -> Style {
        use crate::logging::LogLevel;
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}
