//! Colour schemes for the widget.
//!
//! Cards never hold colours directly, only a [`Tone`]. The active
//! [`Theme`] turns a tone into a terminal style at draw time, so switching
//! theme never touches card state.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Visual category of a pill or badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Warning => "warning",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,
    pub positive: (Color, Color),
    pub warning: (Color, Color),
    pub negative: (Color, Color),
    pub neutral: (Color, Color),
    pub card_border: Color,
    pub focus: Color,
    pub muted: Color,
    pub close: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            name: ThemeName::Dark,
            positive: (Color::Black, Color::LightGreen),
            warning: (Color::Black, Color::LightYellow),
            negative: (Color::Black, Color::LightRed),
            neutral: (Color::Black, Color::Gray),
            card_border: Color::DarkGray,
            focus: Color::Cyan,
            muted: Color::Gray,
            close: Color::LightRed,
        }
    }

    pub fn light() -> Self {
        Theme {
            name: ThemeName::Light,
            positive: (Color::White, Color::Green),
            warning: (Color::Black, Color::Yellow),
            negative: (Color::White, Color::Red),
            neutral: (Color::Black, Color::Gray),
            card_border: Color::Gray,
            focus: Color::Blue,
            muted: Color::DarkGray,
            close: Color::Red,
        }
    }

    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    pub fn tone(&self, tone: Tone) -> Style {
        let (fg, bg) = match tone {
            Tone::Positive => self.positive,
            Tone::Warning => self.warning,
            Tone::Negative => self.negative,
            Tone::Neutral => self.neutral,
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.card_border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
