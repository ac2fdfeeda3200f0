use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

#[derive(Debug, Clone, Copy)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Success,
  Label,
  Value,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
  Color::Rgb { r, g, b }
}

const fn palette(theme: Theme, role: Role) -> Color {
  match (theme, role) {
    (Theme::Dark, Role::Timestamp | Role::Success) => rgb(118, 166, 166),
    (Theme::Dark, Role::Primary) => rgb(191, 126, 4),
    (Theme::Dark, Role::Accent) => rgb(166, 84, 55),
    (Theme::Dark, Role::Label) => rgb(217, 164, 4),
    (Theme::Dark, Role::Value) => rgb(242, 211, 56),
    (Theme::Light, Role::Timestamp) => rgb(92, 62, 38),
    (Theme::Light, Role::Primary) => rgb(70, 42, 25),
    (Theme::Light, Role::Accent) => rgb(211, 99, 70),
    (Theme::Light, Role::Success) => rgb(34, 142, 90),
    (Theme::Light, Role::Label) => rgb(176, 103, 66),
    (Theme::Light, Role::Value) => rgb(199, 146, 76),
  }
}

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, role: Role) -> Color {
    if self.enabled {
      palette(self.theme, role)
    } else {
      Color::Reset
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(Role::Accent)
  }

  pub const fn success(&self) -> Color {
    self.pick(Role::Success)
  }

  pub const fn label(&self) -> Color {
    self.pick(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.pick(Role::Value)
  }
}

/// Table cells take comfy-table colors; only the variants the palette produces matter.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
