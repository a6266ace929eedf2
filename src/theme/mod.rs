//! Palette, settings and key bindings.
//!
//! Public re-exports keep the `crate::theme::*` API flat.

use ratatui::style::Color;

/// Settings value parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings file loading.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, resolve_settings_path};
pub use settings::{SETTINGS_SKELETON, load_settings, parse_settings};
pub use types::{KeyChord, KeyMap, Settings, Theme};

/// Return the application's palette (Catppuccin Mocha tones).
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: Color::Rgb(0x1e, 0x1e, 0x2e),
        mantle: Color::Rgb(0x18, 0x18, 0x25),
        crust: Color::Rgb(0x11, 0x11, 0x1b),
        surface2: Color::Rgb(0x58, 0x5b, 0x70),
        overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
        overlay2: Color::Rgb(0x93, 0x99, 0xb2),
        text: Color::Rgb(0xcd, 0xd6, 0xf4),
        subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
        sapphire: Color::Rgb(0x74, 0xc7, 0xec),
        mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
        pink: Color::Rgb(0xf5, 0xc2, 0xe7),
        green: Color::Rgb(0xa6, 0xe3, 0xa1),
        yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
        lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
    }
}
