//! Color modes and the two fixed drawing palettes.

use crate::constants::{DARK_MODE_CLASS, DARK_MODE_ICON, LIGHT_MODE_CLASS, LIGHT_MODE_ICON};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Dark,
    Light,
}

impl ColorMode {
    #[inline]
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Dark => ColorMode::Light,
            ColorMode::Light => ColorMode::Dark,
        }
    }

    /// Body class and persisted value for this mode.
    #[inline]
    pub fn as_class(self) -> &'static str {
        match self {
            ColorMode::Dark => DARK_MODE_CLASS,
            ColorMode::Light => LIGHT_MODE_CLASS,
        }
    }

    #[inline]
    pub fn from_class(v: &str) -> Option<Self> {
        match v {
            DARK_MODE_CLASS => Some(ColorMode::Dark),
            LIGHT_MODE_CLASS => Some(ColorMode::Light),
            _ => None,
        }
    }

    /// Icon shown on the toggle control while this mode is active.
    #[inline]
    pub fn icon(self) -> &'static str {
        match self {
            ColorMode::Dark => DARK_MODE_ICON,
            ColorMode::Light => LIGHT_MODE_ICON,
        }
    }

    #[inline]
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorMode::Dark => &DARK_PALETTE,
            ColorMode::Light => &LIGHT_PALETTE,
        }
    }
}

/// CSS color strings handed straight to the Canvas 2D context.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub dot_fill: &'static str,
    pub cable_stroke: &'static str,
    pub pulse_fill: &'static str,
    pub pulse_glow: &'static str,
    pub pointer_stroke: &'static str,
}

pub static DARK_PALETTE: Palette = Palette {
    dot_fill: "rgba(21, 34, 50, 0.5)",
    cable_stroke: "rgba(0, 255, 128, 0.2)",
    pulse_fill: "rgba(0, 255, 128, 1)",
    pulse_glow: "rgb(0, 255, 128)",
    pointer_stroke: "rgba(0, 255, 128, 0.8)",
};

pub static LIGHT_PALETTE: Palette = Palette {
    dot_fill: "rgba(255, 255, 255, 0.5)",
    cable_stroke: "rgba(0, 123, 255, 0.2)",
    pulse_fill: "rgba(0, 123, 255, 1)",
    pulse_glow: "rgb(0, 123, 255)",
    pointer_stroke: "rgba(0, 123, 255, 0.8)",
};
