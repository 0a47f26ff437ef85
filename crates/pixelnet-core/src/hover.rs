use crate::constants::{HOVER_CLASS, HOVER_CLASS_SELECTOR, HOVER_EMPHASIS_SELECTOR};
use crate::palette::ColorMode;

/// What pointer-enter does to an element; pointer-leave undoes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEffect {
    /// Add/remove a CSS class.
    Class(&'static str),
    /// Set inline transform and text-shadow.
    Emphasis,
}

/// Selector groups and the effect each one gets.
pub const HOVER_GROUPS: [(&str, HoverEffect); 2] = [
    (HOVER_CLASS_SELECTOR, HoverEffect::Class(HOVER_CLASS)),
    (HOVER_EMPHASIS_SELECTOR, HoverEffect::Emphasis),
];

/// Inline `(transform, text-shadow)` for an emphasized element.
#[inline]
pub fn emphasis_style(hovered: bool, mode: ColorMode) -> (&'static str, &'static str) {
    match (hovered, mode) {
        (true, ColorMode::Dark) => ("scale(1.03)", "0 0 8px var(--accent-color-dark)"),
        (true, ColorMode::Light) => ("scale(1.03)", "none"),
        (false, _) => ("scale(1)", "none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_mode_has_no_glow() {
        assert_eq!(emphasis_style(true, ColorMode::Light).1, "none");
        assert_ne!(emphasis_style(true, ColorMode::Dark).1, "none");
    }

    #[test]
    fn leave_resets_regardless_of_mode() {
        assert_eq!(
            emphasis_style(false, ColorMode::Dark),
            emphasis_style(false, ColorMode::Light)
        );
    }
}
