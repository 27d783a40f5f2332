//! The density ramp: one glyph and one 256-color foreground per contribution
//! level, ordered from no activity to most activity.

use crate::model::Level;
use console::Style;
use once_cell::sync::Lazy;

pub const DENSITY_GLYPHS: [char; Level::COUNT] = ['·', '░', '▒', '▓', '█'];

/// Dark gray for empty days, then four greens of increasing brightness.
pub const DENSITY_COLORS: [u8; Level::COUNT] = [236, 22, 28, 34, 40];

#[derive(Debug, Clone)]
pub struct Shade {
    pub glyph: char,
    pub style: Style,
}

impl Shade {
    /// The glyph, wrapped in its color and a reset when `color` is set.
    pub fn paint(&self, color: bool) -> String {
        if color {
            self.style.apply_to(self.glyph).to_string()
        } else {
            self.glyph.to_string()
        }
    }
}

// Styling is forced here; whether to color at all is decided by the caller.
pub static DENSITY_RAMP: Lazy<[Shade; Level::COUNT]> = Lazy::new(|| {
    std::array::from_fn(|i| Shade {
        glyph: DENSITY_GLYPHS[i],
        style: Style::new().color256(DENSITY_COLORS[i]).force_styling(true),
    })
});

pub fn shade(level: Level) -> &'static Shade {
    &DENSITY_RAMP[level.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_selects_its_own_shade() {
        for level in Level::all() {
            let s = shade(level);
            assert_eq!(s.glyph, DENSITY_GLYPHS[level.index()]);
            let painted = s.paint(true);
            let code = format!("\x1b[38;5;{}m", DENSITY_COLORS[level.index()]);
            assert!(painted.starts_with(&code), "level {level}: {painted:?}");
            for (i, other) in DENSITY_COLORS.iter().enumerate() {
                if i != level.index() {
                    assert!(!painted.contains(&format!("\x1b[38;5;{}m", other)));
                }
            }
        }
    }

    #[test]
    fn test_paint_wraps_glyph_in_color_and_reset() {
        let level = Level::try_from(2).unwrap();
        assert_eq!(shade(level).paint(true), "\x1b[38;5;28m▒\x1b[0m");
    }

    #[test]
    fn test_paint_without_color_is_bare_glyph() {
        let level = Level::try_from(4).unwrap();
        assert_eq!(shade(level).paint(false), "█");
    }
}
