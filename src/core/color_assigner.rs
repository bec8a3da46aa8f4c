use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DisplayCategory;
use crate::render::Color;

pub const CATEGORY_SATURATION_PCT: u8 = 70;
pub const CATEGORY_LIGHTNESS_PCT: u8 = 40;

const HUE_HASH_BASE: u32 = 31;
const HUE_MODULUS: u32 = 360;

/// Fixed saturation/lightness color whose hue is derived from a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventColor {
    pub hue: u16,
    pub saturation_pct: u8,
    pub lightness_pct: u8,
}

impl EventColor {
    #[must_use]
    pub const fn from_hue(hue: u16) -> Self {
        Self {
            hue,
            saturation_pct: CATEGORY_SATURATION_PCT,
            lightness_pct: CATEGORY_LIGHTNESS_PCT,
        }
    }

    /// CSS `hsl()` notation, e.g. `hsl(212,70%,40%)`.
    #[must_use]
    pub fn css(self) -> String {
        format!(
            "hsl({},{}%,{}%)",
            self.hue, self.saturation_pct, self.lightness_pct
        )
    }

    #[must_use]
    pub fn to_rgba(self) -> Color {
        Color::from_hsl(
            f64::from(self.hue),
            f64::from(self.saturation_pct) / 100.0,
            f64::from(self.lightness_pct) / 100.0,
        )
    }
}

/// Rolling hash (base 31, mod 360) over the UTF-16 code units of `category`.
#[must_use]
pub fn category_hue(category: &str) -> u16 {
    let hue = category.encode_utf16().fold(0_u32, |hue, unit| {
        (hue * HUE_HASH_BASE + u32::from(unit)) % HUE_MODULUS
    });
    hue as u16
}

/// Pure color for a category; equal strings always yield equal colors.
#[must_use]
pub fn color_for(category: &str) -> EventColor {
    EventColor::from_hue(category_hue(category))
}

/// Category colors resolved during a single render pass.
///
/// Owned by one layout pass and dropped with it. Iteration follows first
/// appearance, which hosts can use as legend order.
#[derive(Debug, Clone, Default)]
pub struct ColorMemo {
    colors: IndexMap<DisplayCategory, EventColor>,
}

impl ColorMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_for(&mut self, category: &DisplayCategory) -> EventColor {
        if let Some(color) = self.colors.get(category) {
            return *color;
        }
        let color = color_for(category.as_str());
        self.colors.insert(category.clone(), color);
        color
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DisplayCategory, EventColor)> {
        self.colors.iter().map(|(category, color)| (category, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorMemo, category_hue};
    use crate::core::DisplayCategory;

    #[test]
    fn hue_matches_hand_computed_hash() {
        // 'A' = 65; ('A' * 31 + 'B') % 360 = (2015 + 66) % 360 = 281
        assert_eq!(category_hue("A"), 65);
        assert_eq!(category_hue("AB"), 281);
        assert_eq!(category_hue(""), 0);
    }

    #[test]
    fn memo_keeps_first_seen_order() {
        let mut memo = ColorMemo::new();
        let editor = DisplayCategory::from("Editor");
        let shell = DisplayCategory::from("Shell");
        memo.color_for(&shell);
        memo.color_for(&editor);
        memo.color_for(&shell);

        let order: Vec<&str> = memo.iter().map(|(category, _)| category.as_str()).collect();
        assert_eq!(order, vec!["Shell", "Editor"]);
        assert_eq!(memo.len(), 2);
    }
}
