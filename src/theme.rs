//! Presentation variants for the ThemeApp storefront.
//!
//! The storefront ships exactly three looks: Minimalist, Professional and
//! Playful. This module defines the closed [`Variant`] enumeration, the
//! [`VariantTable`] every style resolver is keyed by, the shared color
//! swatches and each variant's base palette for egui visuals.
//!
//! # Examples
//!
//! ```
//! use themeapp::theme::Variant;
//!
//! assert_eq!(Variant::from_id("theme2"), Some(Variant::Professional));
//! assert_eq!(Variant::from_id_or_default("bogus"), Variant::Minimalist);
//! ```

use egui::Color32;
use std::fmt;
use std::str::FromStr;

use crate::error::ThemeError;

/// One of the three named visual identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Light, clean, sans-serif (`theme1`)
    #[default]
    Minimalist,
    /// Dark, serif, with a quick-links sidebar (`theme2`)
    Professional,
    /// Gradients, rounded cards, bold type (`theme3`)
    Playful,
}

impl Variant {
    /// All variants in enumeration order.
    pub const ALL: [Variant; 3] = [Variant::Minimalist, Variant::Professional, Variant::Playful];

    /// Stable identifier used for persistence.
    pub fn id(self) -> &'static str {
        match self {
            Variant::Minimalist => "theme1",
            Variant::Professional => "theme2",
            Variant::Playful => "theme3",
        }
    }

    /// Human readable label shown in the picker.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Minimalist => "Minimalist",
            Variant::Professional => "Professional",
            Variant::Playful => "Playful",
        }
    }

    /// Glyph shown next to the label in the picker.
    pub fn glyph(self) -> &'static str {
        match self {
            Variant::Minimalist => "◯",
            Variant::Professional => "◼",
            Variant::Playful => "◈",
        }
    }

    /// Parses a persisted identifier. Matching is exact.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Parses a stored identifier, collapsing anything unrecognized to the default.
    ///
    /// Used when restoring the preference at startup. Interactive input goes
    /// through [`FromStr`] instead, which rejects unknown ids.
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    /// Whether egui should start from its dark visuals.
    pub fn is_dark(self) -> bool {
        matches!(self, Variant::Professional)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ThemeError::UnknownVariant(s.to_string()))
    }
}

/// A value per variant.
///
/// Every field is mandatory, so a table that compiles is exhaustive over
/// [`Variant`]; lookups match on the enum without a fallback arm.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantTable<T> {
    pub minimalist: T,
    pub professional: T,
    pub playful: T,
}

impl<T> VariantTable<T> {
    /// Returns the entry for `variant`.
    pub fn get(&self, variant: Variant) -> &T {
        match variant {
            Variant::Minimalist => &self.minimalist,
            Variant::Professional => &self.professional,
            Variant::Playful => &self.playful,
        }
    }

    /// Iterates `(variant, entry)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &T)> {
        Variant::ALL.into_iter().map(move |v| (v, self.get(v)))
    }
}

/// Named color swatches shared by the style tables.
///
/// Translucent swatches are premultiplied.
pub mod swatch {
    use egui::Color32;

    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const WHITE_95: Color32 = Color32::from_rgba_premultiplied(242, 242, 242, 242);
    pub const WHITE_90: Color32 = Color32::from_rgba_premultiplied(230, 230, 230, 230);
    pub const WHITE_80: Color32 = Color32::from_rgba_premultiplied(204, 204, 204, 204);
    pub const WHITE_20: Color32 = Color32::from_rgba_premultiplied(51, 51, 51, 51);
    pub const WHITE_10: Color32 = Color32::from_rgba_premultiplied(26, 26, 26, 26);

    pub const GRAY_50: Color32 = Color32::from_rgb(249, 250, 251);
    pub const GRAY_100: Color32 = Color32::from_rgb(243, 244, 246);
    pub const GRAY_200: Color32 = Color32::from_rgb(229, 231, 235);
    pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
    pub const GRAY_600: Color32 = Color32::from_rgb(75, 85, 99);
    pub const GRAY_700: Color32 = Color32::from_rgb(55, 65, 81);
    pub const GRAY_800: Color32 = Color32::from_rgb(31, 41, 55);
    pub const GRAY_900: Color32 = Color32::from_rgb(17, 24, 39);
    pub const GRAY_900_95: Color32 = Color32::from_rgba_premultiplied(16, 23, 37, 242);

    pub const BLUE_50: Color32 = Color32::from_rgb(239, 246, 255);
    pub const BLUE_100: Color32 = Color32::from_rgb(219, 234, 254);
    pub const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
    pub const BLUE_500: Color32 = Color32::from_rgb(59, 130, 246);
    pub const BLUE_600: Color32 = Color32::from_rgb(37, 99, 235);
    pub const BLUE_700: Color32 = Color32::from_rgb(29, 78, 216);
    pub const INDIGO_100: Color32 = Color32::from_rgb(224, 231, 255);

    pub const AMBER_100: Color32 = Color32::from_rgb(254, 243, 199);
    pub const AMBER_400: Color32 = Color32::from_rgb(251, 191, 36);
    pub const AMBER_500: Color32 = Color32::from_rgb(245, 158, 11);
    pub const AMBER_600: Color32 = Color32::from_rgb(217, 119, 6);
    pub const AMBER_700: Color32 = Color32::from_rgb(180, 83, 9);
    pub const AMBER_900_30: Color32 = Color32::from_rgba_premultiplied(36, 16, 4, 77);

    pub const PURPLE_50: Color32 = Color32::from_rgb(250, 245, 255);
    pub const PURPLE_100: Color32 = Color32::from_rgb(243, 232, 255);
    pub const PURPLE_200: Color32 = Color32::from_rgb(233, 213, 255);
    pub const PURPLE_300: Color32 = Color32::from_rgb(216, 180, 254);
    pub const PURPLE_400: Color32 = Color32::from_rgb(192, 132, 252);
    pub const PURPLE_500: Color32 = Color32::from_rgb(168, 85, 247);
    pub const PURPLE_500_95: Color32 = Color32::from_rgba_premultiplied(160, 81, 235, 242);
    pub const PURPLE_600: Color32 = Color32::from_rgb(147, 51, 234);
    pub const PURPLE_700: Color32 = Color32::from_rgb(126, 34, 206);
    pub const PURPLE_800: Color32 = Color32::from_rgb(107, 33, 168);

    pub const PINK_50: Color32 = Color32::from_rgb(253, 242, 248);
    pub const PINK_400: Color32 = Color32::from_rgb(244, 114, 182);
    pub const PINK_500: Color32 = Color32::from_rgb(236, 72, 153);
    pub const PINK_500_95: Color32 = Color32::from_rgba_premultiplied(224, 68, 145, 242);
    pub const PINK_600: Color32 = Color32::from_rgb(219, 39, 119);

    pub const YELLOW_400: Color32 = Color32::from_rgb(250, 204, 21);
    pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
}

/// Base palette applied to egui's own widgets for a variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub hover: Color32,
    pub selection: Color32,
    pub accent: Color32,
    pub error: Color32,
}

static PALETTES: VariantTable<Palette> = VariantTable {
    minimalist: Palette {
        panel_background: swatch::GRAY_50,
        extreme_background: swatch::WHITE,
        text: swatch::GRAY_900,
        hover: swatch::GRAY_100,
        selection: swatch::BLUE_100,
        accent: swatch::BLUE_600,
        error: swatch::RED_600,
    },
    professional: Palette {
        panel_background: swatch::GRAY_900,
        extreme_background: swatch::GRAY_800,
        text: swatch::WHITE,
        hover: swatch::GRAY_800,
        selection: swatch::AMBER_900_30,
        accent: swatch::AMBER_400,
        error: swatch::RED_600,
    },
    playful: Palette {
        panel_background: swatch::PURPLE_50,
        extreme_background: swatch::WHITE,
        text: swatch::PURPLE_800,
        hover: swatch::PURPLE_100,
        selection: swatch::PURPLE_200,
        accent: swatch::PINK_600,
        error: swatch::RED_600,
    },
};

/// Returns the base palette for `variant`.
pub fn palette(variant: Variant) -> &'static Palette {
    PALETTES.get(variant)
}

/// Builds egui visuals for a variant.
pub fn visuals_for(variant: Variant) -> egui::Visuals {
    let mut visuals = if variant.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    let colors = palette(variant);

    visuals.panel_fill = colors.panel_background;
    visuals.window_fill = colors.extreme_background;
    visuals.extreme_bg_color = colors.extreme_background;
    visuals.faint_bg_color = colors.hover;
    visuals.override_text_color = Some(colors.text);

    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke.color = colors.accent;

    visuals.widgets.inactive.bg_fill = colors.hover;
    visuals.widgets.hovered.bg_fill = colors.hover;
    visuals.widgets.active.bg_fill = colors.selection;

    visuals.hyperlink_color = colors.accent;
    visuals.error_fg_color = colors.error;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_id(variant.id()), Some(variant));
            assert_eq!(variant.id().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_unknown_id_collapses_to_default() {
        assert_eq!(Variant::from_id("bogus"), None);
        assert_eq!(Variant::from_id(""), None);
        assert_eq!(Variant::from_id("THEME2"), None);
        assert_eq!(Variant::from_id_or_default("bogus"), Variant::Minimalist);
        assert_eq!(
            "theme4".parse::<Variant>(),
            Err(ThemeError::UnknownVariant("theme4".to_string()))
        );
    }

    #[test]
    fn test_picker_metadata() {
        let labels: Vec<_> = Variant::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, ["Minimalist", "Professional", "Playful"]);
        let glyphs: Vec<_> = Variant::ALL.iter().map(|v| v.glyph()).collect();
        assert_eq!(glyphs, ["◯", "◼", "◈"]);
        assert_eq!(Variant::Playful.to_string(), "Playful");
    }

    #[test]
    fn test_variant_table_lookup_is_per_variant() {
        let table = VariantTable { minimalist: 1, professional: 2, playful: 3 };
        assert_eq!(*table.get(Variant::Minimalist), 1);
        assert_eq!(*table.get(Variant::Professional), 2);
        assert_eq!(*table.get(Variant::Playful), 3);
        let order: Vec<_> = table.iter().map(|(v, _)| v).collect();
        assert_eq!(order, Variant::ALL);
    }

    #[test]
    fn test_visuals_follow_variant_darkness() {
        assert!(!visuals_for(Variant::Minimalist).dark_mode);
        assert!(visuals_for(Variant::Professional).dark_mode);
        assert!(!visuals_for(Variant::Playful).dark_mode);
        assert_eq!(
            visuals_for(Variant::Professional).panel_fill,
            palette(Variant::Professional).panel_background
        );
    }
}
