//! About page styling.

use egui::Color32;

use super::{button_slots, surface_slots, Border, ButtonStyle, Elevation, Fill, StyleBundle, StyleToken, Surface};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, PartialEq)]
pub struct AboutStyle {
    pub title: Color32,
    pub text: Color32,
    pub card: Surface,
    pub accent: Color32,
    pub badge_fill: Color32,
    pub badge_icon: Color32,
    pub mission_button: ButtonStyle,
}

static ABOUT: VariantTable<AboutStyle> = VariantTable {
    minimalist: AboutStyle {
        title: swatch::GRAY_900,
        text: swatch::GRAY_600,
        card: Surface {
            fill: Fill::Solid(swatch::WHITE),
            border: Border::new(1.0, swatch::GRAY_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        accent: swatch::BLUE_600,
        badge_fill: swatch::BLUE_100,
        badge_icon: swatch::BLUE_600,
        mission_button: ButtonStyle {
            fill: Fill::Solid(swatch::BLUE_600),
            hover_fill: Fill::Solid(swatch::BLUE_700),
            text: swatch::WHITE,
        },
    },
    professional: AboutStyle {
        title: swatch::WHITE,
        text: swatch::GRAY_300,
        card: Surface {
            fill: Fill::Solid(swatch::GRAY_800),
            border: Border::new(1.0, swatch::GRAY_700),
            radius: 16,
            elevation: Elevation::Medium,
        },
        accent: swatch::AMBER_400,
        badge_fill: swatch::AMBER_100,
        badge_icon: swatch::AMBER_600,
        mission_button: ButtonStyle {
            fill: Fill::Solid(swatch::AMBER_600),
            hover_fill: Fill::Solid(swatch::AMBER_700),
            text: swatch::WHITE,
        },
    },
    playful: AboutStyle {
        title: swatch::PURPLE_800,
        text: swatch::GRAY_600,
        card: Surface {
            fill: Fill::Solid(swatch::WHITE_80),
            border: Border::new(2.0, swatch::PURPLE_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        accent: swatch::PINK_600,
        badge_fill: swatch::PURPLE_100,
        badge_icon: swatch::PURPLE_600,
        mission_button: ButtonStyle {
            fill: Fill::gradient(swatch::PURPLE_500, swatch::PINK_500),
            hover_fill: Fill::gradient(swatch::PURPLE_600, swatch::PINK_600),
            text: swatch::WHITE,
        },
    },
};

pub fn resolve(variant: Variant) -> &'static AboutStyle {
    ABOUT.get(variant)
}

impl StyleBundle for AboutStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        let mut slots = vec![
            ("title color", StyleToken::Color(self.title)),
            ("text color", StyleToken::Color(self.text)),
        ];
        surface_slots!(slots, self.card, "card fill", "card border", "card radius", "card shadow");
        slots.extend([
            ("accent", StyleToken::Color(self.accent)),
            ("badge fill", StyleToken::Color(self.badge_fill)),
            ("badge icon", StyleToken::Color(self.badge_icon)),
        ]);
        button_slots!(slots, self.mission_button, "mission button", "mission button hover", "mission button text");
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::testing::assert_complete;

    #[test]
    fn test_about_bundle_complete() {
        assert_complete(resolve);
    }
}
