//! Home page styling: hero banner, section titles, feature cards.

use egui::Color32;

use super::{button_slots, surface_slots, Border, ButtonStyle, Elevation, Fill, StyleBundle, StyleToken, Surface, Typeface};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, PartialEq)]
pub struct HomeStyle {
    pub hero: Fill,
    pub hero_title: Color32,
    pub hero_typeface: Typeface,
    pub hero_subtitle: Color32,
    pub hero_button: ButtonStyle,
    pub section_title: Color32,
    pub feature_card: Surface,
    pub feature_text: Color32,
    pub feature_icon: Color32,
}

static HOME: VariantTable<HomeStyle> = VariantTable {
    minimalist: HomeStyle {
        hero: Fill::gradient(swatch::BLUE_50, swatch::INDIGO_100),
        hero_title: swatch::GRAY_900,
        hero_typeface: Typeface::Sans,
        hero_subtitle: swatch::GRAY_600,
        hero_button: ButtonStyle {
            fill: Fill::Solid(swatch::BLUE_600),
            hover_fill: Fill::Solid(swatch::BLUE_700),
            text: swatch::WHITE,
        },
        section_title: swatch::GRAY_900,
        feature_card: Surface {
            fill: Fill::Solid(swatch::WHITE),
            border: Border::new(1.0, swatch::GRAY_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        feature_text: swatch::GRAY_800,
        feature_icon: swatch::PURPLE_600,
    },
    professional: HomeStyle {
        hero: Fill::gradient(swatch::GRAY_800, swatch::GRAY_900),
        hero_title: swatch::WHITE,
        hero_typeface: Typeface::Serif,
        hero_subtitle: swatch::GRAY_300,
        hero_button: ButtonStyle {
            fill: Fill::Solid(swatch::AMBER_600),
            hover_fill: Fill::Solid(swatch::AMBER_700),
            text: swatch::WHITE,
        },
        section_title: swatch::WHITE,
        feature_card: Surface {
            fill: Fill::Solid(swatch::GRAY_800),
            border: Border::new(1.0, swatch::GRAY_700),
            radius: 16,
            elevation: Elevation::Medium,
        },
        feature_text: swatch::WHITE,
        feature_icon: swatch::PURPLE_600,
    },
    playful: HomeStyle {
        hero: Fill::gradient3(swatch::PURPLE_400, swatch::PINK_400, swatch::BLUE_400),
        hero_title: swatch::WHITE,
        hero_typeface: Typeface::Bold,
        hero_subtitle: swatch::WHITE_90,
        hero_button: ButtonStyle {
            fill: Fill::Solid(swatch::WHITE),
            hover_fill: Fill::Solid(swatch::GRAY_100),
            text: swatch::PURPLE_600,
        },
        section_title: swatch::PURPLE_800,
        feature_card: Surface {
            fill: Fill::Solid(swatch::WHITE_80),
            border: Border::new(2.0, swatch::PURPLE_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        feature_text: swatch::PURPLE_800,
        feature_icon: swatch::PURPLE_600,
    },
};

pub fn resolve(variant: Variant) -> &'static HomeStyle {
    HOME.get(variant)
}

impl StyleBundle for HomeStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        let mut slots = vec![
            ("hero background", StyleToken::Fill(self.hero)),
            ("hero title", StyleToken::Color(self.hero_title)),
            ("hero typeface", StyleToken::Typeface(self.hero_typeface)),
            ("hero subtitle", StyleToken::Color(self.hero_subtitle)),
        ];
        button_slots!(slots, self.hero_button, "hero button", "hero button hover", "hero button text");
        slots.push(("section title", StyleToken::Color(self.section_title)));
        surface_slots!(slots, self.feature_card, "feature card", "feature card border", "feature card radius", "feature card shadow");
        slots.push(("feature text", StyleToken::Color(self.feature_text)));
        slots.push(("feature icon", StyleToken::Color(self.feature_icon)));
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::testing::assert_complete;

    #[test]
    fn test_home_bundle_complete() {
        assert_complete(resolve);
    }

    #[test]
    fn test_playful_hero_is_three_stop_gradient() {
        assert!(matches!(
            resolve(Variant::Playful).hero,
            Fill::Gradient { via: Some(_), .. }
        ));
    }
}
