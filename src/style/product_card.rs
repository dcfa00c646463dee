//! Product card styling.

use egui::Color32;

use super::{button_slots, surface_slots, Border, ButtonStyle, Elevation, Fill, StyleBundle, StyleToken, Surface};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub card: Surface,
    pub hover_elevation: Elevation,
    /// Upward shift in points while hovered
    pub hover_lift: f32,
    pub title: Color32,
    pub description: Color32,
    pub price: Color32,
    pub button: ButtonStyle,
    pub star_filled: Color32,
    pub star_empty: Color32,
}

impl CardStyle {
    pub fn elevation(&self, hovered: bool) -> Elevation {
        if hovered {
            self.hover_elevation
        } else {
            self.card.elevation
        }
    }

    pub fn lift(&self, hovered: bool) -> f32 {
        if hovered {
            self.hover_lift
        } else {
            0.0
        }
    }

    pub fn star(&self, filled: bool) -> Color32 {
        if filled {
            self.star_filled
        } else {
            self.star_empty
        }
    }
}

static CARD: VariantTable<CardStyle> = VariantTable {
    minimalist: CardStyle {
        card: Surface {
            fill: Fill::Solid(swatch::WHITE),
            border: Border::new(1.0, swatch::GRAY_200),
            radius: 8,
            elevation: Elevation::Low,
        },
        hover_elevation: Elevation::Medium,
        hover_lift: 0.0,
        title: swatch::GRAY_900,
        description: swatch::GRAY_600,
        price: swatch::BLUE_600,
        button: ButtonStyle {
            fill: Fill::Solid(swatch::BLUE_600),
            hover_fill: Fill::Solid(swatch::BLUE_700),
            text: swatch::WHITE,
        },
        star_filled: swatch::YELLOW_400,
        star_empty: swatch::GRAY_300,
    },
    professional: CardStyle {
        card: Surface {
            fill: Fill::Solid(swatch::GRAY_800),
            border: Border::new(1.0, swatch::GRAY_700),
            radius: 8,
            elevation: Elevation::Medium,
        },
        hover_elevation: Elevation::High,
        hover_lift: 0.0,
        title: swatch::WHITE,
        description: swatch::GRAY_300,
        price: swatch::AMBER_400,
        button: ButtonStyle {
            fill: Fill::Solid(swatch::AMBER_600),
            hover_fill: Fill::Solid(swatch::AMBER_700),
            text: swatch::WHITE,
        },
        star_filled: swatch::YELLOW_400,
        star_empty: swatch::GRAY_300,
    },
    playful: CardStyle {
        card: Surface {
            fill: Fill::Solid(swatch::WHITE_90),
            border: Border::new(2.0, swatch::PURPLE_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        hover_elevation: Elevation::High,
        hover_lift: 4.0,
        title: swatch::PURPLE_800,
        description: swatch::GRAY_600,
        price: swatch::PINK_600,
        button: ButtonStyle {
            fill: Fill::gradient(swatch::PURPLE_500, swatch::PINK_500),
            hover_fill: Fill::gradient(swatch::PURPLE_600, swatch::PINK_600),
            text: swatch::WHITE,
        },
        star_filled: swatch::YELLOW_400,
        star_empty: swatch::GRAY_300,
    },
};

pub fn resolve(variant: Variant) -> &'static CardStyle {
    CARD.get(variant)
}

impl StyleBundle for CardStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        let mut slots = Vec::with_capacity(16);
        surface_slots!(slots, self.card, "card fill", "card border", "card radius", "card shadow");
        slots.extend([
            ("card hover shadow", StyleToken::Elevation(self.hover_elevation)),
            ("card hover lift", StyleToken::Spacing(self.hover_lift)),
            ("title color", StyleToken::Color(self.title)),
            ("description color", StyleToken::Color(self.description)),
            ("price color", StyleToken::Color(self.price)),
        ]);
        button_slots!(slots, self.button, "primary action background", "primary action hover", "primary action text");
        slots.push(("star filled", StyleToken::Color(self.star_filled)));
        slots.push(("star empty", StyleToken::Color(self.star_empty)));
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::testing::assert_complete;

    #[test]
    fn test_card_bundle_complete() {
        assert_complete(resolve);
    }

    #[test]
    fn test_hover_raises_card() {
        for variant in Variant::ALL {
            let style = resolve(variant);
            assert!(style.elevation(true) > style.elevation(false), "{variant:?}");
            assert_eq!(style.lift(false), 0.0);
        }
        assert_eq!(resolve(Variant::Playful).lift(true), 4.0);
        assert_eq!(resolve(Variant::Minimalist).lift(true), 0.0);
    }

    #[test]
    fn test_star_colors() {
        let style = resolve(Variant::Minimalist);
        assert_eq!(style.star(true), swatch::YELLOW_400);
        assert_eq!(style.star(false), swatch::GRAY_300);
    }
}
