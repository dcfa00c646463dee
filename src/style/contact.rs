//! Contact page styling, including form inputs.

use egui::Color32;

use super::{button_slots, surface_slots, Border, ButtonStyle, Elevation, Fill, StyleBundle, StyleToken, Surface};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputStyle {
    pub fill: Color32,
    pub border: Color32,
    pub focus_border: Color32,
    pub text: Color32,
}

impl InputStyle {
    pub fn border_for(&self, focused: bool) -> Color32 {
        if focused {
            self.focus_border
        } else {
            self.border
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactStyle {
    pub title: Color32,
    pub text: Color32,
    pub card: Surface,
    pub input: InputStyle,
    pub button: ButtonStyle,
    pub accent: Color32,
    pub error: Color32,
}

static CONTACT: VariantTable<ContactStyle> = VariantTable {
    minimalist: ContactStyle {
        title: swatch::GRAY_900,
        text: swatch::GRAY_600,
        card: Surface {
            fill: Fill::Solid(swatch::WHITE),
            border: Border::new(1.0, swatch::GRAY_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        input: InputStyle {
            fill: swatch::WHITE,
            border: swatch::GRAY_300,
            focus_border: swatch::BLUE_500,
            text: swatch::GRAY_900,
        },
        button: ButtonStyle {
            fill: Fill::Solid(swatch::BLUE_600),
            hover_fill: Fill::Solid(swatch::BLUE_700),
            text: swatch::WHITE,
        },
        accent: swatch::BLUE_600,
        error: swatch::RED_600,
    },
    professional: ContactStyle {
        title: swatch::WHITE,
        text: swatch::GRAY_300,
        card: Surface {
            fill: Fill::Solid(swatch::GRAY_800),
            border: Border::new(1.0, swatch::GRAY_700),
            radius: 16,
            elevation: Elevation::Medium,
        },
        input: InputStyle {
            fill: swatch::GRAY_700,
            border: swatch::GRAY_600,
            focus_border: swatch::AMBER_500,
            text: swatch::WHITE,
        },
        button: ButtonStyle {
            fill: Fill::Solid(swatch::AMBER_600),
            hover_fill: Fill::Solid(swatch::AMBER_700),
            text: swatch::WHITE,
        },
        accent: swatch::AMBER_400,
        error: swatch::RED_600,
    },
    playful: ContactStyle {
        title: swatch::PURPLE_800,
        text: swatch::GRAY_600,
        card: Surface {
            fill: Fill::Solid(swatch::WHITE_80),
            border: Border::new(2.0, swatch::PURPLE_200),
            radius: 16,
            elevation: Elevation::Medium,
        },
        input: InputStyle {
            fill: swatch::WHITE,
            border: swatch::PURPLE_300,
            focus_border: swatch::PINK_500,
            text: swatch::GRAY_900,
        },
        button: ButtonStyle {
            fill: Fill::gradient(swatch::PURPLE_500, swatch::PINK_500),
            hover_fill: Fill::gradient(swatch::PURPLE_600, swatch::PINK_600),
            text: swatch::WHITE,
        },
        accent: swatch::PINK_600,
        error: swatch::RED_600,
    },
};

pub fn resolve(variant: Variant) -> &'static ContactStyle {
    CONTACT.get(variant)
}

impl StyleBundle for ContactStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        let mut slots = vec![
            ("title color", StyleToken::Color(self.title)),
            ("text color", StyleToken::Color(self.text)),
        ];
        surface_slots!(slots, self.card, "card fill", "card border", "card radius", "card shadow");
        slots.extend([
            ("input fill", StyleToken::Color(self.input.fill)),
            ("input border", StyleToken::Color(self.input.border)),
            ("input focus border", StyleToken::Color(self.input.focus_border)),
            ("input text", StyleToken::Color(self.input.text)),
        ]);
        button_slots!(slots, self.button, "submit button", "submit button hover", "submit button text");
        slots.push(("accent", StyleToken::Color(self.accent)));
        slots.push(("error", StyleToken::Color(self.error)));
        slots
    }
}
