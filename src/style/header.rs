//! Header bar styling: logo, navigation links, variant picker, mobile menu.

use egui::Color32;

use super::{button_slots, surface_slots, Border, ButtonStyle, Elevation, Fill, StyleBundle, StyleToken, Surface, Typeface};
use crate::theme::{swatch, Variant, VariantTable};

/// Background and label color of a navigation entry or picker option.
///
/// For idle entries the background is only painted while hovered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryStyle {
    pub background: Color32,
    pub text: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyle {
    pub bar: Fill,
    pub bar_border: Border,
    pub text: Color32,
    pub logo_typeface: Typeface,
    pub link_active: EntryStyle,
    pub link_idle: EntryStyle,
    pub picker_trigger: ButtonStyle,
    pub dropdown: Surface,
    pub option_selected: EntryStyle,
    pub option_idle: EntryStyle,
    pub mobile_menu: Fill,
    pub mobile_border: Color32,
}

impl HeaderStyle {
    /// Style of a navigation link; `active` when it matches the current route.
    pub fn nav_link(&self, active: bool) -> &EntryStyle {
        if active {
            &self.link_active
        } else {
            &self.link_idle
        }
    }

    /// Style of a picker option; `selected` when it is the active variant.
    pub fn picker_option(&self, selected: bool) -> &EntryStyle {
        if selected {
            &self.option_selected
        } else {
            &self.option_idle
        }
    }
}

static HEADER: VariantTable<HeaderStyle> = VariantTable {
    minimalist: HeaderStyle {
        bar: Fill::Solid(swatch::WHITE_95),
        bar_border: Border::new(1.0, swatch::GRAY_200),
        text: swatch::GRAY_800,
        logo_typeface: Typeface::Sans,
        link_active: EntryStyle { background: swatch::BLUE_100, text: swatch::BLUE_700 },
        link_idle: EntryStyle { background: swatch::GRAY_100, text: swatch::GRAY_800 },
        picker_trigger: ButtonStyle {
            fill: Fill::Solid(swatch::WHITE_95),
            hover_fill: Fill::Solid(swatch::GRAY_100),
            text: swatch::GRAY_800,
        },
        dropdown: Surface {
            fill: Fill::Solid(swatch::WHITE),
            border: Border::new(1.0, swatch::GRAY_200),
            radius: 8,
            elevation: Elevation::Medium,
        },
        option_selected: EntryStyle { background: swatch::BLUE_50, text: swatch::BLUE_700 },
        option_idle: EntryStyle { background: swatch::GRAY_50, text: swatch::GRAY_700 },
        mobile_menu: Fill::Solid(swatch::WHITE),
        mobile_border: swatch::GRAY_200,
    },
    professional: HeaderStyle {
        bar: Fill::Solid(swatch::GRAY_900_95),
        bar_border: Border::new(1.0, swatch::GRAY_700),
        text: swatch::WHITE,
        logo_typeface: Typeface::Serif,
        link_active: EntryStyle { background: swatch::AMBER_900_30, text: swatch::AMBER_400 },
        link_idle: EntryStyle { background: swatch::GRAY_800, text: swatch::WHITE },
        picker_trigger: ButtonStyle {
            fill: Fill::Solid(swatch::GRAY_900_95),
            hover_fill: Fill::Solid(swatch::GRAY_800),
            text: swatch::WHITE,
        },
        dropdown: Surface {
            fill: Fill::Solid(swatch::GRAY_800),
            border: Border::new(1.0, swatch::GRAY_600),
            radius: 8,
            elevation: Elevation::High,
        },
        option_selected: EntryStyle { background: swatch::AMBER_900_30, text: swatch::AMBER_400 },
        option_idle: EntryStyle { background: swatch::GRAY_700, text: swatch::GRAY_300 },
        mobile_menu: Fill::Solid(swatch::GRAY_900),
        mobile_border: swatch::GRAY_700,
    },
    playful: HeaderStyle {
        bar: Fill::gradient(swatch::PURPLE_500_95, swatch::PINK_500_95),
        bar_border: Border::new(1.0, swatch::WHITE_20),
        text: swatch::WHITE,
        logo_typeface: Typeface::Bold,
        link_active: EntryStyle { background: swatch::WHITE_20, text: swatch::WHITE },
        link_idle: EntryStyle { background: swatch::WHITE_10, text: swatch::WHITE },
        picker_trigger: ButtonStyle {
            fill: Fill::gradient(swatch::PURPLE_500_95, swatch::PINK_500_95),
            hover_fill: Fill::Solid(swatch::WHITE_10),
            text: swatch::WHITE,
        },
        dropdown: Surface {
            fill: Fill::Solid(swatch::WHITE_95),
            border: Border::new(1.0, swatch::PURPLE_200),
            radius: 8,
            elevation: Elevation::High,
        },
        option_selected: EntryStyle { background: swatch::PURPLE_100, text: swatch::PURPLE_700 },
        option_idle: EntryStyle { background: swatch::PURPLE_50, text: swatch::GRAY_700 },
        mobile_menu: Fill::gradient(swatch::PURPLE_500, swatch::PINK_500),
        mobile_border: swatch::WHITE_20,
    },
};

pub fn resolve(variant: Variant) -> &'static HeaderStyle {
    HEADER.get(variant)
}

impl StyleBundle for HeaderStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        let mut slots = vec![
            ("bar", StyleToken::Fill(self.bar)),
            ("bar border", StyleToken::Border(self.bar_border)),
            ("text", StyleToken::Color(self.text)),
            ("logo typeface", StyleToken::Typeface(self.logo_typeface)),
            ("active link background", StyleToken::Color(self.link_active.background)),
            ("active link text", StyleToken::Color(self.link_active.text)),
            ("idle link hover background", StyleToken::Color(self.link_idle.background)),
            ("idle link text", StyleToken::Color(self.link_idle.text)),
        ];
        button_slots!(slots, self.picker_trigger, "picker fill", "picker hover fill", "picker text");
        surface_slots!(slots, self.dropdown, "dropdown fill", "dropdown border", "dropdown radius", "dropdown elevation");
        slots.extend([
            ("selected option background", StyleToken::Color(self.option_selected.background)),
            ("selected option text", StyleToken::Color(self.option_selected.text)),
            ("option hover background", StyleToken::Color(self.option_idle.background)),
            ("option text", StyleToken::Color(self.option_idle.text)),
            ("mobile menu", StyleToken::Fill(self.mobile_menu)),
            ("mobile menu border", StyleToken::Color(self.mobile_border)),
        ]);
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::testing::assert_complete;

    #[test]
    fn test_header_bundle_complete() {
        assert_complete(resolve);
    }

    #[test]
    fn test_active_link_differs_from_idle() {
        for variant in Variant::ALL {
            let style = resolve(variant);
            assert_ne!(style.nav_link(true), style.nav_link(false), "{variant:?}");
            assert_ne!(style.picker_option(true), style.picker_option(false), "{variant:?}");
        }
    }

    #[test]
    fn test_logo_typeface_per_variant() {
        assert_eq!(resolve(Variant::Minimalist).logo_typeface, Typeface::Sans);
        assert_eq!(resolve(Variant::Professional).logo_typeface, Typeface::Serif);
        assert_eq!(resolve(Variant::Playful).logo_typeface, Typeface::Bold);
    }

    #[test]
    fn test_resolution_is_stable() {
        for variant in Variant::ALL {
            assert!(std::ptr::eq(resolve(variant), resolve(variant)));
            assert_eq!(resolve(variant).nav_link(true), resolve(variant).nav_link(true));
        }
    }
}
