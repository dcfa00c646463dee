//! Quick-links sidebar styling.
//!
//! Only one variant has a sidebar at all, so the table holds an `Option`:
//! a variant without an entry never gets the panel in its render tree.

use egui::Color32;

use super::{Border, Fill, StyleBundle, StyleToken};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarStyle {
    pub panel: Fill,
    pub border: Border,
    pub text: Color32,
    pub heading: Color32,
    pub link_hover: Color32,
    pub link_active: Color32,
}

static SIDEBAR: VariantTable<Option<SidebarStyle>> = VariantTable {
    minimalist: None,
    professional: Some(SidebarStyle {
        panel: Fill::Solid(swatch::GRAY_800),
        border: Border::new(1.0, swatch::GRAY_700),
        text: swatch::WHITE,
        heading: swatch::AMBER_400,
        link_hover: swatch::GRAY_700,
        link_active: swatch::AMBER_900_30,
    }),
    playful: None,
};

/// Sidebar style for `variant`, or `None` if the variant has no sidebar.
pub fn resolve(variant: Variant) -> Option<&'static SidebarStyle> {
    SIDEBAR.get(variant).as_ref()
}

impl StyleBundle for SidebarStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        vec![
            ("panel", StyleToken::Fill(self.panel)),
            ("border", StyleToken::Border(self.border)),
            ("text", StyleToken::Color(self.text)),
            ("heading", StyleToken::Color(self.heading)),
            ("link hover", StyleToken::Color(self.link_hover)),
            ("link active", StyleToken::Color(self.link_active)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_professional_has_sidebar() {
        assert!(resolve(Variant::Minimalist).is_none());
        assert!(resolve(Variant::Professional).is_some());
        assert!(resolve(Variant::Playful).is_none());
    }

    #[test]
    fn test_sidebar_slots_defined() {
        let style = resolve(Variant::Professional).expect("professional sidebar");
        let slots = style.slots();
        assert_eq!(slots.len(), 6);
        assert!(slots.iter().all(|(_, token)| token.is_defined()));
    }
}
