//! Page chrome: background and base typography of the whole window.

use egui::Color32;

use super::{Fill, StyleBundle, StyleToken, Typeface};
use crate::theme::{swatch, Variant, VariantTable};

#[derive(Debug, Clone, PartialEq)]
pub struct ShellStyle {
    pub page: Fill,
    pub typeface: Typeface,
    pub text: Color32,
}

static SHELL: VariantTable<ShellStyle> = VariantTable {
    minimalist: ShellStyle {
        page: Fill::Solid(swatch::GRAY_50),
        typeface: Typeface::Sans,
        text: swatch::GRAY_900,
    },
    professional: ShellStyle {
        page: Fill::Solid(swatch::GRAY_900),
        typeface: Typeface::Serif,
        text: swatch::WHITE,
    },
    playful: ShellStyle {
        page: Fill::gradient3(swatch::PURPLE_100, swatch::PINK_50, swatch::BLUE_100),
        typeface: Typeface::Sans,
        text: swatch::PURPLE_800,
    },
};

pub fn resolve(variant: Variant) -> &'static ShellStyle {
    SHELL.get(variant)
}

impl StyleBundle for ShellStyle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        vec![
            ("page background", StyleToken::Fill(self.page)),
            ("typeface", StyleToken::Typeface(self.typeface)),
            ("text", StyleToken::Color(self.text)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::testing::assert_complete;

    #[test]
    fn test_shell_bundle_complete() {
        assert_complete(resolve);
    }

    #[test]
    fn test_professional_is_serif_on_dark() {
        let style = resolve(Variant::Professional);
        assert_eq!(style.typeface, Typeface::Serif);
        assert_eq!(style.page, Fill::Solid(swatch::GRAY_900));
    }
}
