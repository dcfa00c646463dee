//! Per-component style resolution.
//!
//! Every visual component owns a style struct and a [`VariantTable`] with one
//! entry per variant. Resolving is a table lookup, so for a given variant (and
//! local condition such as "this link is active") the result is always the
//! same. Nothing here is cached between frames.
//!
//! Style values are opaque tokens to the rest of the crate; only the egui
//! renderers interpret them.
//!
//! [`VariantTable`]: crate::theme::VariantTable

pub mod about;
pub mod contact;
pub mod header;
pub mod home;
pub mod product_card;
pub mod shell;
pub mod sidebar;

use egui::Color32;

/// A flat surface color or a multi-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color32),
    /// Painted left to right
    Gradient {
        from: Color32,
        via: Option<Color32>,
        to: Color32,
    },
}

impl Fill {
    pub const fn gradient(from: Color32, to: Color32) -> Self {
        Fill::Gradient { from, via: None, to }
    }

    pub const fn gradient3(from: Color32, via: Color32, to: Color32) -> Self {
        Fill::Gradient { from, via: Some(via), to }
    }

    /// Color to use where a single color is required.
    pub fn base_color(&self) -> Color32 {
        match *self {
            Fill::Solid(color) => color,
            Fill::Gradient { from, .. } => from,
        }
    }

    fn is_visible(&self) -> bool {
        match *self {
            Fill::Solid(color) => color.a() > 0,
            Fill::Gradient { from, via, to } => {
                from.a() > 0 || to.a() > 0 || via.is_some_and(|c| c.a() > 0)
            }
        }
    }
}

/// Base typography of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typeface {
    Sans,
    Serif,
    Bold,
}

/// Drop shadow depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Elevation {
    Flat,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color32,
}

impl Border {
    pub const fn new(width: f32, color: Color32) -> Self {
        Self { width, color }
    }
}

/// A clickable surface: resting fill, hover fill and label color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub fill: Fill,
    pub hover_fill: Fill,
    pub text: Color32,
}

impl ButtonStyle {
    /// Fill for the current hover state.
    pub fn fill_for(&self, hovered: bool) -> Fill {
        if hovered {
            self.hover_fill
        } else {
            self.fill
        }
    }
}

/// Container chrome shared by cards and panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub fill: Fill,
    pub border: Border,
    pub radius: u8,
    pub elevation: Elevation,
}

/// A single opaque style decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleToken {
    Color(Color32),
    Fill(Fill),
    Border(Border),
    Radius(u8),
    Elevation(Elevation),
    Typeface(Typeface),
    Spacing(f32),
}

impl StyleToken {
    /// True if the token actually draws something or carries a value.
    ///
    /// Radii and elevations may legitimately be zero/flat.
    pub fn is_defined(&self) -> bool {
        match self {
            StyleToken::Color(color) => color.a() > 0,
            StyleToken::Fill(fill) => fill.is_visible(),
            StyleToken::Border(border) => border.width > 0.0 && border.color.a() > 0,
            StyleToken::Spacing(value) => value.is_finite() && *value >= 0.0,
            StyleToken::Radius(_) | StyleToken::Elevation(_) | StyleToken::Typeface(_) => true,
        }
    }
}

/// A resolved style viewed as a flat slot-name to token mapping.
pub trait StyleBundle {
    fn slots(&self) -> Vec<(&'static str, StyleToken)>;
}

impl<T: StyleBundle + ?Sized> StyleBundle for &T {
    fn slots(&self) -> Vec<(&'static str, StyleToken)> {
        (**self).slots()
    }
}

/// Expands a [`ButtonStyle`] into three named slots.
macro_rules! button_slots {
    ($slots:ident, $button:expr, $fill:literal, $hover:literal, $text:literal) => {
        $slots.push(($fill, $crate::style::StyleToken::Fill($button.fill)));
        $slots.push(($hover, $crate::style::StyleToken::Fill($button.hover_fill)));
        $slots.push(($text, $crate::style::StyleToken::Color($button.text)));
    };
}

/// Expands a [`Surface`] into four named slots.
macro_rules! surface_slots {
    ($slots:ident, $surface:expr, $fill:literal, $border:literal, $radius:literal, $elevation:literal) => {
        $slots.push(($fill, $crate::style::StyleToken::Fill($surface.fill)));
        $slots.push(($border, $crate::style::StyleToken::Border($surface.border)));
        $slots.push(($radius, $crate::style::StyleToken::Radius($surface.radius)));
        $slots.push(($elevation, $crate::style::StyleToken::Elevation($surface.elevation)));
    };
}

pub(crate) use button_slots;
pub(crate) use surface_slots;

#[cfg(test)]
pub(crate) mod testing {
    use super::StyleBundle;
    use crate::theme::Variant;
    use std::collections::HashSet;

    /// Asserts that every variant yields the same, fully defined slot set.
    pub fn assert_complete<B: StyleBundle>(resolve: impl Fn(Variant) -> B) {
        let reference: Vec<&str> = resolve(Variant::default())
            .slots()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert!(!reference.is_empty());

        let unique: HashSet<&str> = reference.iter().copied().collect();
        assert_eq!(unique.len(), reference.len(), "duplicate slot names: {reference:?}");

        for variant in Variant::ALL {
            let slots = resolve(variant).slots();
            let names: Vec<&str> = slots.iter().map(|(name, _)| *name).collect();
            assert_eq!(names, reference, "slot set differs for {variant:?}");
            for (name, token) in slots {
                assert!(token.is_defined(), "{variant:?}: slot '{name}' is empty");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_fill_follows_hover() {
        let button = ButtonStyle {
            fill: Fill::Solid(Color32::RED),
            hover_fill: Fill::Solid(Color32::BLUE),
            text: Color32::WHITE,
        };
        assert_eq!(button.fill_for(false), Fill::Solid(Color32::RED));
        assert_eq!(button.fill_for(true), Fill::Solid(Color32::BLUE));
    }

    #[test]
    fn test_token_definedness() {
        assert!(!StyleToken::Color(Color32::TRANSPARENT).is_defined());
        assert!(StyleToken::Color(Color32::WHITE).is_defined());
        assert!(!StyleToken::Border(Border::new(0.0, Color32::WHITE)).is_defined());
        assert!(StyleToken::Fill(Fill::gradient(Color32::TRANSPARENT, Color32::WHITE)).is_defined());
        assert!(StyleToken::Radius(0).is_defined());
    }

    #[test]
    fn test_gradient_base_color_is_first_stop() {
        let fill = Fill::gradient3(Color32::RED, Color32::GREEN, Color32::BLUE);
        assert_eq!(fill.base_color(), Color32::RED);
    }
}
