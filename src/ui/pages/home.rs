//! Home page: hero banner, feature highlights and the featured products.

use eframe::egui;
use egui::{Align, RichText, Ui};
use super::{feature_cards, section, section_heading, Feature, PageColors, PageInteraction};
use crate::app::AppState;
use crate::ui::catalog_view::render_catalog;
use crate::ui::paint::{styled_button, styled_text, with_backdrop};
use themeapp::style::{home as home_style, shell as shell_style};

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "✨",
        title: "Beautiful Themes",
        description: "Three distinct visual experiences",
    },
    Feature {
        icon: "⚡",
        title: "Lightning Fast",
        description: "Smooth transitions and animations",
    },
    Feature {
        icon: "♥",
        title: "User Friendly",
        description: "Intuitive design across all themes",
    },
];

pub fn render(ui: &mut Ui, state: &AppState, now: f64) -> Option<PageInteraction> {
    let variant = state.theme.get();
    let style = home_style::resolve(variant);
    let colors = PageColors {
        title: style.section_title,
        text: style.feature_text,
        accent: style.feature_icon,
        typeface: shell_style::resolve(variant).typeface,
    };
    let mut explore = false;

    with_backdrop(ui, style.hero, 0, 64.0, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(styled_text("Welcome to ThemeApp", style.hero_typeface, 44.0, style.hero_title).strong());
            ui.add_space(16.0);
            ui.label(
                RichText::new("Experience the power of dynamic theming with three completely different visual experiences")
                    .size(20.0)
                    .color(style.hero_subtitle),
            );
            ui.add_space(28.0);
            explore = styled_button(ui, "Explore Products  ➡", &style.hero_button, 12).clicked();
        });
    });

    section(ui, |ui| {
        section_heading(ui, "Why Choose ThemeApp?", colors);
        feature_cards(ui, &FEATURES, &style.feature_card, colors);
    });

    section(ui, |ui| {
        let heading = section_heading(ui, "Featured Products", colors);
        if explore {
            heading.scroll_to_me(Some(Align::TOP));
        }
        render_catalog(ui, state, now).map(PageInteraction::AddToCart)
    })
}
