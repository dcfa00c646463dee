//! About page: story, values and mission.

use eframe::egui;
use egui::{RichText, Ui};
use super::{card_columns, feature_cards, page_hero, section, section_heading, Feature, PageColors, PageInteraction};
use crate::app::AppState;
use crate::ui::paint::{styled_button, styled_text, surface_frame};
use themeapp::style::about::{self as about_style, AboutStyle};
use themeapp::style::shell as shell_style;
use themeapp::Route;

const STORY: [&str; 3] = [
    "ThemeApp was born from a simple observation: users have different preferences, work in \
     different environments, and have varying accessibility needs. Yet most applications force \
     everyone into a single visual experience.",
    "We set out to change that by creating a platform that adapts to users, not the other way \
     around. Our three distinct themes aren't just different color schemes; they're entirely \
     different ways of experiencing digital content.",
    "From the clean minimalism of Theme 1 to the professional efficiency of Theme 2, and the \
     playful creativity of Theme 3, we believe there's a perfect experience for every user and \
     every moment.",
];

const VALUES: [Feature; 4] = [
    Feature {
        icon: "👥",
        title: "User-Centric",
        description: "Every design decision is made with users in mind",
    },
    Feature {
        icon: "🎯",
        title: "Purpose-Driven",
        description: "We build solutions that solve real problems",
    },
    Feature {
        icon: "🏆",
        title: "Excellence",
        description: "We strive for the highest quality in everything we do",
    },
    Feature {
        icon: "🌍",
        title: "Accessibility",
        description: "Making great design available to everyone",
    },
];

pub fn render(ui: &mut Ui, state: &AppState) -> Option<PageInteraction> {
    let variant = state.theme.get();
    let style = about_style::resolve(variant);
    let colors = PageColors {
        title: style.title,
        text: style.text,
        accent: style.accent,
        typeface: shell_style::resolve(variant).typeface,
    };

    page_hero(
        ui,
        "About ThemeApp",
        "We're passionate about creating beautiful, functional, and accessible user experiences \
         through the power of dynamic theming.",
        colors,
    );

    section(ui, |ui| {
        let columns = card_columns(ui, 2);
        ui.columns(columns, |cells| {
            story(&mut cells[0], colors);
            let impact_cell = if columns > 1 { &mut cells[1] } else { &mut cells[0] };
            impact_card(impact_cell, style, colors);
        });
    });

    section(ui, |ui| {
        section_heading(ui, "Our Values", colors);
        feature_cards(ui, &VALUES, &style.card, colors);
    });

    section(ui, |ui| mission_card(ui, style, colors))
}

fn story(ui: &mut Ui, colors: PageColors) {
    ui.label(styled_text("Our Story", colors.typeface, 30.0, colors.title).strong());
    ui.add_space(16.0);
    for paragraph in STORY {
        ui.label(RichText::new(paragraph).size(16.0).color(colors.text));
        ui.add_space(12.0);
    }
}

fn impact_card(ui: &mut Ui, style: &AboutStyle, colors: PageColors) {
    ui.add_space(12.0);
    surface_frame(&style.card, style.card.elevation).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 80.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 40.0, style.badge_fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "🌐",
                egui::FontId::proportional(36.0),
                style.badge_icon,
            );
            ui.add_space(16.0);
            ui.label(RichText::new("Global Impact").size(22.0).strong().color(colors.title));
            ui.add_space(6.0);
            ui.label(RichText::new("Serving users worldwide with adaptive experiences").color(colors.text));
        });
    });
}

fn mission_card(ui: &mut Ui, style: &AboutStyle, colors: PageColors) -> Option<PageInteraction> {
    surface_frame(&style.card, style.card.elevation)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(styled_text("Built with Passion", colors.typeface, 30.0, colors.title).strong());
                ui.add_space(16.0);
                ui.label(
                    RichText::new(
                        "Our team of designers, developers, and user experience experts work tirelessly \
                         to create applications that don't just function well; they delight users and \
                         adapt to their unique needs and preferences.",
                    )
                    .size(16.0)
                    .color(colors.text),
                );
                ui.add_space(24.0);
                styled_button(ui, "Join Our Mission", &style.mission_button, 12)
                    .clicked()
                    .then_some(PageInteraction::Navigate(Route::Contact))
            })
            .inner
        })
        .inner
}
