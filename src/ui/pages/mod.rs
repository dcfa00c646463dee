//! Page bodies drawn inside the shell's content area.

pub mod about;
pub mod contact;
pub mod home;

use eframe::egui;
use egui::{Color32, Response, RichText, Ui};
use crate::app::AppState;
use crate::ui::paint::{styled_text, surface_frame};
use crate::ui::NARROW_WIDTH;
use themeapp::{Route, Surface, Typeface};

/// Result of user interaction inside a page
pub enum PageInteraction {
    Navigate(Route),
    AddToCart(u64),
    SubmitContact,
}

/// Horizontal padding of page sections.
const SECTION_MARGIN_X: i8 = 32;
/// Vertical padding of page sections.
const SECTION_MARGIN_Y: i8 = 40;

/// Renders the body of the current route.
pub fn render_page(ui: &mut Ui, state: &mut AppState, now: f64) -> Option<PageInteraction> {
    match state.navigation.route() {
        Route::Home => home::render(ui, state, now),
        Route::About => about::render(ui, state),
        Route::Contact => contact::render(ui, state),
    }
}

/// Icon, title and one line of copy shown on a feature card.
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

/// Colors shared by a page's headings, copy and cards.
#[derive(Clone, Copy)]
struct PageColors {
    title: Color32,
    text: Color32,
    accent: Color32,
    typeface: Typeface,
}

/// Padded page section.
fn section<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::default()
        .inner_margin(egui::Margin::symmetric(SECTION_MARGIN_X, SECTION_MARGIN_Y))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Large centered title with a lead paragraph.
fn page_hero(ui: &mut Ui, title: &str, lead: &str, colors: PageColors) {
    section(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(styled_text(title, colors.typeface, 40.0, colors.title).strong());
            ui.add_space(16.0);
            ui.label(RichText::new(lead).size(20.0).color(colors.text));
        });
    });
}

fn section_heading(ui: &mut Ui, text: &str, colors: PageColors) -> Response {
    let response = ui
        .vertical_centered(|ui| ui.label(styled_text(text, colors.typeface, 30.0, colors.title).strong()))
        .inner;
    ui.add_space(24.0);
    response
}

/// Column count for a row of `wide` cards at the current width.
fn card_columns(ui: &Ui, wide: usize) -> usize {
    if ui.available_width() >= NARROW_WIDTH {
        wide.max(1)
    } else {
        1
    }
}

/// Feature cards in equal columns, one per row on narrow content.
fn feature_cards(ui: &mut Ui, features: &[Feature], surface: &Surface, colors: PageColors) {
    let columns = card_columns(ui, features.len());

    ui.scope(|ui| {
        ui.spacing_mut().item_spacing.x = 24.0;
        for row in features.chunks(columns) {
            ui.columns(columns, |cells| {
                for (cell, feature) in cells.iter_mut().zip(row) {
                    surface_frame(surface, surface.elevation).show(cell, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(feature.icon).size(32.0).color(colors.accent));
                            ui.add_space(12.0);
                            ui.label(RichText::new(feature.title).size(18.0).strong().color(colors.title));
                            ui.add_space(6.0);
                            ui.label(RichText::new(feature.description).color(colors.text));
                        });
                    });
                }
            });
            ui.add_space(24.0);
        }
    });
}
