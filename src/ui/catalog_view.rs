//! Featured products section.
//!
//! Draws exactly what [`CatalogViewPlan`] says: a spinner while loading, the
//! error message on failure, otherwise one card per product in the variant's
//! grid or stack arrangement.

use eframe::egui;
use egui::{RichText, Ui};
use crate::app::AppState;
use crate::ui::product_card::render_product_card;
use themeapp::catalog_view::entrance_progress;
use themeapp::style::product_card;
use themeapp::{palette, CardPlan, CatalogLayout, CatalogViewPlan};

/// Renders the listing. Returns the product whose "Add to Cart" was clicked.
pub fn render_catalog(ui: &mut Ui, state: &AppState, now: f64) -> Option<u64> {
    let variant = state.theme.get();

    match CatalogViewPlan::build(state.catalog.status(), variant) {
        CatalogViewPlan::Progress => {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(48.0);
            });
            None
        }
        CatalogViewPlan::Error { message } => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new(message).size(16.0).color(palette(variant).error));
                ui.add_space(24.0);
            });
            None
        }
        CatalogViewPlan::Cards { layout, cards } => {
            let elapsed = state.catalog.elapsed_since_ready(now).unwrap_or(f32::MAX);
            if cards.last().is_some_and(|last| entrance_progress(elapsed, last.index) < 1.0) {
                ui.ctx().request_repaint();
            }
            render_cards(ui, layout, &cards, product_card::resolve(variant), elapsed)
        }
    }
}

fn render_cards(
    ui: &mut Ui,
    layout: CatalogLayout,
    cards: &[CardPlan],
    style: &product_card::CardStyle,
    elapsed: f32,
) -> Option<u64> {
    let mut clicked = None;
    let columns = layout.columns(ui.available_width()).max(1);

    ui.scope(|ui| {
        ui.spacing_mut().item_spacing.x = layout.gap();

        for row in cards.chunks(columns) {
            ui.columns(columns, |cells| {
                for (cell, card) in cells.iter_mut().zip(row) {
                    if render_product_card(cell, card, style, elapsed) {
                        clicked = Some(card.product.id);
                    }
                }
            });
            ui.add_space(layout.gap());
        }
    });

    clicked
}
