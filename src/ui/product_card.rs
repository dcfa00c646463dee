//! Product card rendering.
//!
//! Cards fade and slide in after the listing becomes ready, staggered by
//! position. Hover raises the shadow (and, for some variants, lifts the card);
//! hover is read from the previous frame since it depends on the card's rect.

use eframe::egui;
use egui::{Align, FontId, Layout, RichText, Sense, Ui};
use crate::ui::paint::{styled_button, surface_frame};
use themeapp::catalog_view::entrance_progress;
use themeapp::style::product_card::CardStyle;
use themeapp::CardPlan;

/// Vertical slide distance of the entrance animation, in points.
const ENTRANCE_OFFSET: f32 = 20.0;
const IMAGE_HEIGHT: f32 = 160.0;
const DESCRIPTION_CHARS: usize = 100;

/// Renders one card. Returns true when "Add to Cart" was clicked.
pub fn render_product_card(ui: &mut Ui, card: &CardPlan, style: &CardStyle, elapsed: f32) -> bool {
    let hover_id = ui.id().with(("product_card_hovered", card.product.id));
    let hovered = ui.ctx().data(|d| d.get_temp::<bool>(hover_id)).unwrap_or(false);
    let progress = entrance_progress(elapsed, card.index);
    let mut add_clicked = false;

    ui.scope(|ui| {
        ui.set_opacity(progress);
        ui.add_space(style.hover_lift - style.lift(hovered) + (1.0 - progress) * ENTRANCE_OFFSET);

        let frame = surface_frame(&style.card, style.elevation(hovered)).show(ui, |ui| {
            ui.set_width(ui.available_width());
            image_placeholder(ui, card, style);
            ui.add_space(12.0);

            ui.label(RichText::new(&card.product.title).size(17.0).strong().color(style.title));
            ui.add_space(4.0);
            ui.label(RichText::new(excerpt(&card.product.description, DESCRIPTION_CHARS)).color(style.description));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 2.0;
                for i in 0..card.stars_total {
                    ui.label(RichText::new("★").size(16.0).color(style.star(i < card.stars_filled)));
                }
                ui.add_space(6.0);
                ui.label(RichText::new(&card.rating_count_text).color(style.description));
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.price_text).size(22.0).strong().color(style.price));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let radius = style.card.radius.min(12);
                    if styled_button(ui, "🛒 Add to Cart", &style.button, radius).clicked() {
                        add_clicked = true;
                    }
                });
            });
        });

        let now_hovered = ui.rect_contains_pointer(frame.response.rect);
        if now_hovered != hovered {
            ui.ctx().data_mut(|d| d.insert_temp(hover_id, now_hovered));
            ui.ctx().request_repaint();
        }

        ui.add_space(style.lift(hovered));
    });

    add_clicked
}

/// Image area. Remote images are not fetched; the category stands in.
fn image_placeholder(ui: &mut Ui, card: &CardPlan, style: &CardStyle) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), IMAGE_HEIGHT), Sense::hover());
    let radius = style.card.radius.saturating_sub(4);
    ui.painter().rect_filled(rect, radius as f32, style.description.gamma_multiply(0.12));

    let caption = if card.product.category.is_empty() {
        "🖼".to_string()
    } else {
        format!("🖼  {}", card.product.category)
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        caption,
        FontId::proportional(15.0),
        style.description,
    );

    if !card.product.image.is_empty() {
        response.on_hover_text(&card.product.image);
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("abcdef", 3), "abc…");
        assert_eq!(excerpt("ab cdef", 3), "ab…");
        assert_eq!(excerpt("ééééé", 2), "éé…");
    }
}
