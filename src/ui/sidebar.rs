//! Quick-links sidebar rendering.
//!
//! Drawn only while the shell plan carries a sidebar. Hover and active link
//! live in [`SidebarState`], which the shell discards when the sidebar leaves
//! the plan.

use eframe::egui;
use egui::{CursorIcon, FontId, RichText, Sense, Ui};
use themeapp::{SidebarPlan, SidebarState};

pub fn render_sidebar(ui: &mut Ui, plan: &SidebarPlan, local: &mut SidebarState) {
    let style = plan.style;

    ui.add_space(8.0);
    ui.label(RichText::new(plan.heading).size(18.0).strong().color(style.heading));
    ui.add_space(12.0);

    let width = ui.available_width();
    let mut hovered = None;

    for (index, link) in plan.links.iter().enumerate() {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, 36.0), Sense::click());
        let response = response.on_hover_cursor(CursorIcon::PointingHand);

        if response.hovered() {
            hovered = Some(index);
        }
        if response.clicked() {
            local.active = Some(index);
            tracing::debug!(link = *link, "quick link selected");
        }

        let background = if local.active == Some(index) {
            Some(style.link_active)
        } else if local.hovered == Some(index) {
            Some(style.link_hover)
        } else {
            None
        };
        if let Some(color) = background {
            ui.painter().rect_filled(rect, 4.0, color);
        }
        ui.painter().text(
            egui::pos2(rect.left() + 12.0, rect.center().y),
            egui::Align2::LEFT_CENTER,
            *link,
            FontId::proportional(15.0),
            style.text,
        );
    }

    local.hovered = hovered;
}
