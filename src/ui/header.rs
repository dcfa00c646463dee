//! Header panel UI rendering
//!
//! Handles the top bar: logo, page links, cart badge and the variant picker.
//! On narrow windows the page links move into a collapsible menu below the bar.

use eframe::egui;
use egui::{Align, Align2, CursorIcon, FontId, Layout, Order, Response, RichText, Sense, Ui};
use crate::app::AppState;
use crate::ui::paint::{styled_button, styled_text, surface_frame};
use themeapp::style::header::{self as header_style, EntryStyle, HeaderStyle};
use themeapp::{Route, Variant};

/// Minimum width of the picker dropdown.
const PICKER_WIDTH: f32 = 200.0;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// A page link or the logo was clicked
    Navigate(Route),
    /// A variant was chosen in the picker
    SelectVariant(Variant),
}

/// Renders the header bar.
///
/// Menu open/close state is toggled directly on `state.navigation`;
/// page and variant changes are returned for the coordinator.
pub fn render_header(ui: &mut Ui, state: &mut AppState, narrow: bool) -> Option<HeaderInteraction> {
    let variant = state.theme.get();
    let route = state.navigation.route();
    let style = header_style::resolve(variant);
    let mut interaction = None;
    let mut trigger: Option<Response> = None;

    ui.horizontal_centered(|ui| {
        ui.add_space(16.0);

        let logo = ui
            .add(egui::Label::new(styled_text("🎨 ThemeApp", style.logo_typeface, 20.0, style.text)).sense(Sense::click()))
            .on_hover_cursor(CursorIcon::PointingHand);
        if logo.clicked() {
            interaction = Some(HeaderInteraction::Navigate(Route::Home));
        }

        if !narrow {
            ui.add_space(24.0);
            for link in Route::ALL {
                let active = link == route;
                if entry(ui, link.label(), style.nav_link(active), active, None).clicked() {
                    interaction = Some(HeaderInteraction::Navigate(link));
                }
            }
        }

        // Push picker and menu toggle to the right
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.add_space(16.0);

            if narrow {
                let icon = if state.navigation.is_mobile_menu_open() { "✕" } else { "☰" };
                let toggle = egui::Button::new(RichText::new(icon).size(20.0).color(style.text)).frame(false);
                if ui.add(toggle).clicked() {
                    state.navigation.toggle_mobile_menu();
                }
            }

            let label = if narrow {
                format!("{} ⏷", variant.glyph())
            } else {
                format!("{} {} ⏷", variant.glyph(), variant.label())
            };
            let response = styled_button(ui, &label, &style.picker_trigger, 8);
            if response.clicked() {
                state.navigation.toggle_picker();
            }
            trigger = Some(response);

            let items = state.cart.count();
            if items > 0 {
                ui.label(RichText::new(format!("🛒 {items}")).strong().color(style.text));
            }
        });
    });

    if let Some(trigger) = trigger.filter(|_| state.navigation.is_picker_open()) {
        if let Some(chosen) = render_picker(ui, state, style, variant, &trigger) {
            interaction = Some(HeaderInteraction::SelectVariant(chosen));
        }
    }

    interaction
}

/// Dropdown listing every variant, anchored under the trigger.
fn render_picker(
    ui: &Ui,
    state: &mut AppState,
    style: &HeaderStyle,
    current: Variant,
    trigger: &Response,
) -> Option<Variant> {
    let mut chosen = None;

    let area = egui::Area::new(egui::Id::new("variant_picker"))
        .order(Order::Foreground)
        .pivot(Align2::RIGHT_TOP)
        .fixed_pos(trigger.rect.right_bottom() + egui::vec2(0.0, 6.0))
        .show(ui.ctx(), |ui| {
            surface_frame(&style.dropdown, style.dropdown.elevation)
                .inner_margin(4.0)
                .show(ui, |ui| {
                    ui.set_min_width(PICKER_WIDTH);
                    for option in Variant::ALL {
                        let text = format!("{}  {}", option.glyph(), option.label());
                        let selected = option == current;
                        let mut row = entry(ui, &text, style.picker_option(selected), selected, Some(PICKER_WIDTH));
                        if selected {
                            row = row.on_hover_text("Active theme");
                        }
                        if row.clicked() {
                            chosen = Some(option);
                        }
                    }
                });
        });

    let clicked_elsewhere = ui.input(|i| i.pointer.any_click())
        && !area.response.contains_pointer()
        && !trigger.contains_pointer();
    if chosen.is_none() && clicked_elsewhere {
        state.navigation.close_picker();
    }

    chosen
}

/// Page links shown below the bar on narrow windows.
pub fn render_mobile_menu(ui: &mut Ui, state: &AppState) -> Option<HeaderInteraction> {
    let style = header_style::resolve(state.theme.get());
    let route = state.navigation.route();
    let mut interaction = None;

    ui.add_space(8.0);
    let width = ui.available_width();
    for link in Route::ALL {
        let active = link == route;
        if entry(ui, link.label(), style.nav_link(active), active, Some(width)).clicked() {
            interaction = Some(HeaderInteraction::Navigate(link));
        }
    }
    ui.add_space(8.0);

    interaction
}

/// A clickable text row.
///
/// The background is painted while `highlighted` (active route or selected
/// option) and otherwise only under the pointer.
fn entry(ui: &mut Ui, text: &str, style: &EntryStyle, highlighted: bool, width: Option<f32>) -> Response {
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_string(), FontId::proportional(15.0), style.text);
    let size = egui::vec2(width.unwrap_or(galley.size().x + 24.0), galley.size().y + 14.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if highlighted || response.hovered() {
            painter.rect_filled(rect, 8.0, style.background);
        }
        let text_pos = egui::pos2(rect.left() + 12.0, rect.center().y - galley.size().y / 2.0);
        painter.galley(text_pos, galley, style.text);
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::epaint::ClippedShape;
    use egui::{Color32, Frame, Shape};

    /// Runs one headless frame that draws a single entry and returns its shapes.
    fn draw_entry(style: &'static EntryStyle, highlighted: bool) -> Vec<ClippedShape> {
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
                entry(ui, "About", style, highlighted, None);
            });
        });
        output.shapes
    }

    fn has_fill(shapes: &[ClippedShape], color: Color32) -> bool {
        shapes
            .iter()
            .any(|clipped| matches!(&clipped.shape, Shape::Rect(rect) if rect.fill == color))
    }

    #[test]
    fn test_idle_entry_has_no_background_without_pointer() {
        for variant in Variant::ALL {
            let style = header_style::resolve(variant);

            let idle = style.nav_link(false);
            assert!(!has_fill(&draw_entry(idle, false), idle.background), "{variant:?} link");

            let option = style.picker_option(false);
            assert!(!has_fill(&draw_entry(option, false), option.background), "{variant:?} option");
        }
    }

    #[test]
    fn test_active_entry_paints_background() {
        for variant in Variant::ALL {
            let active = header_style::resolve(variant).nav_link(true);
            assert!(has_fill(&draw_entry(active, true), active.background), "{variant:?}");
        }
    }
}
