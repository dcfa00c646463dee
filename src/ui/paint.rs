//! Painting helpers that turn resolved style tokens into egui shapes.
//!
//! This is the only place where `Fill`, `Elevation` and `Typeface` are
//! interpreted.

use eframe::egui;
use egui::{
    Color32, CornerRadius, CursorIcon, FontId, InnerResponse, Mesh, Pos2, Rect, Response, RichText,
    Sense, Shadow, Shape, Stroke, Ui,
};
use themeapp::{ButtonStyle, Elevation, Fill, Surface, Typeface};

/// Label padding inside painted buttons.
const BUTTON_PADDING: egui::Vec2 = egui::vec2(20.0, 10.0);

/// Shape covering `rect` with `fill`.
///
/// Gradients run left to right and ignore `radius`.
pub fn fill_shape(rect: Rect, fill: Fill, radius: u8) -> Shape {
    match fill {
        Fill::Solid(color) => Shape::rect_filled(rect, CornerRadius::same(radius), color),
        Fill::Gradient { from, via, to } => {
            let stops: Vec<Color32> = match via {
                Some(via) => vec![from, via, to],
                None => vec![from, to],
            };
            Shape::mesh(gradient_mesh(rect, &stops))
        }
    }
}

fn gradient_mesh(rect: Rect, stops: &[Color32]) -> Mesh {
    let mut mesh = Mesh::default();
    let segments = stops.len().saturating_sub(1).max(1);

    for (i, color) in stops.iter().enumerate() {
        let x = rect.left() + rect.width() * i as f32 / segments as f32;
        mesh.colored_vertex(Pos2::new(x, rect.top()), *color);
        mesh.colored_vertex(Pos2::new(x, rect.bottom()), *color);
    }
    for i in 0..segments as u32 {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    mesh
}

pub fn paint_fill(painter: &egui::Painter, rect: Rect, fill: Fill, radius: u8) {
    painter.add(fill_shape(rect, fill, radius));
}

pub fn shadow_for(elevation: Elevation) -> Shadow {
    let (offset_y, blur, alpha) = match elevation {
        Elevation::Flat => return Shadow::NONE,
        Elevation::Low => (1, 3, 25),
        Elevation::Medium => (4, 8, 35),
        Elevation::High => (10, 24, 50),
    };
    Shadow {
        offset: [0, offset_y],
        blur,
        spread: 0,
        color: Color32::from_black_alpha(alpha),
    }
}

/// Frame for a card or panel surface at the given elevation.
///
/// Frames only take a solid fill; a gradient surface is drawn with its first stop.
pub fn surface_frame(surface: &Surface, elevation: Elevation) -> egui::Frame {
    egui::Frame::default()
        .fill(surface.fill.base_color())
        .stroke(Stroke::new(surface.border.width, surface.border.color))
        .corner_radius(CornerRadius::same(surface.radius))
        .shadow(shadow_for(elevation))
        .inner_margin(24.0)
}

/// Text in the given typeface.
///
/// egui ships no serif face, so serif renders as italic proportional text.
pub fn styled_text(text: impl Into<String>, typeface: Typeface, size: f32, color: Color32) -> RichText {
    let text = RichText::new(text).size(size).color(color);
    match typeface {
        Typeface::Sans => text,
        Typeface::Serif => text.italics(),
        Typeface::Bold => text.strong(),
    }
}

/// A button painted from a [`ButtonStyle`], including gradient fills.
pub fn styled_button(ui: &mut Ui, label: &str, style: &ButtonStyle, radius: u8) -> Response {
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), FontId::proportional(15.0), style.text);
    let (rect, response) = ui.allocate_exact_size(galley.size() + BUTTON_PADDING * 2.0, Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = style.fill_for(response.hovered());
        ui.painter().add(fill_shape(rect, fill, radius));
        ui.painter().galley(rect.center() - galley.size() / 2.0, galley, style.text);
    }
    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Lays out `add_contents` and paints `fill` behind it.
pub fn with_backdrop<R>(
    ui: &mut Ui,
    fill: Fill,
    radius: u8,
    margin: f32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    // Reserve the slot first so the backdrop sits underneath the content
    let slot = ui.painter().add(Shape::Noop);
    let inner = egui::Frame::default().inner_margin(margin).show(ui, add_contents);
    ui.painter().set(slot, fill_shape(inner.response.rect, fill, radius));
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_grows_with_elevation() {
        assert_eq!(shadow_for(Elevation::Flat), Shadow::NONE);
        assert!(shadow_for(Elevation::Low).blur < shadow_for(Elevation::Medium).blur);
        assert!(shadow_for(Elevation::Medium).blur < shadow_for(Elevation::High).blur);
    }

    #[test]
    fn test_gradient_mesh_has_one_quad_per_segment() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(100.0, 10.0));
        let mesh = gradient_mesh(rect, &[Color32::RED, Color32::GREEN, Color32::BLUE]);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.vertices[4].pos.x, 100.0);
    }

    #[test]
    fn test_solid_fill_is_a_rect() {
        let rect = Rect::from_min_max(Pos2::ZERO, Pos2::new(10.0, 10.0));
        assert!(matches!(fill_shape(rect, Fill::Solid(Color32::WHITE), 4), Shape::Rect(_)));
    }
}
