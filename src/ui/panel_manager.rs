//! Panel orchestration and layout management.
//!
//! Composes the shell plan for the active variant each frame and lays out the
//! header, the optional mobile menu, the optional sidebar and the page body.

use eframe::egui;
use egui::{Frame, Margin, Stroke};
use crate::app::AppState;
use crate::ui::paint::paint_fill;
use crate::ui::pages::{self, PageInteraction};
use crate::ui::{header, sidebar, NARROW_WIDTH};
use themeapp::shell::{page_wants_sidebar, sidebar_fits, HEADER_HEIGHT};
use themeapp::style::header as header_style;
use themeapp::{Route, ShellPlan, Variant};

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelInteraction {
    /// A page was requested from the header, mobile menu or a page button
    Navigate(Route),
    /// A variant was chosen in the picker
    SelectVariant(Variant),
    /// "Add to Cart" was clicked on a product card
    AddToCart(u64),
    /// The contact form was submitted
    SubmitContact,
}

impl From<header::HeaderInteraction> for PanelInteraction {
    fn from(interaction: header::HeaderInteraction) -> Self {
        match interaction {
            header::HeaderInteraction::Navigate(route) => PanelInteraction::Navigate(route),
            header::HeaderInteraction::SelectVariant(variant) => PanelInteraction::SelectVariant(variant),
        }
    }
}

impl From<PageInteraction> for PanelInteraction {
    fn from(interaction: PageInteraction) -> Self {
        match interaction {
            PageInteraction::Navigate(route) => PanelInteraction::Navigate(route),
            PageInteraction::AddToCart(product_id) => PanelInteraction::AddToCart(product_id),
            PageInteraction::SubmitContact => PanelInteraction::SubmitContact,
        }
    }
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let variant = state.theme.get();
        let now = ctx.input(|i| i.time);
        let width = ctx.content_rect().width();
        let plan = ShellPlan::compose(variant, page_wants_sidebar(variant) && sidebar_fits(width));
        state.shell.sync(&plan, now);

        let opacity = state.shell.fade_opacity(now);
        if state.shell.is_fading(now) {
            ctx.request_repaint();
        }

        let narrow = width < NARROW_WIDTH;
        let bar_style = header_style::resolve(variant);

        // Header bar at the top
        egui::TopBottomPanel::top("header")
            .exact_height(HEADER_HEIGHT)
            .frame(Frame::default())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                paint_fill(ui.painter(), rect, bar_style.bar, 0);
                let border = bar_style.bar_border;
                ui.painter().hline(rect.x_range(), rect.bottom(), Stroke::new(border.width, border.color));

                if let Some(header_interaction) = header::render_header(ui, state, narrow) {
                    interaction = Some(header_interaction.into());
                }
            });

        // Collapsible page links below the bar on narrow windows
        if narrow && state.navigation.is_mobile_menu_open() {
            let menu_frame = Frame::default()
                .fill(bar_style.mobile_menu.base_color())
                .stroke(Stroke::new(1.0, bar_style.mobile_border))
                .inner_margin(Margin::symmetric(16, 0));

            egui::TopBottomPanel::top("mobile_menu").frame(menu_frame).show(ctx, |ui| {
                if let Some(menu_interaction) = header::render_mobile_menu(ui, state) {
                    interaction = Some(menu_interaction.into());
                }
            });
        }

        // Quick links, only while the plan has a sidebar
        if let (Some(sidebar_plan), Some(local)) = (&plan.sidebar, state.shell.sidebar_mut()) {
            let style = sidebar_plan.style;
            let sidebar_frame = Frame::default()
                .fill(style.panel.base_color())
                .stroke(Stroke::new(style.border.width, style.border.color))
                .inner_margin(16.0);

            egui::SidePanel::left("quick_links")
                .exact_width(plan.content_inset)
                .resizable(false)
                .frame(sidebar_frame)
                .show(ctx, |ui| {
                    sidebar::render_sidebar(ui, sidebar_plan, local);
                });
        }

        // Page body fills the rest
        egui::CentralPanel::default()
            .frame(Frame::default())
            .show(ctx, |ui| {
                paint_fill(ui.painter(), ui.max_rect(), plan.style.page, 0);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_opacity(opacity);
                        ui.visuals_mut().override_text_color = Some(plan.style.text);

                        if let Some(page_interaction) = pages::render_page(ui, state, now) {
                            interaction = Some(page_interaction.into());
                        }
                    });
            });

        interaction
    }
}
