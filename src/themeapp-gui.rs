//! ThemeApp storefront GUI
//!
//! A small storefront rendered with egui whose whole look can be switched at
//! runtime between three variants (Minimalist, Professional, Playful). The
//! chosen variant is persisted and restored on the next launch.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators (theme, settings, workflows)
//! - `state/` - Focused state components (navigation, catalog, contact form, cart)
//! - `io/` - Background catalog loading
//! - `ui/` - Panel orchestration, pages and painting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::{CatalogLoader, CatalogSource};
use themeapp::{FileStorage, Route};
use ui::panel_manager::PanelManager;

/// Application id; eframe derives its storage directory from it.
const APP_ID: &str = "ThemeApp";
const LAST_ROUTE_KEY: &str = "last_route";

/// Entry point: sets up logging and launches the storefront window.
fn main() -> eframe::Result {
    init_tracing();

    // First positional argument: catalog JSON file
    let source = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map_or(CatalogSource::Sample, CatalogSource::File);

    tracing::info!(catalog = %source, "starting ThemeApp");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("ThemeApp"),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| Ok(Box::new(ThemeApp::new(cc, source)))),
    )
}

/// Logging defaults to `info`; `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// The storefront application.
///
/// Most work is delegated:
/// - `ThemeCoordinator` owns theme store setup and applies visuals
/// - `ApplicationCoordinator` handles navigation, catalog loading and form workflows
/// - `PanelManager` lays out and renders every panel
struct ThemeApp {
    state: AppState,
    loader: CatalogLoader,
    pending_catalog: Option<CatalogSource>,
}

impl ThemeApp {
    fn new(cc: &eframe::CreationContext, source: CatalogSource) -> Self {
        let storage = FileStorage::in_storage_dir(APP_ID);
        if let Some(path) = storage.path() {
            tracing::info!(path = %path.display(), "theme preference file");
        }
        let theme = ThemeCoordinator::create_store(Some(Box::new(storage)), &cc.egui_ctx);

        let last_route: Route = SettingsCoordinator::load_setting_or(cc.storage, LAST_ROUTE_KEY, Route::Home);

        Self {
            state: AppState::new(theme, last_route),
            loader: CatalogLoader::new(),
            pending_catalog: Some(source),
        }
    }
}

impl eframe::App for ThemeApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, LAST_ROUTE_KEY, &self.state.navigation.route());
    }

    /// Per frame:
    /// 1. Start the catalog load on the first frame
    /// 2. Apply catalog load completion
    /// 3. Apply visuals for the active variant
    /// 4. Render all panels and handle the resulting interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(source) = self.pending_catalog.take() {
            ApplicationCoordinator::start_catalog_load(&mut self.state, &mut self.loader, source, ctx);
        }

        let now = ctx.input(|i| i.time);
        ApplicationCoordinator::check_loading_completion(&mut self.state, &mut self.loader, now);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
        }
    }
}
