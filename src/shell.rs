//! Page shell composition.
//!
//! The shell decides page chrome for the active variant: background and
//! typography, whether the quick-links sidebar exists, and how far main
//! content is inset. The sidebar exists only when the variant has a sidebar
//! style *and* the page asked for one; otherwise it is absent from the plan
//! entirely, and [`ShellState::sync`] drops whatever local state it had.

use crate::style::shell::ShellStyle;
use crate::style::sidebar::{self, SidebarStyle};
use crate::style::shell as shell_style;
use crate::theme::Variant;

/// Width reserved for the sidebar, in points.
pub const SIDEBAR_WIDTH: f32 = 256.0;
/// Narrowest window that still shows the sidebar, in points.
pub const SIDEBAR_MIN_WINDOW_WIDTH: f32 = 1024.0;
/// Height of the fixed header bar, in points.
pub const HEADER_HEIGHT: f32 = 64.0;
/// Seconds for the page fade after a variant change.
pub const FADE_DURATION: f32 = 0.5;

pub const QUICK_LINKS_HEADING: &str = "Quick Links";
pub const QUICK_LINKS: [&str; 4] = ["Dashboard", "Analytics", "Reports", "Settings"];

/// Whether a page asks for the sidebar under `variant`.
///
/// Every page requests it exactly when the professional look is active.
pub fn page_wants_sidebar(variant: Variant) -> bool {
    variant == Variant::Professional
}

/// Whether a window of `width` points has room for the sidebar.
///
/// Below this the page keeps the full width and the sidebar is left out.
pub fn sidebar_fits(width: f32) -> bool {
    width >= SIDEBAR_MIN_WINDOW_WIDTH
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarPlan {
    pub style: &'static SidebarStyle,
    pub heading: &'static str,
    pub links: &'static [&'static str],
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShellPlan {
    pub variant: Variant,
    pub style: &'static ShellStyle,
    pub sidebar: Option<SidebarPlan>,
    /// Left inset of the main content area
    pub content_inset: f32,
}

impl ShellPlan {
    pub fn compose(variant: Variant, wants_sidebar: bool) -> Self {
        let sidebar = if wants_sidebar {
            sidebar::resolve(variant).map(|style| SidebarPlan {
                style,
                heading: QUICK_LINKS_HEADING,
                links: &QUICK_LINKS,
                width: SIDEBAR_WIDTH,
            })
        } else {
            None
        };
        let content_inset = sidebar.as_ref().map_or(0.0, |s| s.width);

        Self {
            variant,
            style: shell_style::resolve(variant),
            sidebar,
            content_inset,
        }
    }

    pub fn has_sidebar(&self) -> bool {
        self.sidebar.is_some()
    }
}

/// Transient state that lives only while the sidebar is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub hovered: Option<usize>,
    pub active: Option<usize>,
}

/// Shell state carried between frames.
#[derive(Debug, Default)]
pub struct ShellState {
    sidebar: Option<SidebarState>,
    rendered_variant: Option<Variant>,
    fade_started_at: Option<f64>,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aligns local state with this frame's plan.
    ///
    /// `now` is the UI clock in seconds; a variant change restarts the fade.
    pub fn sync(&mut self, plan: &ShellPlan, now: f64) {
        if plan.has_sidebar() {
            self.sidebar.get_or_insert_with(SidebarState::default);
        } else {
            self.sidebar = None;
        }

        if self.rendered_variant != Some(plan.variant) {
            self.rendered_variant = Some(plan.variant);
            self.fade_started_at = Some(now);
        }
    }

    /// Sidebar state, present only while the sidebar is part of the plan.
    pub fn sidebar(&self) -> Option<&SidebarState> {
        self.sidebar.as_ref()
    }

    pub fn sidebar_mut(&mut self) -> Option<&mut SidebarState> {
        self.sidebar.as_mut()
    }

    /// Page opacity for the fade that follows a variant change.
    pub fn fade_opacity(&self, now: f64) -> f32 {
        match self.fade_started_at {
            Some(start) => (((now - start) as f32) / FADE_DURATION).clamp(0.0, 1.0),
            None => 1.0,
        }
    }

    pub fn is_fading(&self, now: f64) -> bool {
        self.fade_opacity(now) < 1.0
    }
}
