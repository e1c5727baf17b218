//! UI theme constants — warm autumn palette

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(255, 248, 240);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(250, 232, 212);
pub const BG_SURFACE: Color32 = Color32::from_rgb(236, 222, 206);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(62, 39, 27);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(133, 100, 78);
pub const TEXT_ON_ACCENT: Color32 = Color32::from_rgb(255, 251, 245);
pub const ACCENT: Color32 = Color32::from_rgb(234, 88, 12);
pub const HIGHLIGHT: Color32 = Color32::from_rgb(202, 138, 4);
pub const ERROR: Color32 = Color32::from_rgb(185, 28, 28);
pub const ERROR_BG: Color32 = Color32::from_rgb(254, 226, 226);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(16);
pub const PANEL_PADDING: Vec2 = Vec2::new(16.0, 12.0);

/// Share of the row a bubble may take before wrapping
pub const BUBBLE_WIDTH_RATIO: f32 = 0.75;

/// Apply the light autumn theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = false;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = Color32::WHITE;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = BG_SURFACE;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(2.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
