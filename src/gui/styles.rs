use egui::{Color32, Rounding, Stroke, Style, Visuals};

pub fn setup_custom_style(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    // Dark library theme
    style.visuals.window_fill = Color32::from_rgb(18, 17, 22);
    style.visuals.panel_fill = Color32::from_rgb(24, 23, 29);
    style.visuals.faint_bg_color = Color32::from_rgb(30, 29, 36);
    style.visuals.extreme_bg_color = Color32::from_rgb(14, 13, 18);

    style.visuals.override_text_color = Some(Color32::from_rgb(240, 240, 242));

    // Button styling
    style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(48, 47, 56);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Color32::from_rgb(200, 200, 200));
    style.visuals.widgets.inactive.rounding = Rounding::same(5.0);

    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(62, 61, 72);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::from_rgb(238, 238, 240));
    style.visuals.widgets.hovered.rounding = Rounding::same(5.0);

    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.rounding = Rounding::same(5.0);

    // Selection color
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke = Stroke::new(1.5, ACCENT);

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

// Library color palette
pub const CARD_BG: Color32 = Color32::from_rgb(30, 29, 36);
pub const CARD_STROKE: Color32 = Color32::from_rgb(47, 46, 55);
pub const COVER_BG: Color32 = Color32::from_rgb(52, 48, 70);
pub const ACCENT: Color32 = Color32::from_rgb(124, 108, 230);
pub const SUCCESS_GREEN: Color32 = Color32::from_rgb(76, 175, 80);
pub const ERROR_RED: Color32 = Color32::from_rgb(244, 67, 54);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(162, 160, 172);
