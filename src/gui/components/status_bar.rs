use egui::RichText;

use super::super::styles;

pub struct StatusBar;

impl StatusBar {
    pub fn show(ui: &mut egui::Ui, message: &str, on_clear: &mut bool) {
        if !message.is_empty() {
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(message)
                        .size(13.0)
                        .color(if message.contains('✓') {
                            styles::SUCCESS_GREEN
                        } else if message.contains("Failed") {
                            styles::ERROR_RED
                        } else {
                            styles::TEXT_SECONDARY
                        }),
                );
                if ui.button(RichText::new("Clear").size(12.0)).clicked() {
                    *on_clear = true;
                }
            });
        }
    }
}
