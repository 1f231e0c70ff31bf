use egui::RichText;

use super::super::styles;

pub struct Header;

impl Header {
    pub fn show(ui: &mut egui::Ui, game_count: usize, loading: bool, on_reload: &mut bool) {
        ui.horizontal(|ui| {
            ui.heading(
                RichText::new("Gamedex")
                    .size(22.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled_ui(!loading, |ui| {
                    let label = if loading { "Loading..." } else { "Reload" };
                    if ui.button(RichText::new(label).size(14.0)).clicked() {
                        *on_reload = true;
                    }
                });

                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!("{} game(s)", game_count))
                        .size(13.0)
                        .color(styles::TEXT_SECONDARY),
                );
            });
        });
    }
}
