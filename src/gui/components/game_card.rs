use egui::{Color32, RichText, Vec2};

use super::super::styles;
use crate::catalog::Game;

pub struct GameCard;

impl GameCard {
    pub fn show(ui: &mut egui::Ui, game: &Game) {
        egui::Frame::none()
            .fill(styles::CARD_BG)
            .stroke(egui::Stroke::new(1.0, styles::CARD_STROKE))
            .rounding(egui::Rounding::same(6.0))
            .inner_margin(egui::Margin::same(0.0))
            .show(ui, |ui| {
                ui.set_min_size(Vec2::new(280.0, 330.0));
                ui.set_max_size(Vec2::new(280.0, 330.0));

                ui.vertical(|ui| {
                    // Cover area. The service hands us a cover_art URL but
                    // the card paints a placeholder with the title, like
                    // every store card does while art is unavailable.
                    let (rect, response) =
                        ui.allocate_exact_size(Vec2::new(280.0, 150.0), egui::Sense::hover());

                    let painter = ui.painter();
                    let cover_rounding = egui::Rounding {
                        nw: 6.0,
                        ne: 6.0,
                        sw: 0.0,
                        se: 0.0,
                    };

                    painter.rect_filled(rect, cover_rounding, styles::COVER_BG);

                    if response.hovered() {
                        painter.rect_filled(
                            rect,
                            cover_rounding,
                            Color32::from_rgba_premultiplied(124, 108, 230, 20),
                        );
                    }

                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        &game.name,
                        egui::FontId::proportional(16.0),
                        Color32::WHITE,
                    );

                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.add_space(15.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(&game.name)
                                    .size(16.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );

                            if !game.genre.is_empty() {
                                ui.label(
                                    RichText::new(game.genre.join(", "))
                                        .size(12.0)
                                        .color(styles::TEXT_SECONDARY),
                                );
                            }

                            if !game.developer.is_empty() {
                                ui.label(
                                    RichText::new(game.developer.join(", "))
                                        .size(12.0)
                                        .color(styles::TEXT_SECONDARY),
                                );
                            }

                            ui.add_space(8.0);

                            ui.horizontal(|ui| {
                                let score = if game.has_score() {
                                    format!("OC {}", game.opencritic)
                                } else {
                                    "OC N/A".to_string()
                                };
                                ui.label(
                                    RichText::new(score).size(13.0).color(styles::ACCENT),
                                );

                                ui.add_space(10.0);

                                let hours = if game.has_time_to_beat() {
                                    format!("~{:.0} h", game.time_to_beat)
                                } else {
                                    "? h".to_string()
                                };
                                ui.label(
                                    RichText::new(hours)
                                        .size(13.0)
                                        .color(styles::TEXT_SECONDARY),
                                );

                                if let Some(price) = game.best_price() {
                                    ui.add_space(10.0);
                                    ui.label(
                                        RichText::new(format!("${:.2}", price))
                                            .size(13.0)
                                            .color(styles::SUCCESS_GREEN),
                                    );
                                }
                            });

                            if !game.platforms.is_empty() {
                                let labels: Vec<&str> =
                                    game.platforms.iter().map(|p| p.label()).collect();
                                ui.label(
                                    RichText::new(labels.join(" · "))
                                        .size(11.0)
                                        .color(styles::TEXT_SECONDARY),
                                );
                            }

                            if !game.url.is_empty() {
                                ui.add_space(6.0);
                                ui.hyperlink_to(
                                    RichText::new("Store page").size(12.0),
                                    &game.url,
                                );
                            }
                        });
                    });
                });
            });
    }
}
