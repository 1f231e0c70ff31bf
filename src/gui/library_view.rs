use egui::{RichText, ScrollArea};

use super::components::{GameCard, SearchAction, SearchBar};
use super::styles;
use crate::catalog::Game;

pub struct LibraryView;

impl LibraryView {
    /// Render the search bar and the card grid. Returns whatever the
    /// search bar wants the state holder to do.
    pub fn show(
        ui: &mut egui::Ui,
        games: &[Game],
        query: &mut String,
        suggestions: &[String],
    ) -> Option<SearchAction> {
        let action = SearchBar::show(ui, query, suggestions);

        ui.separator();
        ui.add_space(15.0);

        ScrollArea::vertical().show(ui, |ui| {
            let available_width = ui.available_width();
            let card_width = 280.0;
            let card_spacing = 15.0;
            let cards_per_row = (available_width / (card_width + card_spacing))
                .floor()
                .max(1.0) as usize;

            if games.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(100.0);
                    ui.label(
                        RichText::new("No games in the catalog")
                            .size(18.0)
                            .color(styles::TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new("Search above to add your first game")
                            .color(styles::TEXT_SECONDARY),
                    );
                });
            } else {
                for row_games in games.chunks(cards_per_row) {
                    ui.horizontal(|ui| {
                        for game in row_games {
                            GameCard::show(ui, game);
                            ui.add_space(card_spacing);
                        }
                    });
                    ui.add_space(15.0);
                }
            }
        });

        action
    }
}
