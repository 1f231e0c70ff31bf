use egui::RichText;

use super::super::styles;

pub enum SearchAction {
    /// The user edited the query; a fresh suggestion fetch is wanted.
    QueryChanged(String),
    /// The user picked a suggestion from the dropdown.
    SuggestionPicked(String),
    /// The query was emptied.
    Cleared,
}

pub struct SearchBar;

impl SearchBar {
    pub fn show(
        ui: &mut egui::Ui,
        query: &mut String,
        suggestions: &[String],
    ) -> Option<SearchAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading(RichText::new("Library").size(20.0).strong());
            ui.add_space(20.0);

            ui.label(RichText::new("🔍").size(16.0));
            ui.add_space(5.0);
            let search_edit = egui::TextEdit::singleline(query)
                .hint_text("Search for a game to add...")
                .desired_width(250.0);
            let response = ui.add(search_edit);

            if response.changed() {
                action = Some(if query.is_empty() {
                    SearchAction::Cleared
                } else {
                    SearchAction::QueryChanged(query.clone())
                });
            }

            if !query.is_empty() {
                ui.add_space(5.0);
                if ui.button(RichText::new("✖").size(13.0)).clicked() {
                    query.clear();
                    action = Some(SearchAction::Cleared);
                }
            }
        });

        // Suggestion dropdown, rendered right under the search box
        if !suggestions.is_empty() {
            ui.add_space(5.0);
            egui::Frame::none()
                .fill(styles::CARD_BG)
                .stroke(egui::Stroke::new(1.0, styles::CARD_STROKE))
                .rounding(egui::Rounding::same(5.0))
                .inner_margin(egui::Margin::same(6.0))
                .show(ui, |ui| {
                    ui.set_min_width(300.0);
                    for suggestion in suggestions {
                        if ui
                            .selectable_label(false, RichText::new(suggestion).size(14.0))
                            .clicked()
                        {
                            action = Some(SearchAction::SuggestionPicked(suggestion.clone()));
                        }
                    }
                });
        }

        action
    }
}
