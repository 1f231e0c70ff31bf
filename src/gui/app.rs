//! The application state holder.
//!
//! `CatalogApp` owns all client-side state and performs the three
//! request/response interactions with the catalog service: the catalog
//! load, the suggestion fetch and the game add. Async work runs on the
//! tokio runtime through `poll_promise`; results are drained in
//! `update()` on the UI thread as they arrive.

use eframe::egui;
use poll_promise::Promise;

use crate::api::CatalogClient;
use crate::catalog::{Catalog, Game};
use crate::config::Config;
use crate::Result;

use super::components::{Header, SearchAction, StatusBar};
use super::library_view::LibraryView;
use super::styles;

pub struct CatalogApp {
    client: Option<CatalogClient>,
    catalog: Catalog,
    search_query: String,
    status_message: String,
    error_message: Option<String>,
    loading_catalog: bool,
    catalog_promise: Option<Promise<Result<Vec<Game>>>>,
    // Overlapping suggestion fetches are all kept in flight and applied
    // in arrival order: a slow earlier request can overwrite a later
    // one's result. Last to resolve wins, not last issued.
    suggestion_promises: Vec<Promise<Result<Vec<String>>>>,
    add_promise: Option<Promise<Result<Game>>>,
}

impl CatalogApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        styles::setup_custom_style(&cc.egui_ctx);

        let (client, error_message) = match CatalogClient::new(&config.service_url) {
            Ok(client) => (Some(client), None),
            Err(e) => (None, Some(format!("Failed to create HTTP client: {}", e))),
        };

        let mut app = Self {
            client,
            catalog: Catalog::new(),
            search_query: String::new(),
            status_message: String::new(),
            error_message,
            loading_catalog: false,
            catalog_promise: None,
            suggestion_promises: Vec::new(),
            add_promise: None,
        };

        app.load_all_games();
        app
    }

    /// Fetch the whole collection. On success the games list is swapped
    /// wholesale; on failure the alert is raised and state is untouched.
    fn load_all_games(&mut self) {
        if self.loading_catalog {
            return;
        }
        let Some(client) = self.client.clone() else {
            return;
        };

        self.loading_catalog = true;
        self.catalog_promise = Some(Promise::spawn_async(async move {
            client.fetch_catalog().await
        }));
    }

    /// Fire a suggestion fetch for the current keyword. In-flight
    /// fetches are not cancelled or ordered against each other.
    fn get_suggestion(&mut self, keyword: String) {
        let Some(client) = self.client.clone() else {
            return;
        };

        self.suggestion_promises.push(Promise::spawn_async(async move {
            client.autocomplete(&keyword).await
        }));
    }

    /// Ask the service to add a game by name. The suggestion dropdown
    /// is cleared before the request resolves (optimistic UI).
    fn add_game(&mut self, name: String) {
        let Some(client) = self.client.clone() else {
            return;
        };

        self.catalog.clear_suggestions();
        self.search_query.clear();
        self.status_message = format!("Adding {}...", name);

        self.add_promise = Some(Promise::spawn_async(async move {
            client.add_game(&name).await
        }));
    }

    fn clear_search(&mut self) {
        self.search_query.clear();
        self.catalog.clear_suggestions();
    }

    /// Apply finished network calls to the catalog state.
    fn drain_promises(&mut self) {
        if let Some(promise) = self.catalog_promise.take() {
            match promise.try_take() {
                Ok(Ok(games)) => {
                    self.status_message = format!("✓ Loaded {} game(s)", games.len());
                    self.catalog.replace_games(games);
                    self.loading_catalog = false;
                }
                Ok(Err(e)) => {
                    self.error_message = Some(format!("Failed to load catalog: {}", e));
                    self.loading_catalog = false;
                }
                Err(promise) => self.catalog_promise = Some(promise),
            }
        }

        let pending = std::mem::take(&mut self.suggestion_promises);
        for promise in pending {
            match promise.try_take() {
                // Each arrival replaces the list; a failed fetch leaves
                // the previous suggestions untouched.
                Ok(Ok(suggestions)) => self.catalog.set_suggestions(suggestions),
                Ok(Err(e)) => {
                    self.error_message = Some(format!("Failed to fetch suggestions: {}", e));
                }
                Err(promise) => self.suggestion_promises.push(promise),
            }
        }

        if let Some(promise) = self.add_promise.take() {
            match promise.try_take() {
                Ok(Ok(game)) => {
                    self.status_message = format!("✓ Added {}", game.name);
                    self.catalog.append_game(game);
                }
                Ok(Err(e)) => {
                    self.error_message = Some(format!("Failed to add game: {}", e));
                }
                Err(promise) => self.add_promise = Some(promise),
            }
        }
    }

    fn show_error_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        egui::Window::new("Request failed")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
            });
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_promises();

        let mut reload = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            Header::show(ui, self.catalog.games().len(), self.loading_catalog, &mut reload);
        });
        if reload {
            self.load_all_games();
        }

        let mut action = None;
        let mut clear_status = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = LibraryView::show(
                ui,
                self.catalog.games(),
                &mut self.search_query,
                self.catalog.suggestions(),
            );

            StatusBar::show(ui, &self.status_message, &mut clear_status);
        });

        match action {
            Some(SearchAction::QueryChanged(keyword)) => self.get_suggestion(keyword),
            Some(SearchAction::SuggestionPicked(name)) => self.add_game(name),
            Some(SearchAction::Cleared) => self.clear_search(),
            None => {}
        }
        if clear_status {
            self.status_message.clear();
        }

        self.show_error_alert(ctx);

        // Keep polling in-flight promises
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
