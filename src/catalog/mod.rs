//! Catalog data model and in-memory state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::api::CatalogClient;
use crate::config::Config;
use crate::Result;

/// A single catalog entry as the rest of the application sees it.
///
/// Every record is fully populated by the catalog service; fields the
/// service could not resolve carry a `-1` sentinel rather than being
/// absent (`time_to_beat`, `opencritic`, individual store prices).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub name: String,
    pub genre: Vec<String>,
    pub developer: Vec<String>,
    pub publisher: Vec<String>,
    pub series: String,
    pub series_games: Vec<String>,
    pub related: Vec<String>,
    pub prices: HashMap<String, f64>,
    pub platforms: Vec<Platform>,
    pub time_to_beat: f64,
    pub url: String,
    pub cover_art: String,
    pub opencritic: i32,
}

/// Platform entry as delivered by the service.
///
/// Older service revisions send bare platform names, newer ones send
/// objects; both shapes must keep deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Platform {
    Name(String),
    Entry(HashMap<String, serde_json::Value>),
}

impl Platform {
    /// Display name for either wire shape.
    pub fn label(&self) -> &str {
        match self {
            Platform::Name(name) => name,
            Platform::Entry(fields) => fields
                .get("name")
                .and_then(|value| value.as_str())
                .unwrap_or("unknown"),
        }
    }
}

impl Game {
    /// Lowest non-sentinel price across all stores, if any store had one.
    pub fn best_price(&self) -> Option<f64> {
        self.prices
            .values()
            .copied()
            .filter(|price| *price >= 0.0)
            .fold(None, |lowest, price| match lowest {
                Some(current) if current <= price => Some(current),
                _ => Some(price),
            })
    }

    pub fn has_score(&self) -> bool {
        self.opencritic >= 0
    }

    pub fn has_time_to_beat(&self) -> bool {
        self.time_to_beat >= 0.0
    }
}

/// All client-side state, rebuilt from the service on every run.
///
/// The games list is only ever swapped wholesale (load) or appended to
/// (add); suggestions are replaced on every fetch and cleared on
/// selection. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<Game>,
    suggestions: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Whole-list swap. No merging with the previous collection.
    pub fn replace_games(&mut self, games: Vec<Game>) {
        self.games = games;
    }

    /// Append one record. Duplicate names are allowed; the service is
    /// the authority on identity.
    pub fn append_game(&mut self, game: Game) {
        self.games.push(game);
    }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    pub fn clear_suggestions(&mut self) {
        self.suggestions.clear();
    }
}

/// Composition of config and client used by the CLI for one-shot calls.
pub struct CatalogManager {
    client: CatalogClient,
}

impl CatalogManager {
    pub fn new(config: &Config) -> Result<Self> {
        let client = CatalogClient::new(&config.service_url)?;
        Ok(Self { client })
    }

    pub async fn list_games(&self) -> Result<Vec<Game>> {
        self.client.fetch_catalog().await
    }

    pub async fn suggestions(&self, keyword: &str) -> Result<Vec<String>> {
        self.client.autocomplete(keyword).await
    }

    pub async fn add_game(&self, name: &str) -> Result<Game> {
        self.client.add_game(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game(name: &str) -> Game {
        Game {
            name: name.to_string(),
            genre: vec!["Platformer".to_string()],
            developer: vec!["Maddy Makes Games".to_string()],
            publisher: vec!["Maddy Makes Games".to_string()],
            series: String::new(),
            series_games: Vec::new(),
            related: Vec::new(),
            prices: HashMap::new(),
            platforms: Vec::new(),
            time_to_beat: 8.0,
            url: "https://example.com/store".to_string(),
            cover_art: "https://example.com/cover.png".to_string(),
            opencritic: 88,
        }
    }

    #[test]
    fn test_replace_games_swaps_whole_list() {
        let mut catalog = Catalog::new();
        catalog.replace_games(vec![sample_game("Celeste"), sample_game("Hades")]);
        assert_eq!(catalog.games().len(), 2);

        catalog.replace_games(vec![sample_game("Outer Wilds")]);
        assert_eq!(catalog.games().len(), 1);
        assert_eq!(catalog.games()[0].name, "Outer Wilds");
    }

    #[test]
    fn test_append_game_keeps_existing_records() {
        let mut catalog = Catalog::new();
        catalog.replace_games(vec![sample_game("Celeste")]);
        catalog.append_game(sample_game("Hades"));

        assert_eq!(catalog.games().len(), 2);
        assert_eq!(catalog.games()[1].name, "Hades");
    }

    #[test]
    fn test_append_allows_duplicate_names() {
        let mut catalog = Catalog::new();
        catalog.append_game(sample_game("Celeste"));
        catalog.append_game(sample_game("Celeste"));
        assert_eq!(catalog.games().len(), 2);
    }

    #[test]
    fn test_clear_suggestions_always_empties() {
        let mut catalog = Catalog::new();
        catalog.clear_suggestions();
        assert!(catalog.suggestions().is_empty());

        catalog.set_suggestions(vec!["Celeste".to_string(), "Celeste 64".to_string()]);
        catalog.clear_suggestions();
        assert!(catalog.suggestions().is_empty());
    }

    #[test]
    fn test_later_applied_suggestions_win() {
        // Two overlapping fetches are applied in the order their
        // responses arrive, so the later arrival owns the list even if
        // it was issued first.
        let mut catalog = Catalog::new();
        catalog.set_suggestions(vec!["Celeste".to_string()]);
        catalog.set_suggestions(vec!["Cel".to_string(), "Celeste".to_string()]);

        assert_eq!(catalog.suggestions(), ["Cel", "Celeste"]);
    }

    #[test]
    fn test_best_price_skips_sentinels() {
        let mut game = sample_game("Celeste");
        game.prices.insert("steam".to_string(), 19.99);
        game.prices.insert("gog".to_string(), 14.99);
        game.prices.insert("epic".to_string(), -1.0);

        assert_eq!(game.best_price(), Some(14.99));
    }

    #[test]
    fn test_best_price_none_when_all_sentinels() {
        let mut game = sample_game("Celeste");
        game.prices.insert("steam".to_string(), -1.0);
        assert_eq!(game.best_price(), None);
    }

    #[test]
    fn test_platform_label_for_both_shapes() {
        let bare = Platform::Name("Switch".to_string());
        assert_eq!(bare.label(), "Switch");

        let mut fields = HashMap::new();
        fields.insert(
            "name".to_string(),
            serde_json::Value::String("PC".to_string()),
        );
        let tagged = Platform::Entry(fields);
        assert_eq!(tagged.label(), "PC");
    }

    #[test]
    fn test_sentinel_helpers() {
        let mut game = sample_game("Celeste");
        assert!(game.has_score());
        assert!(game.has_time_to_beat());

        game.opencritic = -1;
        game.time_to_beat = -1.0;
        assert!(!game.has_score());
        assert!(!game.has_time_to_beat());
    }
}
