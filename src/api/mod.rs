//! Catalog service API client.
//!
//! The service exposes three GET endpoints: the collection root (full
//! catalog as a JSON array), `/autocomplete?key=` (candidate names for a
//! typed keyword) and `/addgame?name=` (resolves a name against its
//! metadata sources and returns one fully populated record). Responses
//! use snake_case keys; [`RawGame`] is that wire shape and every record
//! passes through one explicit mapping into [`Game`] at this boundary,
//! so schema drift between service revisions stays contained here.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;

use crate::catalog::{Game, Platform};
use crate::{Error, Result};

const USER_AGENT: &str = concat!("gamedex/", env!("CARGO_PKG_VERSION"));

// Sentinels the service emits when a metadata source had no match.
fn missing_hours() -> f64 {
    -1.0
}

fn missing_score() -> i32 {
    -1
}

/// One game record as it appears on the wire.
///
/// Every field is defaulted: a record missing a key (older service
/// revisions) degrades to an empty value instead of failing the whole
/// catalog load.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGame {
    #[serde(default)]
    name: String,
    #[serde(default)]
    genre: Vec<String>,
    #[serde(default)]
    developer: Vec<String>,
    #[serde(default)]
    publisher: Vec<String>,
    #[serde(default)]
    series: String,
    #[serde(default)]
    series_games: Vec<String>,
    #[serde(default)]
    related: Vec<String>,
    #[serde(default)]
    prices: HashMap<String, f64>,
    #[serde(default)]
    platforms: Vec<Platform>,
    #[serde(default = "missing_hours")]
    time_to_beat: f64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    cover_art: String,
    #[serde(default = "missing_score")]
    opencritic: i32,
}

impl From<RawGame> for Game {
    fn from(raw: RawGame) -> Self {
        Game {
            name: raw.name,
            genre: raw.genre,
            developer: raw.developer,
            publisher: raw.publisher,
            series: raw.series,
            series_games: raw.series_games,
            related: raw.related,
            prices: raw.prices,
            platforms: raw.platforms,
            time_to_beat: raw.time_to_beat,
            url: raw.url,
            cover_art: raw.cover_art,
            opencritic: raw.opencritic,
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full game collection.
    pub async fn fetch_catalog(&self) -> Result<Vec<Game>> {
        log::info!("Fetching catalog from {}", self.base_url);

        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Failed to fetch catalog: {} - {}",
                status, error_text
            )));
        }

        let records: Vec<RawGame> = response.json().await?;

        log::debug!("Catalog returned {} record(s)", records.len());

        Ok(records.into_iter().map(Game::from).collect())
    }

    /// Fetch autocomplete candidates for a typed keyword.
    pub async fn autocomplete(&self, keyword: &str) -> Result<Vec<String>> {
        log::debug!("Requesting suggestions for '{}'", keyword);

        let response = self
            .client
            .get(format!("{}/autocomplete", self.base_url))
            .query(&[("key", keyword)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Failed to fetch suggestions: {} - {}",
                status, error_text
            )));
        }

        let suggestions: Vec<String> = response.json().await?;

        log::debug!("Received {} suggestion(s)", suggestions.len());

        Ok(suggestions)
    }

    /// Ask the service to resolve a name and return the new record.
    pub async fn add_game(&self, name: &str) -> Result<Game> {
        log::info!("Adding game: {}", name);

        let response = self
            .client
            .get(format!("{}/addgame", self.base_url))
            .query(&[("name", name)])
            .send()
            .await?;

        // The service answers 404 when its metadata lookup has no match
        // for the requested name.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::GameNotFound(name.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Failed to add game: {} - {}",
                status, error_text
            )));
        }

        let record: RawGame = response.json().await?;
        let game = Game::from(record);

        log::info!("Service resolved '{}' as '{}'", name, game.name);

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new("http://localhost:8080");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_raw_game_deserialization() {
        let json = r#"{
            "name": "Celeste",
            "genre": ["Platformer", "Indie"],
            "developer": ["Maddy Makes Games"],
            "publisher": ["Maddy Makes Games"],
            "series": "",
            "series_games": [],
            "related": ["TowerFall"],
            "prices": {"steam": 4.99, "epic": -1},
            "platforms": ["PC", "Switch"],
            "time_to_beat": 8.0,
            "url": "https://store.steampowered.com/app/504230",
            "cover_art": "https://example.com/celeste.png",
            "opencritic": 88
        }"#;

        let raw: RawGame = serde_json::from_str(json).unwrap();
        let game = Game::from(raw);

        assert_eq!(game.name, "Celeste");
        assert_eq!(game.genre, ["Platformer", "Indie"]);
        assert_eq!(game.prices["steam"], 4.99);
        assert_eq!(game.prices["epic"], -1.0);
        assert_eq!(game.opencritic, 88);
        assert_eq!(game.time_to_beat, 8.0);
    }

    #[test]
    fn test_raw_game_missing_fields_default() {
        let raw: RawGame = serde_json::from_str(r#"{"name": "Hades"}"#).unwrap();
        let game = Game::from(raw);

        assert_eq!(game.name, "Hades");
        assert!(game.genre.is_empty());
        assert!(game.prices.is_empty());
        assert_eq!(game.time_to_beat, -1.0);
        assert_eq!(game.opencritic, -1);
    }

    #[test]
    fn test_platforms_accept_both_wire_shapes() {
        let json = r#"{
            "name": "Hollow Knight",
            "platforms": ["Switch", {"name": "PC", "store": "steam"}]
        }"#;

        let raw: RawGame = serde_json::from_str(json).unwrap();
        let game = Game::from(raw);

        assert_eq!(game.platforms.len(), 2);
        assert_eq!(game.platforms[0].label(), "Switch");
        assert_eq!(game.platforms[1].label(), "PC");
    }

    #[test]
    fn test_catalog_array_maps_one_to_one() {
        let json = r#"[
            {"name": "Celeste", "opencritic": 88},
            {"name": "Hades", "opencritic": 90},
            {"name": "Outer Wilds", "opencritic": 85}
        ]"#;

        let records: Vec<RawGame> = serde_json::from_str(json).unwrap();
        let games: Vec<Game> = records.into_iter().map(Game::from).collect();

        assert_eq!(games.len(), 3);
        assert_eq!(games[0].name, "Celeste");
        assert_eq!(games[2].opencritic, 85);
    }

    #[test]
    fn test_suggestions_deserialization() {
        let json = r#"["Celeste", "Celeste 64: Fragments of the Mountain"]"#;
        let suggestions: Vec<String> = serde_json::from_str(json).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], "Celeste");
    }
}
