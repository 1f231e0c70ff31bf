use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(author, version, about = "Game-library catalog client - GUI-first application", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the catalog service base URL
    #[arg(long, global = true)]
    pub service_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every game in the catalog
    List,

    /// Show autocomplete suggestions for a keyword
    Search {
        /// Keyword to look up
        keyword: String,
    },

    /// Add a game to the catalog by name
    Add {
        /// Name of the game to add
        name: String,
    },

    /// Show status and configuration
    Status,

    /// Launch the GUI
    Gui,
}
