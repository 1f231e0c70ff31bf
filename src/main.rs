use clap::Parser;
use gamedex::{
    catalog::CatalogManager,
    cli::{Cli, Commands},
    config::Config,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let mut config = Config::load()?;
    log::debug!("Configuration loaded");

    if let Some(url) = cli.service_url {
        log::debug!("Overriding service URL: {}", url);
        config.service_url = url;
    }

    // Launch GUI by default if no command is specified
    match cli.command {
        None => run_gui(config),

        Some(command) => match command {
            Commands::List => {
                let manager = CatalogManager::new(&config)?;

                match manager.list_games().await {
                    Ok(games) if games.is_empty() => {
                        println!("Catalog is empty");
                    }
                    Ok(games) => {
                        println!("Catalog:");
                        println!("========");
                        for game in games {
                            println!("  {}", game.name);
                            if !game.genre.is_empty() {
                                println!("    Genres: {}", game.genre.join(", "));
                            }
                            if !game.developer.is_empty() {
                                println!("    Developer: {}", game.developer.join(", "));
                            }
                            if game.has_score() {
                                println!("    OpenCritic: {}", game.opencritic);
                            }
                            if game.has_time_to_beat() {
                                println!("    Time to beat: {:.1} h", game.time_to_beat);
                            }
                            if let Some(price) = game.best_price() {
                                println!("    Best price: ${:.2}", price);
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to fetch catalog: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            Commands::Search { keyword } => {
                let manager = CatalogManager::new(&config)?;

                match manager.suggestions(&keyword).await {
                    Ok(suggestions) if suggestions.is_empty() => {
                        println!("No matches for '{}'", keyword);
                    }
                    Ok(suggestions) => {
                        println!("Suggestions:");
                        println!("============");
                        for suggestion in suggestions {
                            println!("  {}", suggestion);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to fetch suggestions: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            Commands::Add { name } => {
                let manager = CatalogManager::new(&config)?;
                println!("Adding game: {}", name);

                match manager.add_game(&name).await {
                    Ok(game) => {
                        println!("✓ Added {}", game.name);
                        if !game.genre.is_empty() {
                            println!("  Genres: {}", game.genre.join(", "));
                        }
                        if game.has_score() {
                            println!("  OpenCritic: {}", game.opencritic);
                        }
                        if game.has_time_to_beat() {
                            println!("  Time to beat: {:.1} h", game.time_to_beat);
                        }
                    }
                    Err(e) => {
                        eprintln!("Failed to add game: {}", e);
                        std::process::exit(1);
                    }
                }
            }

            Commands::Status => {
                println!("Gamedex Status");
                println!("==============");
                println!();
                println!("Version: {}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("Configuration:");
                println!("  Service URL: {}", config.service_url);
                println!("  Log Level: {}", config.log_level);
                println!();

                if let Ok(config_path) = Config::config_path() {
                    println!("Config Path: {:?}", config_path);
                }
            }

            Commands::Gui => run_gui(config),
        },
    }

    Ok(())
}

fn run_gui(config: Config) {
    use gamedex::gui::CatalogApp;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gamedex"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Gamedex",
        native_options,
        Box::new(move |cc| Ok(Box::new(CatalogApp::new(cc, config)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }
}
