// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use marquee_config::ConfigManager;
use marquee_core::MovieId;
use marquee_tui::{App, Msg, TuiApp};

mod logging;
mod services;

fn build_cli() -> Command {
    Command::new("marquee")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Search movies, browse trending searches and read movie details")
        .subcommand(
            Command::new("movie")
                .about("Open directly on one movie's details")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_name("MOVIE_ID")
                        .help("Catalog ID of the movie")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

/// Movie to open on start, if any
fn start_movie(matches: &ArgMatches) -> Option<MovieId> {
    match matches.subcommand() {
        Some(("movie", sub_matches)) => sub_matches.get_one::<u64>("id").copied().map(MovieId),
        _ => None,
    }
}

/// Describes which config file, if any, the settings were read from
fn config_source(manager: &ConfigManager) -> String {
    let path = manager.config_path();
    if manager.has_config_file() {
        format!("Configuration read from {}", path.display())
    } else {
        format!(
            "No config file at {}, using defaults and environment",
            path.display()
        )
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let matches = build_cli().get_matches();

    let manager = ConfigManager::new().context("Failed to locate the config directory")?;
    let config = manager
        .load_with_env_overrides()
        .context("Invalid configuration")?;
    config
        .require_catalog_token()
        .context("Set MARQUEE_TMDB_API_TOKEN (or TMDB_API_KEY) in the environment or .env")?;

    let log_path = logging::log_path(&config.app, ConfigManager::default_log_path().ok());
    if let Some(path) = &log_path {
        logging::init(config.app.log_level.to_level_filter(), path)?;
    }
    // Logging starts after the config is read, so report where it came from
    log::info!("Starting marquee {}", env!("CARGO_PKG_VERSION"));
    log::info!("{}", config_source(&manager));

    let services = services::Services::from_config(&config)?;
    let state = services.initial_state(&config);
    let mut app = App::new(
        state,
        services.catalog,
        services.trending,
        (&config).into(),
    );
    if let Some(id) = start_movie(&matches) {
        app.dispatch(Msg::OpenMovie(id));
    }

    let mut tui = TuiApp::new().context("Failed to initialise the terminal")?;
    tui.run(&mut app).await.context("Terminal UI failed")?;

    log::info!("Exiting");
    Ok(())
}
