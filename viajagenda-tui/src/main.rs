mod agenda;
mod api;
mod app;
mod bootstrap;
mod cli;
mod config;
mod locale;
mod logging;
mod routes;
mod runtime;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use routes::Route;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ConfigPath => {
            let path = AppConfig::config_path()?;
            AppConfig::ensure_exists(&path)?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { route, api_url } => {
            let cfg = AppConfig::load()?;
            init_logging(&cfg)?;
            let api_url = cfg.resolve_api_url(api_url.as_deref());
            let client = ApiClient::new(&api_url)
                .with_context(|| format!("Cannot use API URL {api_url}"))?;
            tracing::info!(api_url = %client.base_url(), "starting");
            run_tui(&client, route).await
        }
        Commands::Dev { route } => {
            let cfg = AppConfig::load()?;
            init_logging(&cfg)?;
            let client = ApiClient::dev()?;
            tracing::info!("starting in dev mode with in-memory activities");
            run_tui(&client, route).await
        }
    }
}

fn init_logging(cfg: &AppConfig) -> Result<()> {
    let log_path = AppConfig::log_path()?;
    logging::init(&cfg.log_level, &log_path)
}

async fn run_tui(client: &ApiClient, route: Route) -> Result<()> {
    let mut app = App::new();
    bootstrap::initialize_app_state(&mut app, client, route).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "event loop failed");
    }
    res
}
