use clap::{Parser, Subcommand};

use crate::routes::Route;

#[derive(Debug, Parser)]
#[command(name = "viajagenda")]
#[command(about = "Terminal UI for planning trip activities on viagens-api")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a real viagens-api server
    Run {
        /// Screen to open first, e.g. /agenda, /atividades, /atividades/add, /atividades/3
        #[arg(long, default_value = "/agenda")]
        route: Route,
        /// Override the API base URL from the config file
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run in dev mode with local in-memory data
    Dev {
        #[arg(long, default_value = "/agenda")]
        route: Route,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}
