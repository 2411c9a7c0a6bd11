use crate::config::{Cli, Configuration};
use crate::db::{init_db, Database};
use crate::state::AppState;
use astra::Server;
use clap::Parser;

mod api;
mod auth;
mod config;
mod db;
mod domain;
mod errors;
mod hospitable;
mod logging;
mod request;
mod responses;
mod router;
mod search;
mod site;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cli = Cli::parse();
    let config = match Configuration::load(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    logging::init();

    let db = Database::new(config.database_path());
    if let Err(e) = init_db(&db) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let state = match AppState::new(db, &config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, workers = config.max_workers(), "starting server");

    let server = Server::bind(&addr).max_workers(config.max_workers());
    let result = server.serve(move |req, _info| router::serve(req, &state));

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down cleanly");
}
