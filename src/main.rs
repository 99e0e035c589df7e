use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod domain;
mod errors;
mod handlers;
mod loader;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration, then logging (RUST_LOG wins over STAYS_LOG)
    let (config, config_errors) = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    AppConfig::report(&config_errors);

    let addr = config.bind_addr;
    let workers = config.max_workers;

    // 2️⃣ Application state and the default listings
    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    if let Err(e) = app.load_default_on_startup() {
        error!(error = %e, "startup load failed");
    }

    // 3️⃣ Start the server
    info!(%addr, workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
