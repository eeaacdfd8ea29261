use crate::app::App;
use crate::auth::{AuthGate, AuthState, StubAuthClient};
use crate::domain::ListingStore;
use crate::router::handle;
use crate::settings::AppConfig;
use anyhow::{Context, Result};
use astra::Server;
use std::net::SocketAddr;

mod app;
mod auth;
mod domain;
mod errors;
mod logging;
mod paths;
mod responses;
mod router;
mod settings;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = run() {
        tracing::error!("Startup failed: {e:#}");
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cfg = AppConfig::load()?;
    logging::setup_logging(&cfg.log_filter);

    // 1️⃣ Seed the listing store
    let store = ListingStore::seeded().context("Failed to seed listings")?;
    tracing::info!("Seeded {} listings", store.len());

    // 2️⃣ Follow the auth source; the gate starts out loading
    let auth_client = StubAuthClient::new(AuthState::loading());
    let gate = AuthGate::default();
    let _auth_subscription = gate.follow(&auth_client);
    auth_client.publish(AuthState::resolved(None));

    let app = App::new(store, gate, cfg.nights);

    // 3️⃣ Start the server
    let addr: SocketAddr = cfg
        .addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", cfg.addr))?;
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(cfg.max_workers);

    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!("request failed: {err}");
                } else {
                    tracing::debug!("request rejected: {err}");
                }
                responses::html_error_response(err)
            }
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
