use crate::api::HttpPricingApi;
use crate::config::load_settings;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::{handle, AppContext};
use crate::session::SessionStore;
use astra::Server;
use std::net::SocketAddr;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod controller;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();

    // 1️⃣ Backend client
    let api = match HttpPricingApi::new(&settings.backend_url, settings.request_timeout()) {
        Ok(api) => api,
        Err(e) => {
            error!(backend = %settings.backend_url, error = %e, "backend client setup failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Per-browser form state
    let ctx = AppContext {
        api,
        sessions: SessionStore::new(settings.session_limits(), settings.scroll_delay()),
    };

    // 3️⃣ Start the server
    let addr: SocketAddr = match settings.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind_addr = %settings.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, backend = %settings.backend_url, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => {
            match &err {
                ServerError::Internal(msg) => error!(error = %msg, "request failed"),
                other => debug!(error = %other, "request rejected"),
            }
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
