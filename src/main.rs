//! Tux Code Boot Camp · drill-sergeant programming trainer
//!
//! - Axum HTTP + WebSocket API (one boot camp session per socket)
//! - Optional remote code review (via environment variables)
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT                 : u16 (default 3000)
//!   ANTHROPIC_API_KEY    : enables code review if present
//!   ANTHROPIC_BASE_URL   : default "https://api.anthropic.com"
//!   GRADING_MODEL        : default "claude-sonnet-4-20250514"
//!   BOOTCAMP_CONFIG_PATH : path to TOML config (paths, motivation, grading, prompts)
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default) or "json"

// The built-in resource documents are large `json!` literals.
#![recursion_limit = "512"]

mod telemetry;
mod util;
mod error;
mod domain;
mod config;
mod seeds;
mod resources;
mod content;
mod persona;
mod progress;
mod challenge_file;
mod screen;
mod grading;
mod state;
mod session;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared, read-only application state (resources, content, file generator, grader).
  let state = match AppState::from_env() {
    Ok(s) => Arc::new(s),
    Err(e) => {
      error!(target: "tux_bootcamp", error = %e, "Startup failed");
      return Err(e.into());
    }
  };

  // Build the HTTP router with routes, CORS and tracing layers.
  let app = build_router(state.clone());

  // Read port from env or default to 3000.
  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "tux_bootcamp", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
