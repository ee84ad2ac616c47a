//! HTTP service exposing resume generation.

mod app;
mod error;
mod handlers;
mod state;

pub use app::run_server;
pub use state::AppState;

#[cfg(test)]
pub use app::create_router;
