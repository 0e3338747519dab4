//! Seating Suggestion API 模块

mod handler;

pub use handler::SuggestionView;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/suggestions", get(handler::list))
}
