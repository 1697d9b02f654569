//! Route definitions for game systems.

use axum::routing::post;
use axum::Router;

use crate::handlers::game_system;
use crate::state::AppState;

/// ```text
/// POST /gamesystem -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/gamesystem", post(game_system::create))
}
