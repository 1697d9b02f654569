//! Route definitions for games.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// ```text
/// POST      /game               -> create
/// GET       /game/{id}          -> show
/// GET       /game/edit/{id}     -> edit_form
/// POST      /game/edit/{id}     -> update
/// GET, POST /game/delete/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/game", post(game::create))
        .route("/game/{id}", get(game::show))
        .route("/game/edit/{id}", get(game::edit_form).post(game::update))
        .route("/game/delete/{id}", get(game::delete).post(game::delete))
}
