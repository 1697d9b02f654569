pub mod game;
pub mod game_system;
pub mod health;
pub mod list;

use axum::Router;

use crate::state::AppState;

/// Build the HTML page route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 list games and systems (GET)
/// /game                             create game (POST)
/// /game/{id}                        show game (GET)
/// /game/edit/{id}                   edit form (GET), save edit (POST)
/// /game/delete/{id}                 delete game (GET, POST)
/// /gamesystem                       create game system (POST)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(list::router())
        .merge(game::router())
        .merge(game_system::router())
}
