//! The collection list page, which several write handlers land back on.

use axum::extract::State;
use axum::response::Html;
use gamecoll_core::collection::sort_by_name;
use gamecoll_db::models::game::Game;
use gamecoll_db::models::game_system::GameSystem;
use gamecoll_db::repositories::{GameRepo, GameSystemRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

pub const LIST_TEMPLATE: &str = "game/list.html";

/// Context for the list page.
#[derive(Serialize)]
struct ListView {
    games: Vec<Game>,
    game_systems: Vec<GameSystem>,
}

/// GET /
///
/// List every game and game system, each ordered by name.
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_list(&state).await
}

/// Render the list page.
pub async fn render_list(state: &AppState) -> AppResult<Html<String>> {
    let mut games = GameRepo::list(&state.pool).await?;
    let mut game_systems = GameSystemRepo::list(&state.pool).await?;
    sort_by_name(&mut games);
    sort_by_name(&mut game_systems);

    Ok(state.templates.render(
        LIST_TEMPLATE,
        &ListView {
            games,
            game_systems,
        },
    )?)
}
