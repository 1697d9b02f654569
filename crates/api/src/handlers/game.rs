//! Handlers for games.

use axum::extract::State;
use axum::response::{Html, Redirect};
use gamecoll_core::collection::sort_by_name;
use gamecoll_core::error::CoreError;
use gamecoll_core::types::DbId;
use gamecoll_db::models::game::{CreateGame, GameWithSystems, UpdateGame};
use gamecoll_db::models::game_system::GameSystem;
use gamecoll_db::repositories::{GameRepo, GameSystemRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{FormBody, IdPath};
use crate::handlers::list::render_list;
use crate::state::AppState;

pub const SHOW_TEMPLATE: &str = "game/show.html";
pub const EDIT_TEMPLATE: &str = "game/edit.html";

/// Context for the detail page.
#[derive(Serialize)]
struct ShowView {
    game: GameWithSystems,
}

/// Context for the edit form. `game_systems` lists every system so the form
/// can offer one checkbox each.
#[derive(Serialize)]
struct EditView {
    game: GameWithSystems,
    game_systems: Vec<GameSystem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /game
///
/// Form fields: `name`, `system` (repeatable), `played`, `finished`.
/// Re-renders the list page on success.
pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody,
) -> AppResult<Html<String>> {
    let system_ids = form.ids("system")?;
    ensure_systems_exist(&state, &system_ids).await?;

    let input = CreateGame {
        name: form.text("name").to_string(),
        played: form.checkbox("played"),
        finished: form.checkbox("finished"),
        system_ids,
    };
    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(game_id = game.id, name = %game.name, "Game created");

    render_list(&state).await
}

/// GET /game/{id}
pub async fn show(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Html<String>> {
    let game = find_game(&state, id).await?;

    Ok(state.templates.render(SHOW_TEMPLATE, &ShowView { game })?)
}

/// GET /game/edit/{id}
///
/// Edit form with one checkbox per system, pre-checked for the systems the
/// game is already attached to.
pub async fn edit_form(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Html<String>> {
    let game = find_game(&state, id).await?;

    let mut game_systems = GameSystemRepo::list(&state.pool).await?;
    sort_by_name(&mut game_systems);

    Ok(state
        .templates
        .render(EDIT_TEMPLATE, &EditView { game, game_systems })?)
}

/// POST /game/edit/{id}
///
/// Form fields: `name`, `system` (repeatable), `played`, `finished`.
/// Overwrites the game, replaces its systems with the checked ones and
/// redirects back to the edit form.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FormBody(form): FormBody,
) -> AppResult<Redirect> {
    let system_ids = form.ids("system")?;
    ensure_systems_exist(&state, &system_ids).await?;

    let input = UpdateGame {
        name: form.text("name").to_string(),
        played: form.checkbox("played"),
        finished: form.checkbox("finished"),
        system_ids,
    };
    let game = GameRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    tracing::info!(game_id = game.id, name = %game.name, "Game updated");

    Ok(Redirect::to(&format!("/game/edit/{id}")))
}

/// GET|POST /game/delete/{id}
///
/// Permanently deletes the game and re-renders the list page. Deleting an
/// id that does not exist is not an error.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Html<String>> {
    if GameRepo::hard_delete(&state.pool, id).await? {
        tracing::info!(game_id = id, "Game deleted");
    } else {
        tracing::debug!(game_id = id, "Delete of missing game ignored");
    }

    render_list(&state).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a game with its systems (ordered by name), or fail with `NotFound`.
async fn find_game(state: &AppState, id: DbId) -> AppResult<GameWithSystems> {
    let mut game = GameRepo::find_by_id_with_systems(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))?;
    sort_by_name(&mut game.systems);
    Ok(game)
}

/// Fail with `NotFound` for the first id that is not a live game system.
async fn ensure_systems_exist(state: &AppState, system_ids: &[DbId]) -> AppResult<()> {
    for &id in system_ids {
        GameSystemRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "GameSystem",
                id,
            }))?;
    }
    Ok(())
}
