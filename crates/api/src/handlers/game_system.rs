//! Handlers for game systems.

use axum::extract::State;
use axum::response::Html;
use gamecoll_db::models::game_system::CreateGameSystem;
use gamecoll_db::repositories::GameSystemRepo;

use crate::error::AppResult;
use crate::extract::FormBody;
use crate::handlers::list::render_list;
use crate::state::AppState;

/// POST /gamesystem
///
/// Form field: `name`. Re-renders the list page on success.
pub async fn create(
    State(state): State<AppState>,
    FormBody(form): FormBody,
) -> AppResult<Html<String>> {
    let input = CreateGameSystem {
        name: form.text("name").to_string(),
    };
    let system = GameSystemRepo::create(&state.pool, &input).await?;
    tracing::info!(game_system_id = system.id, name = %system.name, "Game system created");

    render_list(&state).await
}
