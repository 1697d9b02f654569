//! Game entity model and DTOs.

use gamecoll_core::collection::Named;
use gamecoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::game_system::GameSystem;

/// A row from the `games` table.
///
/// `started_at` / `finished_at` are stamped when the corresponding flag is
/// first set and cleared when the flag is unset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub played: bool,
    pub finished: bool,
    pub started_at: Option<Timestamp>,
    pub finished_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Named for Game {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A game together with the systems it runs on.
#[derive(Debug, Clone, Serialize)]
pub struct GameWithSystems {
    #[serde(flatten)]
    pub game: Game,
    pub systems: Vec<GameSystem>,
}

/// DTO for creating a new game. `system_ids` may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub name: String,
    pub played: bool,
    pub finished: bool,
    pub system_ids: Vec<DbId>,
}

/// DTO for a full update of an existing game.
///
/// Every field is written; `system_ids` replaces the current associations.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGame {
    pub name: String,
    pub played: bool,
    pub finished: bool,
    pub system_ids: Vec<DbId>,
}
