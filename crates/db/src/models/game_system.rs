//! Game system (console/platform) entity model and DTOs.

use gamecoll_core::collection::Named;
use gamecoll_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `game_systems` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSystem {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Named for GameSystem {
    fn name(&self) -> &str {
        &self.name
    }
}

/// DTO for creating a new game system.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGameSystem {
    pub name: String,
}
