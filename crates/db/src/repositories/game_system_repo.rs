//! Repository for the `game_systems` table.

use gamecoll_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::game_system::{CreateGameSystem, GameSystem};
use crate::NOW;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at, deleted_at";

/// Same columns, qualified for joins against `game_game_systems`.
const JOINED_COLUMNS: &str = "s.id, s.name, s.created_at, s.updated_at, s.deleted_at";

/// Provides CRUD operations for game systems.
pub struct GameSystemRepo;

impl GameSystemRepo {
    /// Insert a new game system, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateGameSystem,
    ) -> Result<GameSystem, sqlx::Error> {
        let query = format!("INSERT INTO game_systems (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, GameSystem>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a game system by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<GameSystem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM game_systems WHERE id = ?1 AND deleted_at IS NULL");
        sqlx::query_as::<_, GameSystem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all game systems in insertion order. Excludes soft-deleted rows.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<GameSystem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_systems WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, GameSystem>(&query).fetch_all(pool).await
    }

    /// List the systems attached to a game. Excludes soft-deleted systems.
    pub async fn list_for_game(
        pool: &SqlitePool,
        game_id: DbId,
    ) -> Result<Vec<GameSystem>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM game_systems s \
             JOIN game_game_systems gs ON gs.game_system_id = s.id \
             WHERE gs.game_id = ?1 AND s.deleted_at IS NULL \
             ORDER BY s.id"
        );
        sqlx::query_as::<_, GameSystem>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a game system by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE game_systems SET deleted_at = {NOW}, updated_at = {NOW} \
             WHERE id = ?1 AND deleted_at IS NULL"
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a game system by ID. Returns `true` if a row was removed.
    ///
    /// Its links to games go with it through `ON DELETE CASCADE`; the games stay.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM game_systems WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
