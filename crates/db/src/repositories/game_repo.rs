//! Repository for the `games` table and its `game_game_systems` join table.

use gamecoll_core::types::DbId;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::game::{CreateGame, Game, GameWithSystems, UpdateGame};
use crate::repositories::GameSystemRepo;
use crate::NOW;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, played, finished, started_at, finished_at, \
                       created_at, updated_at, deleted_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game and attach it to `system_ids`, returning the created row.
    ///
    /// The insert and the associations are written in one transaction.
    pub async fn create(pool: &SqlitePool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO games (name, played, finished, started_at, finished_at) \
             VALUES (?1, ?2, ?3, \
                     CASE WHEN ?2 THEN {NOW} END, \
                     CASE WHEN ?3 THEN {NOW} END) \
             RETURNING {COLUMNS}"
        );
        let game = sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.played)
            .bind(input.finished)
            .fetch_one(&mut *tx)
            .await?;

        attach_systems(&mut tx, game.id, &input.system_ids).await?;

        tx.commit().await?;
        Ok(game)
    }

    /// Find a game by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = ?1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a game by its ID and eager-load the systems it runs on.
    pub async fn find_by_id_with_systems(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<GameWithSystems>, sqlx::Error> {
        let Some(game) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let systems = GameSystemRepo::list_for_game(pool, id).await?;
        Ok(Some(GameWithSystems { game, systems }))
    }

    /// List all games in insertion order. Excludes soft-deleted rows.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE deleted_at IS NULL ORDER BY id");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Overwrite a game's fields and replace its system associations.
    ///
    /// `started_at` / `finished_at` keep their first stamp while the flag
    /// stays set and are cleared when it is unset.
    ///
    /// Returns `None` if no row with the given `id` exists; nothing is written
    /// in that case.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE games SET \
                name = ?2, \
                played = ?3, \
                finished = ?4, \
                started_at = CASE WHEN ?3 THEN COALESCE(started_at, {NOW}) END, \
                finished_at = CASE WHEN ?4 THEN COALESCE(finished_at, {NOW}) END, \
                updated_at = {NOW} \
             WHERE id = ?1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        let Some(game) = sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.played)
            .bind(input.finished)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM game_game_systems WHERE game_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        attach_systems(&mut tx, id, &input.system_ids).await?;

        tx.commit().await?;
        Ok(Some(game))
    }

    /// Soft-delete a game by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE games SET deleted_at = {NOW}, updated_at = {NOW} \
             WHERE id = ?1 AND deleted_at IS NULL"
        );
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a game by ID. Returns `true` if a row was removed.
    ///
    /// Join rows go with it through `ON DELETE CASCADE`.
    pub async fn hard_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Link a game to each of `system_ids`. Duplicate ids are ignored.
async fn attach_systems(
    conn: &mut SqliteConnection,
    game_id: DbId,
    system_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for system_id in system_ids {
        sqlx::query(
            "INSERT OR IGNORE INTO game_game_systems (game_id, game_system_id) VALUES (?1, ?2)",
        )
        .bind(game_id)
        .bind(*system_id)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}
