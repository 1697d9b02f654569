//! Integration tests for soft-delete behaviour.
//!
//! Soft-deleted rows stay in storage but are hidden from every default read:
//! `find_by_id`, `list`, and the eager-loaded systems of a game.

mod common;

use gamecoll_db::models::game::CreateGame;
use gamecoll_db::models::game_system::CreateGameSystem;
use gamecoll_db::repositories::{GameRepo, GameSystemRepo};

fn new_game(name: &str, system_ids: Vec<i64>) -> CreateGame {
    CreateGame {
        name: name.to_string(),
        played: false,
        finished: false,
        system_ids,
    }
}

#[tokio::test]
async fn test_soft_deleted_game_is_hidden() {
    let pool = common::test_pool().await;
    let game = GameRepo::create(&pool, &new_game("Pong", vec![])).await.unwrap();

    assert!(GameRepo::soft_delete(&pool, game.id).await.unwrap());

    assert!(GameRepo::find_by_id(&pool, game.id).await.unwrap().is_none());
    assert!(GameRepo::list(&pool).await.unwrap().is_empty());

    // Still in storage.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games WHERE id = ?1")
        .bind(game.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_soft_delete_is_idempotent() {
    let pool = common::test_pool().await;
    let game = GameRepo::create(&pool, &new_game("Pong", vec![])).await.unwrap();

    assert!(GameRepo::soft_delete(&pool, game.id).await.unwrap());
    assert!(!GameRepo::soft_delete(&pool, game.id).await.unwrap());
}

#[tokio::test]
async fn test_soft_deleted_game_cannot_be_updated() {
    let pool = common::test_pool().await;
    let game = GameRepo::create(&pool, &new_game("Pong", vec![])).await.unwrap();
    GameRepo::soft_delete(&pool, game.id).await.unwrap();

    let result = GameRepo::update(
        &pool,
        game.id,
        &gamecoll_db::models::game::UpdateGame {
            name: "Pong 2".to_string(),
            played: true,
            finished: false,
            system_ids: vec![],
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_soft_deleted_system_is_hidden_from_game() {
    let pool = common::test_pool().await;
    let atari = GameSystemRepo::create(
        &pool,
        &CreateGameSystem {
            name: "Atari 2600".to_string(),
        },
    )
    .await
    .unwrap();
    let c64 = GameSystemRepo::create(
        &pool,
        &CreateGameSystem {
            name: "C64".to_string(),
        },
    )
    .await
    .unwrap();
    let game = GameRepo::create(&pool, &new_game("Pitfall", vec![atari.id, c64.id]))
        .await
        .unwrap();

    assert!(GameSystemRepo::soft_delete(&pool, atari.id).await.unwrap());

    assert!(GameSystemRepo::find_by_id(&pool, atari.id)
        .await
        .unwrap()
        .is_none());
    let systems = GameSystemRepo::list(&pool).await.unwrap();
    assert_eq!(systems.len(), 1);
    assert_eq!(systems[0].id, c64.id);

    let loaded = GameRepo::find_by_id_with_systems(&pool, game.id)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<i64> = loaded.systems.iter().map(|s| s.id).collect();
    assert_eq!(ids, [c64.id]);
}
