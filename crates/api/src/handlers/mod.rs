//! Request handlers.
//!
//! Each submodule provides async handler functions for one entity type.
//! Handlers delegate to the corresponding repository in `gamecoll_db`,
//! render HTML through [`crate::templates::Templates`] and map errors via
//! [`crate::error::AppError`].

pub mod game;
pub mod game_system;
pub mod list;
