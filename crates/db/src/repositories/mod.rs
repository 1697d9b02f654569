//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod game_repo;
pub mod game_system_repo;

pub use game_repo::GameRepo;
pub use game_system_repo::GameSystemRepo;
