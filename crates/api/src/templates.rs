//! HTML template rendering.
//!
//! Templates are read from disk on every render, so edits to the files show
//! up on the next request without a restart.

use std::path::PathBuf;

use axum::response::Html;
use gamecoll_core::collection::contains_id;
use gamecoll_core::types::DbId;
use minijinja::{Environment, Value};
use serde::Serialize;

/// Name under which [`on_game_system`] is registered with the template engine.
pub const ON_GAME_SYSTEM: &str = "on_game_system";

/// Renders named template files from a directory.
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load `name` (relative to the template directory) and render it with `context`.
    ///
    /// Fails when the file is missing, does not parse, or errors while rendering.
    pub fn render<S: Serialize>(
        &self,
        name: &str,
        context: &S,
    ) -> Result<Html<String>, minijinja::Error> {
        let env = self.environment();
        let template = env.get_template(name)?;
        Ok(Html(template.render(context)?))
    }

    fn environment(&self) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(&self.dir));
        env.add_function(ON_GAME_SYSTEM, on_game_system);
        env
    }
}

/// Template helper: whether `system_id` is among `systems`.
///
/// `systems` is a game's attached-systems collection; entries without an
/// integer `id` attribute never match.
pub fn on_game_system(systems: Vec<Value>, system_id: DbId) -> bool {
    let ids = systems
        .iter()
        .filter_map(|system| system.get_attr("id").ok())
        .filter_map(|id| DbId::try_from(id).ok());
    contains_id(ids, system_id)
}
