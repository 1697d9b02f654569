//! Route definition for the list page.

use axum::routing::get;
use axum::Router;

use crate::handlers::list;
use crate::state::AppState;

/// ```text
/// GET / -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list::list))
}
