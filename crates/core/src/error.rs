use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A path or form value could not be coerced to the expected type.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
