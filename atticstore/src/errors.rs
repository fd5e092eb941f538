use thiserror::Error;

/// Erreurs du backend de catalogue.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("object {0} not found")]
    ObjectNotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
