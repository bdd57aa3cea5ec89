//! Unified error types surfaced by the registry API.
//!
//! Storage failures never appear here once the registry is open: the store
//! adapter recovers from them locally. What remains is what a caller has to
//! show the user.
use registry_core::{EventId, ValidationError};
use thiserror::Error;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("event {0} not found")]
    NotFound(EventId),

    #[error("incorrect email or password")]
    Unauthorized,

    #[error("no event ids left after {0}")]
    IdsExhausted(EventId),

    #[error("failed to open registry storage")]
    Storage(#[source] StoreError),
}

impl RegistryError {
    /// True for errors caused by user input rather than registry state.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            RegistryError::Validation(_) | RegistryError::Unauthorized
        )
    }
}
