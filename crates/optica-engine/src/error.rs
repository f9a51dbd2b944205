//! # Engine Error Types
//!
//! Service-layer errors for optica-engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CoreError / ValidationError (optica-core)                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  EngineError (this module) ← adds store lookup failures             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Dashboard displays a user-facing message                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use optica_core::{CoreError, ValidationError};

/// Settlement service errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Entity not found in a collaborator store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Domain rule failure from optica-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(err.into())
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::not_found("Order", "o-1");
        assert_eq!(err.to_string(), "Order not found: o-1");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = CoreError::Validation(ValidationError::Required {
            field: "quantity".to_string(),
        });
        let err: EngineError = core.into();
        assert_eq!(err.to_string(), "validation error: quantity is required");
    }
}
