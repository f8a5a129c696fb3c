//! Error types for the decal engine.

use crate::types::ComponentId;
use thiserror::Error;

/// Top-level error type for the decal engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecalError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors while mapping a gesture into container space.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Invalid coordinate context: {reason}")]
    InvalidContext { reason: String },
}

impl GeometryError {
    /// Create an invalid-context error.
    pub fn invalid_context(reason: impl Into<String>) -> Self {
        Self::InvalidContext { reason: reason.into() }
    }
}

/// Errors raised by the placement store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown component: {id}")]
    UnknownComponent { id: ComponentId },

    #[error("Component {id} has no recolorable content")]
    NotRecolorable { id: ComponentId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::UnknownComponent { id: ComponentId(7) };
        assert_eq!(err.to_string(), "Unknown component: #7");

        let err = StoreError::NotRecolorable { id: ComponentId(2) };
        assert_eq!(err.to_string(), "Component #2 has no recolorable content");

        let err = GeometryError::invalid_context("no viewport");
        assert_eq!(err.to_string(), "Invalid coordinate context: no viewport");
    }

    #[test]
    fn test_umbrella_is_transparent() {
        let err: DecalError = StoreError::UnknownComponent { id: ComponentId(3) }.into();
        assert_eq!(err.to_string(), "Unknown component: #3");
        assert!(matches!(err, DecalError::Store(_)));
    }
}
