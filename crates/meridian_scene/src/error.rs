//! # Scene Error Types
//!
//! All errors that can occur in the storage/identity core.
//!
//! There is exactly one fatal condition: running out of component type
//! indices for a scene tag. Everything else is a caller contract violation
//! (indexing a dead entity, reading a slot whose mask bit is unset) and is
//! deliberately unchecked on the default path.

use thiserror::Error;

/// Errors that can occur in the scene storage core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A new component type registration would exceed the scene tag's
    /// configured maximum.
    ///
    /// This is unrecoverable within the running process: indices are never
    /// reclaimed, so resolution requires recompiling with a larger
    /// `MAX_COMPONENT_TYPES`.
    #[error("component limit reached: cannot register {type_name}, domain allows {max} component types")]
    ComponentLimitReached {
        /// The component type whose registration failed.
        type_name: &'static str,
        /// The domain's configured maximum.
        max: usize,
    },

    /// A component operation was routed through the scene for a type with no
    /// registered store.
    #[error("no component store registered for {type_name}")]
    StoreNotRegistered {
        /// The component type that has no store.
        type_name: &'static str,
    },
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
