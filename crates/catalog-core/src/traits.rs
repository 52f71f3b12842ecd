//! Core traits shared across layers.

use std::fmt::Display;

/// Trait for entities carrying a store-assigned identifier.
pub trait Entity {
    /// Identifier type.
    type Id: Copy + Display + Send + Sync;

    /// Snake-case resource name, used for cache keys and metric labels.
    const RESOURCE: &'static str;

    /// Human-readable type name, used in not-found errors.
    const NAME: &'static str;

    /// Returns the entity's identifier.
    fn id(&self) -> Self::Id;
}
