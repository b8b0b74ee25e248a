//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur during random access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Position is outside the collection bounds.
    #[error("position is outside the collection bounds")]
    OutOfRange,
}

/// Errors that can occur during uniform random choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// The collection has no cards to choose from.
    #[error("the collection has no cards to choose from")]
    Empty,
}
