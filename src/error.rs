//! Error types for the wardrobe engine.
//!
//! The engine has no fatal error class: malformed persisted state is
//! recovered as "start empty" at load time, so the variants here cover
//! invalid user input, the one defended invariant (an outfit must have
//! a top and a bottom), and failures in the storage backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An upload or catalog insert arrived without an image handle.
    #[error("an uploaded image is required")]
    MissingImage,

    /// A category string did not name one of the four clothing slots.
    #[error("unknown clothing category: {0:?}")]
    UnknownCategory(String),

    /// The composer was asked to build an outfit without a resolvable
    /// top and bottom. The UI keeps save disabled while `can_save` is
    /// false, so reaching this is a defended invariant, not a normal
    /// user path.
    #[error("an outfit needs both a top and a bottom")]
    IncompleteOutfit,

    /// The key-value backend failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Serializing state for persistence failed. Deserialization
    /// failures never surface here; they degrade to empty state.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The on-disk store location could not be prepared.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
