//! Core of VidaExtra: the single-profile store, the statistics derived from it
//! and the small amount of session logic that sits between the store and a
//! user interface.

use std::path::PathBuf;

use thiserror::Error;

pub mod format;
pub mod fs;
pub mod onboarding;
pub mod repository;
pub mod session;
pub mod stats;

pub use repository::{Goal, Profile, ProfileFeed, Repository};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Internal database error {0}")]
    Internal(#[from] agdb::DbError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("The stored profile is malformed: {0}")]
    MalformedProfile(String),
    #[error("The database path is not valid UTF-8: {0:?}")]
    InvalidPath(PathBuf),
    #[error("The database was created by a newer version (model v{found}, supported v{supported})")]
    UnsupportedModelVersion { found: u64, supported: u64 },
}
