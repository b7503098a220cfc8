//! Domain values handed out by the [`crate::Repository`].
//!
//! Unlike the stored models these are plain values: reading one never touches the database and
//! changing one has no effect until it is passed back to [`crate::Repository::upsert`].

mod goal;
mod profile;

pub use goal::Goal;
pub use profile::{PROFILE_KEY, Profile};
