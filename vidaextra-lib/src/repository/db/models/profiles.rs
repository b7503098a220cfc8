use agdb::{DbElement, DbId};

/// Stored form of the profile. Integers are widened to the types agdb stores natively and the
/// goal is kept as its string form; [`crate::repository::Profile`] narrows them back on load.
#[derive(Debug, Clone, DbElement, PartialEq, PartialOrd)]
pub(crate) struct ProfileModel {
    pub(crate) db_id: Option<DbId>,
    /// Fixed identity of the one profile an installation can hold
    pub(crate) key: u64,
    pub(crate) name: String,
    pub(crate) age: i64,
    pub(crate) price_per_pack: f64,
    pub(crate) units_per_pack: i64,
    pub(crate) consumed_count: u64,
    pub(crate) avoided_count: u64,
    pub(crate) goal: String,
}
