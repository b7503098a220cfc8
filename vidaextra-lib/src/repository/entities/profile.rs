use std::str::FromStr;

use crate::{
    Error, Result,
    repository::{db::models::ProfileModel, entities::Goal},
};

/// Identity shared by every profile. An installation holds at most one.
pub const PROFILE_KEY: u64 = 1;

/// The user's profile and both activity counters.
///
/// Updates are always whole-record: clone, change a field, and hand the copy back to
/// [`crate::Repository::upsert`].
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    key: u64,
    pub name: String,
    pub age: i32,
    pub price_per_pack: f64,
    pub units_per_pack: i32,
    pub consumed_count: u32,
    pub avoided_count: u32,
    pub goal: Goal,
}

impl Profile {
    /// A fresh profile with both counters at zero
    pub fn new(name: &str, age: i32, price_per_pack: f64, units_per_pack: i32, goal: Goal) -> Self {
        Self {
            key: PROFILE_KEY,
            name: name.to_string(),
            age,
            price_per_pack,
            units_per_pack,
            consumed_count: 0,
            avoided_count: 0,
            goal,
        }
    }

    pub fn key(&self) -> u64 {
        self.key
    }

    /// The counter the current [`Goal`] works with
    pub fn active_count(&self) -> u32 {
        match self.goal {
            Goal::Tracking => self.consumed_count,
            Goal::Quitting => self.avoided_count,
        }
    }

    /// Copy of this profile with the active counter replaced
    pub fn with_active_count(&self, count: u32) -> Self {
        let mut next = self.clone();
        match self.goal {
            Goal::Tracking => next.consumed_count = count,
            Goal::Quitting => next.avoided_count = count,
        }
        next
    }
}

impl From<&Profile> for ProfileModel {
    fn from(profile: &Profile) -> Self {
        Self {
            db_id: None,
            key: profile.key,
            name: profile.name.clone(),
            age: profile.age.into(),
            price_per_pack: profile.price_per_pack,
            units_per_pack: profile.units_per_pack.into(),
            consumed_count: profile.consumed_count.into(),
            avoided_count: profile.avoided_count.into(),
            goal: profile.goal.to_string(),
        }
    }
}

impl TryFrom<ProfileModel> for Profile {
    type Error = Error;

    fn try_from(model: ProfileModel) -> Result<Self> {
        fn narrow<T: TryFrom<U>, U: Copy + std::fmt::Display>(field: &str, value: U) -> Result<T> {
            T::try_from(value)
                .map_err(|_| Error::MalformedProfile(format!("{field} {value} is out of range")))
        }

        Ok(Self {
            key: model.key,
            age: narrow("age", model.age)?,
            price_per_pack: model.price_per_pack,
            units_per_pack: narrow("units_per_pack", model.units_per_pack)?,
            consumed_count: narrow("consumed_count", model.consumed_count)?,
            avoided_count: narrow("avoided_count", model.avoided_count)?,
            goal: Goal::from_str(&model.goal)
                .map_err(|_| Error::MalformedProfile(format!("unknown goal {:?}", model.goal)))?,
            name: model.name,
        })
    }
}
