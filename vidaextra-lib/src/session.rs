//! Which screen to show and what the user's buttons do to the stored profile.

use crate::repository::{Goal, Profile};

/// The two states a user interface can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Nothing stored yet, collect the user's data
    #[default]
    NoProfile,
    /// Show the dashboard for this goal
    HasProfile(Goal),
}

impl Route {
    pub fn of(profile: Option<&Profile>) -> Self {
        profile.map_or(Route::NoProfile, |p| Route::HasProfile(p.goal))
    }
}

/// Buttons on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    /// One more cigarette smoked or avoided
    AddUnit,
    /// A whole pack smoked or avoided
    AddPack,
    /// Forget the profile and start over
    Reset,
}

/// A write for the [`crate::Repository`] to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Upsert(Profile),
    Delete(Profile),
}

impl UserAction {
    /// Turn this action on `profile` into the write that performs it. Counters saturate instead of
    /// overflowing, and a pack of zero or fewer units adds nothing.
    pub fn apply(self, profile: &Profile) -> Command {
        let count = profile.active_count();

        match self {
            UserAction::AddUnit => Command::Upsert(profile.with_active_count(count.saturating_add(1))),
            UserAction::AddPack => {
                let pack = u32::try_from(profile.units_per_pack).unwrap_or(0);
                Command::Upsert(profile.with_active_count(count.saturating_add(pack)))
            }
            UserAction::Reset => Command::Delete(profile.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        Repository, format,
        repository::{Goal, Profile},
        session::{Command, Route, UserAction},
        stats::Stats,
    };

    #[test]
    fn test_route() {
        let profile = Profile::new("Ana", 30, 5.0, 20, Goal::Quitting);

        assert_eq!(Route::default(), Route::NoProfile);
        assert_eq!(Route::of(None), Route::NoProfile);
        assert_eq!(Route::of(Some(&profile)), Route::HasProfile(Goal::Quitting));
    }

    #[test]
    fn test_actions_touch_only_the_active_counter() {
        let mut profile = Profile::new("Ana", 30, 5.0, 20, Goal::Tracking);
        profile.avoided_count = 9;

        let Command::Upsert(next) = UserAction::AddPack.apply(&profile) else {
            panic!("adding a pack should upsert");
        };

        assert_eq!(next.consumed_count, 20);
        assert_eq!(next.avoided_count, 9);
        assert_eq!(
            UserAction::Reset.apply(&profile),
            Command::Delete(profile.clone())
        );
    }

    #[test]
    fn test_counters_saturate() {
        let profile = Profile::new("Ana", 30, 5.0, 20, Goal::Quitting).with_active_count(u32::MAX);

        assert_eq!(
            UserAction::AddUnit.apply(&profile),
            Command::Upsert(profile.clone())
        );
    }

    #[test]
    fn test_negative_pack_size_adds_nothing() {
        let profile = Profile::new("Ana", 30, 5.0, -20, Goal::Tracking).with_active_count(5);

        assert_eq!(
            UserAction::AddPack.apply(&profile),
            Command::Upsert(profile.clone())
        );
    }

    #[test]
    fn test_tracking_twenty_cigarettes() {
        let repo = Repository::mock();
        repo.upsert(&Profile::new("Ana", 30, 5.00, 20, Goal::Tracking))
            .unwrap();

        for _ in 0..20 {
            repo.apply(UserAction::AddUnit).unwrap();
        }

        let profile = repo.profile().unwrap().unwrap();
        let stats = Stats::new(&profile);

        assert_eq!(profile.consumed_count, 20);
        assert!((stats.money() - 5.00).abs() < 1e-9);
        assert_eq!(stats.full_packs(), 1);
        assert_eq!(stats.remainder(), 0);
        assert_eq!(stats.time_minutes(), 520.0);
        assert_eq!(format::time(stats.time_minutes()), "8.7 h");
    }

    #[test]
    fn test_zero_pack_size_end_to_end() {
        let repo = Repository::mock();
        repo.upsert(&Profile::new("Ana", 30, 5.00, 0, Goal::Quitting))
            .unwrap();

        repo.apply(UserAction::AddUnit).unwrap();
        repo.apply(UserAction::AddPack).unwrap();
        repo.apply(UserAction::AddUnit).unwrap();

        let profile = repo.profile().unwrap().unwrap();
        let stats = Stats::new(&profile);

        assert_eq!(profile.avoided_count, 2);
        assert_eq!(stats.unit_price(), 0.0);
        assert_eq!(stats.full_packs(), 0);
        assert_eq!(stats.remainder(), 0);
    }

    #[test]
    fn test_reset_returns_to_no_profile() {
        let repo = Repository::mock();
        repo.upsert(&Profile::new("Ana", 30, 5.00, 20, Goal::Tracking))
            .unwrap();
        assert_eq!(
            Route::of(repo.profile().unwrap().as_ref()),
            Route::HasProfile(Goal::Tracking)
        );

        repo.apply(UserAction::Reset).unwrap();

        assert_eq!(Route::of(repo.profile().unwrap().as_ref()), Route::NoProfile);
    }
}
