//! Figures derived from a [`Profile`]. Nothing here is stored; everything is recomputed from the
//! current profile whenever it is displayed.

use getset::CopyGetters;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::repository::Profile;

/// Minutes of life lost per cigarette before the age term
const BASE_MINUTES_PER_UNIT: f64 = 11.0;
/// Extra minutes lost per cigarette for every year of age
const MINUTES_PER_UNIT_PER_YEAR: f64 = 0.5;

/// Price of a single cigarette. Zero when the pack size isn't positive.
pub fn unit_price(profile: &Profile) -> f64 {
    if profile.units_per_pack > 0 {
        profile.price_per_pack / f64::from(profile.units_per_pack)
    } else {
        0.0
    }
}

/// Minutes of life a single cigarette costs. The age isn't clamped.
pub fn minutes_lost_per_unit(profile: &Profile) -> f64 {
    BASE_MINUTES_PER_UNIT + f64::from(profile.age) * MINUTES_PER_UNIT_PER_YEAR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Toxin {
    #[strum(to_string = "Alquitrán")]
    Tar,
    #[strum(to_string = "Monóxido Carbono")]
    CarbonMonoxide,
    #[strum(to_string = "Nicotina")]
    Nicotine,
}

impl Toxin {
    pub fn milligrams_per_unit(&self) -> f64 {
        match self {
            Toxin::Tar | Toxin::CarbonMonoxide => 10.0,
            Toxin::Nicotine => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct ToxinLoad {
    toxin: Toxin,
    milligrams: f64,
}

/// Everything the dashboard shows for the counter the profile's goal works with.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Stats {
    count: u32,
    unit_price: f64,
    minutes_lost_per_unit: f64,
    /// Money spent (tracking) or saved (quitting)
    money: f64,
    /// Minutes of life lost (tracking) or won back (quitting)
    time_minutes: f64,
    full_packs: u32,
    remainder: u32,
}

impl Stats {
    pub fn new(profile: &Profile) -> Self {
        let count = profile.active_count();
        let unit_price = unit_price(profile);
        let minutes_lost_per_unit = minutes_lost_per_unit(profile);

        let (full_packs, remainder) = match u32::try_from(profile.units_per_pack) {
            Ok(units) if units > 0 => (
                count.checked_div(units).unwrap_or(0),
                count.checked_rem(units).unwrap_or(0),
            ),
            _ => (0, 0),
        };

        Self {
            count,
            unit_price,
            minutes_lost_per_unit,
            money: f64::from(count) * unit_price,
            time_minutes: f64::from(count) * minutes_lost_per_unit,
            full_packs,
            remainder,
        }
    }

    pub fn toxins(&self) -> impl Iterator<Item = ToxinLoad> {
        let count = f64::from(self.count);
        Toxin::iter().map(move |toxin| ToxinLoad {
            toxin,
            milligrams: count * toxin.milligrams_per_unit(),
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{
        repository::{Goal, Profile},
        stats::{Stats, Toxin, minutes_lost_per_unit, unit_price},
    };

    fn profile(units_per_pack: i32, count: u32) -> Profile {
        Profile::new("Ana", 30, 5.0, units_per_pack, Goal::Tracking).with_active_count(count)
    }

    #[test]
    fn test_unit_price() {
        assert!((unit_price(&profile(20, 0)) - 0.25).abs() < 1e-9);
        assert_eq!(unit_price(&profile(0, 0)), 0.0);
        assert_eq!(unit_price(&profile(-5, 0)), 0.0);
    }

    #[test]
    fn test_minutes_lost_scale_with_age() {
        let mut p = profile(20, 0);
        assert_eq!(minutes_lost_per_unit(&p), 26.0);

        p.age = 0;
        assert_eq!(minutes_lost_per_unit(&p), 11.0);

        // Negative ages are passed through as is
        p.age = -40;
        assert_eq!(minutes_lost_per_unit(&p), -9.0);
    }

    #[test]
    fn test_pack_breakdown_identity() {
        for units in 1..=25 {
            for count in [0, 1, 19, 20, 21, 57, 400, 1001] {
                let stats = Stats::new(&profile(units, count));
                let units = u32::try_from(units).unwrap();

                assert_eq!(stats.full_packs() * units + stats.remainder(), count);
                assert!(stats.remainder() < units);
            }
        }
    }

    #[test]
    fn test_zero_pack_size() {
        let stats = Stats::new(&profile(0, 33));

        assert_eq!(stats.unit_price(), 0.0);
        assert_eq!(stats.money(), 0.0);
        assert_eq!(stats.full_packs(), 0);
        assert_eq!(stats.remainder(), 0);
        assert_eq!(stats.time_minutes(), 33.0 * 26.0);
    }

    #[test]
    fn test_quitting_uses_avoided_count() {
        let mut p = Profile::new("Ana", 30, 5.0, 20, Goal::Quitting);
        p.consumed_count = 100;
        p.avoided_count = 4;

        let stats = Stats::new(&p);

        assert_eq!(stats.count(), 4);
        assert!((stats.money() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_toxins() {
        let loads: Vec<_> = Stats::new(&profile(20, 150)).toxins().collect();

        assert_eq!(loads.len(), 3);
        for load in loads {
            let expected = match load.toxin() {
                Toxin::Tar | Toxin::CarbonMonoxide => 1500.0,
                Toxin::Nicotine => 150.0,
            };
            assert_eq!(load.milligrams(), expected);
        }
    }
}
