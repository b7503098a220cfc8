//! The form that collects the user's data before a profile exists.

use crate::repository::{Goal, Profile};

pub const DEFAULT_AGE: i32 = 18;
pub const DEFAULT_PRICE_PER_PACK: f64 = 0.0;
pub const DEFAULT_UNITS_PER_PACK: i32 = 20;

/// Raw text of the form fields, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub age: String,
    pub price_per_pack: String,
    pub units_per_pack: String,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            price_per_pack: String::new(),
            units_per_pack: DEFAULT_UNITS_PER_PACK.to_string(),
        }
    }

    /// Whether submitting would create a profile
    pub fn validate(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build the profile for `goal`. Numbers that don't parse fall back to their defaults; only a
    /// blank name stops the submission.
    pub fn submit(&self, goal: Goal) -> Option<Profile> {
        if !self.validate() {
            return None;
        }

        let age = self.age.trim().parse().unwrap_or(DEFAULT_AGE);
        let price_per_pack = self
            .price_per_pack
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .unwrap_or(DEFAULT_PRICE_PER_PACK);
        let units_per_pack = self
            .units_per_pack
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|units| *units >= 0)
            .unwrap_or(DEFAULT_UNITS_PER_PACK);

        Some(Profile::new(
            self.name.trim(),
            age,
            price_per_pack,
            units_per_pack,
            goal,
        ))
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        onboarding::ProfileForm,
        repository::{Goal, Profile},
    };

    fn form(name: &str, age: &str, price: &str, units: &str) -> ProfileForm {
        ProfileForm {
            name: name.into(),
            age: age.into(),
            price_per_pack: price.into(),
            units_per_pack: units.into(),
        }
    }

    #[test]
    fn test_blank_name_blocks_submission() {
        assert_eq!(form("", "30", "5", "20").submit(Goal::Tracking), None);
        assert_eq!(form("   ", "30", "5", "20").submit(Goal::Quitting), None);
        assert!(!ProfileForm::new().validate());
    }

    #[test]
    fn test_submit() {
        assert_eq!(
            form(" Ana ", "30", "5.00", "20").submit(Goal::Tracking),
            Some(Profile::new("Ana", 30, 5.0, 20, Goal::Tracking))
        );
    }

    #[test]
    fn test_unparseable_numbers_use_defaults() {
        let profile = form("Ana", "treinta", "5,50", "veinte")
            .submit(Goal::Quitting)
            .unwrap();

        assert_eq!(profile.age, 18);
        assert_eq!(profile.price_per_pack, 0.0);
        assert_eq!(profile.units_per_pack, 20);
        assert_eq!(profile.goal, Goal::Quitting);
    }

    #[test]
    fn test_out_of_domain_numbers() {
        let profile = form("Ana", "-4", "NaN", "-10").submit(Goal::Tracking).unwrap();

        // Age is kept as typed, price and pack size must not be negative
        assert_eq!(profile.age, -4);
        assert_eq!(profile.price_per_pack, 0.0);
        assert_eq!(profile.units_per_pack, 20);

        let profile = form("Ana", "", "-1", "0").submit(Goal::Tracking).unwrap();
        assert_eq!(profile.price_per_pack, 0.0);
        assert_eq!(profile.units_per_pack, 0);
    }

    #[test]
    fn test_new_prefills_pack_size() {
        let form = ProfileForm::new();

        assert_eq!(form.units_per_pack, "20");
        assert!(form.name.is_empty());
        assert_eq!(form, ProfileForm::default());
    }
}
