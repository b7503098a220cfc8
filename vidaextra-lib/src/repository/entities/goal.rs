use strum::{AsRefStr, Display, EnumString};

/// What the user wants to do about smoking. Chosen once when the profile is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Count cigarettes smoked
    Tracking,
    /// Count cigarettes avoided
    Quitting,
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::Goal;

    #[test]
    fn test_stored_form() {
        assert_eq!(Goal::Tracking.as_ref(), "TRACKING");
        assert_eq!(Goal::Quitting.to_string(), "QUITTING");
        assert_eq!(Goal::from_str("QUITTING").unwrap(), Goal::Quitting);
        assert!(Goal::from_str("FUMAR").is_err());
    }
}
