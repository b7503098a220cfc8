use agdb::{DbElement, DbId};

mod profiles;

pub(crate) use profiles::ProfileModel;

/// Version of the stored data layout. Bump when [`ProfileModel`] changes shape.
pub(crate) const CURRENT_MODEL_VERSION: u64 = 1;

#[derive(Debug, Clone, DbElement, PartialEq, PartialOrd)]
pub(crate) struct ModelVersion {
    db_id: Option<DbId>,
    version: u64,
}

impl ModelVersion {
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl Default for ModelVersion {
    fn default() -> Self {
        Self {
            db_id: None,
            version: CURRENT_MODEL_VERSION,
        }
    }
}
