use std::{path::Path, sync::Arc};

use agdb::{DbAny, DbError, DbId, QueryBuilder, QueryResult};
use derive_more::Deref;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    Error, Result,
    repository::db::models::{CURRENT_MODEL_VERSION, ModelVersion},
};

pub(crate) mod models;

/// Alias of the node the stored profile hangs off. It has at most one outgoing edge.
pub(crate) const PROFILE: &str = "profile";
const MODEL_VERSION: &str = "model_version";

#[derive(Debug, Clone, Deref)]
pub(crate) struct Db {
    #[deref]
    db: Arc<RwLock<DbAny>>,
}

impl Db {
    /// Open (or create) a file backed database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;

        let mut db = Self {
            db: Arc::new(RwLock::new(DbAny::new_file(path_str)?)),
        };

        db.init()?;

        debug!("Opened database at {}", path.display());

        Ok(db)
    }

    fn init(&mut self) -> Result<()> {
        let alias_count = self
            .db
            .read()
            .exec(QueryBuilder::select().aliases().query())?
            .result;

        if alias_count == 0 {
            // Root nodes for the profile and the model version
            self.db.write().exec_mut(
                QueryBuilder::insert()
                    .nodes()
                    .aliases([PROFILE, MODEL_VERSION])
                    .query(),
            )?;
        }

        let versions: Vec<ModelVersion> = self
            .db
            .read()
            .exec(
                QueryBuilder::select()
                    .elements::<ModelVersion>()
                    .search()
                    .from(MODEL_VERSION)
                    .where_()
                    .neighbor()
                    .query(),
            )?
            .try_into()?;

        match versions.first() {
            Some(mv) if mv.version() > CURRENT_MODEL_VERSION => {
                return Err(Error::UnsupportedModelVersion {
                    found: mv.version(),
                    supported: CURRENT_MODEL_VERSION,
                });
            }
            Some(_) => {}
            None => {
                // Fresh database, stamp it with the current version
                self.db.write().transaction_mut(|t| -> Result<()> {
                    let model_version_id = first_id(
                        t.exec_mut(
                            QueryBuilder::insert()
                                .element(ModelVersion::default())
                                .query(),
                        )?,
                    )?;

                    t.exec_mut(
                        QueryBuilder::insert()
                            .edges()
                            .from(MODEL_VERSION)
                            .to(model_version_id)
                            .query(),
                    )?;

                    Ok(())
                })?;
            }
        }

        Ok(())
    }

    /// Create a memory backed database for use in tests
    #[cfg(test)]
    pub(crate) fn in_memory() -> Self {
        let mut db = Self {
            db: Arc::new(RwLock::new(DbAny::new_memory("test").unwrap())),
        };

        db.init().unwrap();

        db
    }
}

/// ID of the first element returned by an insertion
pub(crate) fn first_id(result: QueryResult) -> Result<DbId> {
    result
        .elements
        .first()
        .map(|e| e.id)
        .ok_or_else(|| DbError::from("insertion returned no elements").into())
}
