use std::{path::Path, sync::Arc};

use agdb::{DbAny, DbId, QueryBuilder};
use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::{
    Result,
    fs::state_dir,
    repository::{
        config::{Cfg, CoreConfig},
        db::{Db, PROFILE, first_id, models::ProfileModel},
    },
    session::{Command, UserAction},
};

mod db;

pub mod config;
pub mod entities;

pub use entities::{Goal, PROFILE_KEY, Profile};

const DB_FILE_NAME: &str = "data.db";

/// Central access point for the persisted profile.
///
/// Holds the one profile an installation can have. Writes replace the whole record and are
/// published to every [`ProfileFeed`] handed out by [`Repository::observe`]. Cloning is cheap and
/// every clone shares the same database and feed.
#[derive(Clone, Debug)]
pub struct Repository {
    db: Db,
    cfg: Cfg,
    latest: Arc<watch::Sender<Option<Profile>>>,
}

impl Repository {
    /// Open the database named by the core configuration, or `data.db` in the state directory.
    pub fn new() -> Result<Self> {
        let cfg = CoreConfig::load()?;
        let path = match &cfg.database {
            Some(path) => path.clone(),
            None => state_dir()?.join(DB_FILE_NAME),
        };

        Self::with_db(Db::open(&path)?, cfg)
    }

    /// Open a database file at an explicit location with the default configuration
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_db(Db::open(path)?, CoreConfig::default())
    }

    fn with_db(db: Db, cfg: CoreConfig) -> Result<Self> {
        let (latest, _) = watch::channel(load(&db)?);

        Ok(Self {
            db,
            cfg: Arc::new(RwLock::new(cfg)),
            latest: Arc::new(latest),
        })
    }

    pub fn cfg(&self) -> Cfg {
        self.cfg.clone()
    }

    /// Subscribe to the stored profile. See [`ProfileFeed`].
    pub fn observe(&self) -> ProfileFeed {
        ProfileFeed {
            rx: self.latest.subscribe(),
            primed: false,
        }
    }

    /// Read the committed profile straight from the database
    pub fn profile(&self) -> Result<Option<Profile>> {
        load(&self.db)
    }

    /// Store `profile`, replacing the existing one if there is one.
    pub fn upsert(&self, profile: &Profile) -> Result<()> {
        let mut db = self.db.write();
        replace(&mut db, profile)?;

        // Publish while the write lock is held so feeds see writes in commit order
        self.latest.send_replace(Some(profile.clone()));
        drop(db);

        debug!("Saved profile: {}", profile.name);

        Ok(())
    }

    /// Remove the stored profile if it has the same identity as `profile`. Does nothing (and
    /// notifies nobody) otherwise.
    pub fn delete(&self, profile: &Profile) -> Result<()> {
        let mut db = self.db.write();

        if remove(&mut db, profile)? {
            self.latest.send_replace(None);
            drop(db);
            debug!("Removed profile: {}", profile.name);
        }

        Ok(())
    }

    /// Carry out `action` on the stored profile. The profile is read and written back under the
    /// same write lock, so concurrent presses all count. Does nothing when no profile is stored.
    pub fn apply(&self, action: UserAction) -> Result<()> {
        let mut db = self.db.write();

        let Some(current) = read(&db)? else {
            debug!("No profile to apply {action:?} to");
            return Ok(());
        };

        match action.apply(&current) {
            Command::Upsert(next) => {
                replace(&mut db, &next)?;
                self.latest.send_replace(Some(next));
            }
            Command::Delete(stale) => {
                if remove(&mut db, &stale)? {
                    self.latest.send_replace(None);
                }
            }
        }
        drop(db);

        debug!("Applied {action:?} to profile: {}", current.name);

        Ok(())
    }

    pub fn execute(&self, command: &Command) -> Result<()> {
        match command {
            Command::Upsert(profile) => self.upsert(profile),
            Command::Delete(profile) => self.delete(profile),
        }
    }

    #[cfg(test)]
    /// Return a mock version of a [`Repository`] with an in-memory database and default
    /// configuration.
    pub(crate) fn mock() -> Self {
        Self::with_db(Db::in_memory(), CoreConfig::mock()).unwrap()
    }
}

/// One subscriber's view of the stored profile.
///
/// The first call to [`ProfileFeed::next`] resolves immediately with the current state, later
/// calls wait for the next write. Rapid writes may coalesce; the latest state always wins.
#[derive(Debug)]
pub struct ProfileFeed {
    rx: watch::Receiver<Option<Profile>>,
    primed: bool,
}

impl ProfileFeed {
    /// Returns `None` once every [`Repository`] handle has been dropped.
    pub async fn next(&mut self) -> Option<Option<Profile>> {
        if self.primed {
            self.rx.changed().await.ok()?;
        }
        self.primed = true;

        Some(self.rx.borrow_and_update().clone())
    }

    /// Last published state, without waiting
    pub fn latest(&self) -> Option<Profile> {
        self.rx.borrow().clone()
    }
}

fn load(db: &Db) -> Result<Option<Profile>> {
    read(&db.read())
}

fn read(db: &DbAny) -> Result<Option<Profile>> {
    let stored: Vec<ProfileModel> = db
        .exec(
            QueryBuilder::select()
                .elements::<ProfileModel>()
                .search()
                .from(PROFILE)
                .where_()
                .neighbor()
                .query(),
        )?
        .try_into()?;

    stored.into_iter().next().map(Profile::try_from).transpose()
}

/// Swap whatever is stored for `profile` in one transaction
fn replace(db: &mut DbAny, profile: &Profile) -> Result<()> {
    let model = ProfileModel::from(profile);

    db.transaction_mut(|t| -> Result<()> {
        let stored: Vec<ProfileModel> = t
            .exec(
                QueryBuilder::select()
                    .elements::<ProfileModel>()
                    .search()
                    .from(PROFILE)
                    .where_()
                    .neighbor()
                    .query(),
            )?
            .try_into()?;
        let stale: Vec<DbId> = stored.iter().filter_map(|m| m.db_id).collect();

        if !stale.is_empty() {
            t.exec_mut(QueryBuilder::remove().ids(stale).query())?;
        }

        let profile_id = first_id(t.exec_mut(QueryBuilder::insert().element(model).query())?)?;

        t.exec_mut(
            QueryBuilder::insert()
                .edges()
                .from(PROFILE)
                .to(profile_id)
                .query(),
        )?;

        Ok(())
    })
}

/// Returns whether a record with the identity of `profile` was removed
fn remove(db: &mut DbAny, profile: &Profile) -> Result<bool> {
    db.transaction_mut(|t| -> Result<bool> {
        let stored: Vec<ProfileModel> = t
            .exec(
                QueryBuilder::select()
                    .elements::<ProfileModel>()
                    .search()
                    .from(PROFILE)
                    .where_()
                    .neighbor()
                    .query(),
            )?
            .try_into()?;
        let matching: Vec<DbId> = stored
            .iter()
            .filter(|m| m.key == profile.key())
            .filter_map(|m| m.db_id)
            .collect();

        if matching.is_empty() {
            return Ok(false);
        }

        t.exec_mut(QueryBuilder::remove().ids(matching).query())?;

        Ok(true)
    })
}
