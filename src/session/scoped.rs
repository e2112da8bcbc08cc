//! Request-scoped unit of work

use sqlx::Transaction;
use tracing::{debug, warn};
use uuid::Uuid;

use super::pool::{Db, DbConnection, DbPool};
use crate::observability::Event;

/// One transaction bound to one request
///
/// - `commit()` makes the request's changes durable
/// - `rollback()` discards them explicitly
/// - dropping an unfinished session discards them too, which covers early
///   error returns and cancelled requests
///
/// In every case the connection goes back to the pool.
pub struct Session {
    tx: Transaction<'static, Db>,
    marker: Unfinished,
}

/// Logs a rollback if the session is dropped before commit or rollback.
/// The transaction's own drop issues the actual rollback.
struct Unfinished {
    id: Uuid,
    armed: bool,
}

impl Drop for Unfinished {
    fn drop(&mut self) {
        if self.armed {
            warn!(
                event = %Event::SessionRollback,
                session = %self.id,
                reason = "dropped without commit"
            );
        }
    }
}

impl Session {
    /// Acquire a connection from `pool` and open a transaction on it
    pub async fn begin(pool: &DbPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        let id = Uuid::new_v4();
        debug!(event = %Event::SessionBegin, session = %id);
        Ok(Self {
            tx,
            marker: Unfinished { id, armed: true },
        })
    }

    /// Session identifier, for log correlation
    pub fn id(&self) -> Uuid {
        self.marker.id
    }

    /// The connection to run statements on
    pub fn conn(&mut self) -> &mut DbConnection {
        &mut *self.tx
    }

    /// Commit every change made in this session
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        let Session { tx, mut marker } = self;
        marker.armed = false;
        tx.commit().await?;
        debug!(event = %Event::SessionCommit, session = %marker.id);
        Ok(())
    }

    /// Discard every change made in this session
    pub async fn rollback(self) -> Result<(), sqlx::Error> {
        let Session { tx, mut marker } = self;
        marker.armed = false;
        tx.rollback().await?;
        debug!(event = %Event::SessionRollback, session = %marker.id, reason = "explicit");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("id", &self.marker.id).finish()
    }
}
