use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Idle lifetime given to sessions created for tests, matching the server's session layer.
const SESSION_IDLE_DAYS: i64 = 7;

/// In-memory bank database plus an optional web session for one test.
///
/// Both halves are opened on first use. The session store lives in the same SQLite
/// connection as the ledger tables, so a test sees a single consistent database.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection to `sqlite::memory:`, opened on the first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Session("database connection missing".to_string()))
    }

    /// Runs each CREATE TABLE statement in order. Used by `TestBuilder::build`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Session whose store table is created on demand next to the ledger tables.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| TestError::Session(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Session("session missing".to_string()))
    }

    /// Both handles at once, for tests that authenticate against the ledger.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session(
                "test context was not initialized".to_string(),
            )),
        }
    }
}
