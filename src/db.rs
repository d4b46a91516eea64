//! Database connection helpers.
//!
//! The catalog only ever reads from SQLite, so the pool handed to the
//! repository opens its connections in `query_only` mode. Writable pools are
//! still available for provisioning and test fixtures.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Default time a connection waits on a locked database before failing.
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy)]
/// Pragmas applied every time a connection is checked out of the pool.
pub struct ConnectionOptions {
    /// Reject any statement that would modify the database file.
    pub query_only: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl ConnectionOptions {
    /// Options for the catalog read path.
    pub const fn read_only() -> Self {
        Self {
            query_only: true,
            busy_timeout: Some(DEFAULT_BUSY_TIMEOUT),
        }
    }

    /// Options for connections that provision or seed the `product` table.
    pub const fn read_write() -> Self {
        Self {
            query_only: false,
            busy_timeout: Some(DEFAULT_BUSY_TIMEOUT),
        }
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let mut pragmas = String::new();
        if self.query_only {
            pragmas.push_str("PRAGMA query_only = ON;");
        }
        if let Some(timeout) = self.busy_timeout {
            pragmas.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        if pragmas.is_empty() {
            return Ok(());
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create the read-only pool used by the catalog endpoint.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_pool_with(database_url, ConnectionOptions::read_only())
}

/// Create a pool whose connections are customized with `options`.
pub fn establish_pool_with(
    database_url: &str,
    options: ConnectionOptions,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(options))
        .build(manager)
}

/// Retrieve a connection from the pool. The returned guard hands the
/// connection back when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}
