//! Connection pooling, pragmas, and embedded migrations.

mod write_actor;

pub use write_actor::{spawn_writer, WriteHandle};

use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use canastilla_core::errors::{DatabaseError, Result};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Arc<Pool<ConnectionManager<SqliteConnection>>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies the per-connection pragmas every pooled connection needs:
/// cascading deletes require foreign_keys, and concurrent readers alongside
/// the single writer require WAL plus a busy timeout.
#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Creates the r2d2 connection pool for a database path.
pub fn create_pool(db_path: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(8)
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;
    Ok(Arc::new(pool))
}

/// Checks out a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()).into())
}

/// Creates the database file if needed, builds the pool, and runs pending
/// migrations.
pub fn init(db_path: &str) -> Result<DbPool> {
    if !Path::new(db_path).exists() {
        create_db_file(db_path)?;
    }
    let pool = create_pool(db_path)?;
    let mut conn = get_connection(&pool)?;
    run_migrations(&mut conn)?;
    Ok(pool)
}

/// Runs all pending embedded migrations.
pub fn run_migrations(conn: &mut DbConnection) -> Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()).into())
}

fn create_db_file(db_path: &str) -> Result<()> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)
                .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
        }
    }
    fs::File::create(db_path).map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;
    Ok(())
}
