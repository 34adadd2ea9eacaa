use actix::{Actor, Addr, SyncContext};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use diesel::SqliteConnection;
use tracing::info;

use crate::types::ApiError;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

pub struct DbActor(pub SqlitePool);

pub struct AppState {
    pub db: Addr<DbActor>,
}

impl Actor for DbActor {
    type Context = SyncContext<Self>;
}

// WAL plus a busy timeout so the SyncArbiter's pooled writers queue on
// SQLite's single write lock instead of failing with SQLITE_BUSY.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn get_db_pool(db_path: &str) -> Result<SqlitePool, PoolError> {
    let manager: ConnectionManager<SqliteConnection> = ConnectionManager::new(db_path);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)
}

// Foreign keys are declared but PRAGMA foreign_keys stays off: deleting a
// customer that still has orders must succeed and orphan them.
const SCHEMA_DDL: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        contact_number TEXT UNIQUE NOT NULL
    );

    CREATE TABLE IF NOT EXISTS menu_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        dish_name TEXT UNIQUE NOT NULL,
        cost REAL NOT NULL
    );

    CREATE TABLE IF NOT EXISTS customer_orders (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        customer_id INTEGER NOT NULL,
        order_notes TEXT,
        order_time INTEGER NOT NULL,
        FOREIGN KEY (customer_id) REFERENCES customers(id)
    );

    CREATE TABLE IF NOT EXISTS ordered_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id INTEGER NOT NULL,
        menu_item_id INTEGER NOT NULL,
        FOREIGN KEY (order_id) REFERENCES customer_orders(id),
        FOREIGN KEY (menu_item_id) REFERENCES menu_items(id)
    );
";

/// Idempotent: re-running against an already initialized database is a no-op.
pub fn init_schema(pool: &SqlitePool) -> Result<(), ApiError> {
    let mut conn = pool.get().map_err(|_| ApiError::Pool)?;
    conn.batch_execute(SCHEMA_DDL)?;
    info!("database schema initialized");
    Ok(())
}
