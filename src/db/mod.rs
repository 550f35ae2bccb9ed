pub mod schema;
pub mod contact_repo;

use std::path::Path;

use rusqlite::Connection;

use crate::error::BookResult;

/// Opens (creating if needed) the database at `path` and makes sure the
/// schema exists.
pub fn open(path: &Path) -> BookResult<Connection> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    Ok(conn)
}
