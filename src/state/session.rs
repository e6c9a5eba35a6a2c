/// Session management
///
/// The session is the single current-user slot gating the main screens.
/// It is durably persisted in a small SQLite key-value table so the user
/// stays logged in across launches:
/// - Linux: ~/.local/share/placeview/placeview.db
/// - macOS: ~/Library/Application Support/placeview/placeview.db
/// - Windows: %APPDATA%\placeview\placeview.db
///
/// Login itself is a local comparison against the fetched users (the demo
/// API has no credentials, so every user shares one hard-coded password).
/// This is a mock gate, not a security boundary.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result as SqlResult};
use std::path::PathBuf;
use thiserror::Error;

use super::data::User;

/// The one password the demo accepts, shared by every user
pub const SHARED_PASSWORD: &str = "uni";

/// Key under which the current user's record is persisted
const SESSION_KEY: &str = "current_user";

/// Login failure: wrong email, wrong password, or users not yet fetched.
/// Login is a local comparison, so there is no transport failure mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Incorrect password or email")]
    InvalidCredentials,
}

/// Failures while reading or writing the persisted session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("stored session is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Check submitted credentials against the fetched user records.
///
/// The email must match exactly one user's email and the password must
/// equal [`SHARED_PASSWORD`]. On failure nothing changes and nothing is
/// persisted.
pub fn authenticate<'a>(
    users: &'a [User],
    email: &str,
    password: &str,
) -> Result<&'a User, LoginError> {
    let user = users
        .iter()
        .find(|u| u.email == email)
        .ok_or(LoginError::InvalidCredentials)?;

    if password != SHARED_PASSWORD {
        return Err(LoginError::InvalidCredentials);
    }

    Ok(user)
}

/// Durable key-value store for the session, backed by SQLite
pub struct SessionStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SessionStore {
    /// Open (or create) the session database in the user data directory
    pub fn new() -> SqlResult<Self> {
        Self::open_at(Self::default_db_path())
    }

    /// Open (or create) the session database at an explicit path
    pub fn open_at(db_path: PathBuf) -> SqlResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;
        let store = SessionStore { conn, db_path };
        store.init_schema()?;

        Ok(store)
    }

    /// Where the database lives by default
    fn default_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("placeview");
        path.push("placeview.db");
        path
    }

    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS session (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                saved_at    INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    /// Path to the database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Read the persisted user, if any.
    ///
    /// Any read or decode failure is logged and treated as "no session";
    /// hydration must never block startup.
    pub fn load_user(&self) -> Option<User> {
        match self.read_user() {
            Ok(user) => user,
            Err(e) => {
                eprintln!("⚠️  Failed to restore session: {e}");
                None
            }
        }
    }

    fn read_user(&self) -> Result<Option<User>, SessionError> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM session WHERE key = ?1",
                [SESSION_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Persist the logged-in user, replacing any previous session
    pub fn save_user(&self, user: &User) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        self.conn.execute(
            "INSERT INTO session (key, value, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, saved_at = ?3",
            rusqlite::params![SESSION_KEY, json, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Remove the persisted session (logout)
    pub fn clear_user(&self) -> Result<(), SessionError> {
        self.conn
            .execute("DELETE FROM session WHERE key = ?1", [SESSION_KEY])?;
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}
