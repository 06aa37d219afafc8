//! SQLite-based write-once cache storage
//!
//! One table per resource kind, created from `ResourceKind::ALL`. Entries are
//! inserted once and never updated or deleted.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use crate::client::models::ResourceKind;
use crate::error::CacheError;
use crate::tz::{self, TzDateTime};

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the cache directory
const DB_FILE: &str = "cache.db";

type Result<T> = std::result::Result<T, CacheError>;

/// A stored payload and its timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub key: String,
    /// Validated JSON text
    pub payload: String,
    /// When the payload was fetched from upstream
    pub fetched_at: TzDateTime,
    pub created_at: TzDateTime,
    pub modified_at: TzDateTime,
}

/// SQLite-backed cache storage
pub struct CacheStorage {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl CacheStorage {
    /// Get the default cache directory path (~/.cache/mediacache on Linux)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoHome)?;
        Ok(cache_base.join("mediacache"))
    }

    /// Open cache storage in a specific directory
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join(DB_FILE);
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
            return Self::open_at(cache_dir);
        }

        for kind in ResourceKind::ALL {
            conn.execute_batch(&format!(
                r#"
                CREATE TABLE IF NOT EXISTS {table} (
                    cache_key TEXT PRIMARY KEY NOT NULL,
                    content TEXT NOT NULL,
                    data_timestamp TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    modified_at TEXT NOT NULL
                );
                "#,
                table = kind.table()
            ))?;
        }

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        log::debug!("Opened cache at {}", db_path.display());

        Ok(Self {
            conn: Mutex::new(conn),
            path: db_path,
        })
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the entry for `key`
    pub fn get(&self, kind: ResourceKind, key: &str) -> Result<Option<CacheEntry>> {
        let conn = self.lock()?;
        let row: Option<(String, String, String, String)> = conn
            .query_row(
                &format!(
                    "SELECT content, data_timestamp, created_at, modified_at
                     FROM {} WHERE cache_key = ?1",
                    kind.table()
                ),
                params![key],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?;

        row.map(|(payload, fetched, created, modified)| {
            Ok(CacheEntry {
                key: key.to_string(),
                payload,
                fetched_at: parse_timestamp(&fetched)?,
                created_at: parse_timestamp(&created)?,
                modified_at: parse_timestamp(&modified)?,
            })
        })
        .transpose()
    }

    /// Insert a new entry.
    ///
    /// Fails with `CacheError::Duplicate` if `key` is already stored.
    pub fn put(
        &self,
        kind: ResourceKind,
        key: &str,
        payload: &str,
        fetched_at: TzDateTime,
    ) -> Result<()> {
        let mut conn = self.lock()?;
        let now = tz::now().to_rfc3339();

        let tx = conn.transaction()?;
        let inserted = tx.execute(
            &format!(
                "INSERT INTO {}
                 (cache_key, content, data_timestamp, created_at, modified_at)
                 VALUES (?1, ?2, ?3, ?4, ?4)",
                kind.table()
            ),
            params![key, payload, fetched_at.to_rfc3339(), now],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                return Err(CacheError::Duplicate {
                    kind,
                    key: key.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        }
        tx.commit()?;

        log::debug!("Cached {} '{}' ({} bytes)", kind, key, payload.len());
        Ok(())
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let conn = self.lock()?;
        let mut kinds = Vec::with_capacity(ResourceKind::ALL.len());

        for kind in ResourceKind::ALL {
            let (entries, size_bytes): (i64, i64) = conn.query_row(
                &format!(
                    "SELECT COUNT(*), COALESCE(SUM(LENGTH(content)), 0) FROM {}",
                    kind.table()
                ),
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )?;
            let (oldest, newest) = fetch_bounds(&conn, kind)?;

            kinds.push(KindStats {
                kind,
                entries: entries as usize,
                size_bytes: size_bytes as usize,
                oldest_fetch: oldest,
                newest_fetch: newest,
            });
        }

        Ok(CacheStats { kinds })
    }

    /// Close the underlying connection, flushing any pending state
    pub fn close(self) -> Result<()> {
        let conn = self.conn.into_inner().map_err(|_| CacheError::Poisoned)?;
        conn.close().map_err(|(_, e)| CacheError::Sqlite(e))?;
        log::debug!("Closed cache at {}", self.path.display());
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CacheError::Poisoned)
    }
}

/// Oldest and newest fetch time, compared as instants
fn fetch_bounds(
    conn: &Connection,
    kind: ResourceKind,
) -> Result<(Option<TzDateTime>, Option<TzDateTime>)> {
    let mut stmt = conn.prepare(&format!("SELECT data_timestamp FROM {}", kind.table()))?;
    let mut oldest: Option<TzDateTime> = None;
    let mut newest: Option<TzDateTime> = None;

    for raw in stmt.query_map([], |r| r.get::<_, String>(0))? {
        let ts = parse_timestamp(&raw?)?;
        if oldest.is_none_or(|o| ts < o) {
            oldest = Some(ts);
        }
        if newest.is_none_or(|n| ts > n) {
            newest = Some(ts);
        }
    }
    Ok((oldest, newest))
}

fn parse_timestamp(raw: &str) -> Result<TzDateTime> {
    tz::from_iso(raw).map_err(CacheError::Timestamp)
}

/// Statistics for one resource kind's table
#[derive(Debug)]
pub struct KindStats {
    pub kind: ResourceKind,
    pub entries: usize,
    pub size_bytes: usize,
    pub oldest_fetch: Option<TzDateTime>,
    pub newest_fetch: Option<TzDateTime>,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub kinds: Vec<KindStats>,
}

impl CacheStats {
    pub fn total_entries(&self) -> usize {
        self.kinds.iter().map(|k| k.entries).sum()
    }

    pub fn total_size_bytes(&self) -> usize {
        self.kinds.iter().map(|k| k.size_bytes).sum()
    }
}
