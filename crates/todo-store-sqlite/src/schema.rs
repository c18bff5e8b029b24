//! SQL schema for the todo SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision so later migrations can be gated on it.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS lists (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT,
    status      TEXT,
    created_at  TEXT NOT NULL,   -- RFC 3339 UTC; server-assigned
    updated_at  TEXT NOT NULL
);

-- Deleting a list removes its items in the same statement.
CREATE TABLE IF NOT EXISTS items (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    list_id     INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE,
    status      TEXT,
    text        TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS items_list_idx ON items(list_id);

PRAGMA user_version = 1;
";
