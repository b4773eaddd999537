//! SQL schema for the quip SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS samples (
    sample_id   TEXT PRIMARY KEY,
    person      TEXT NOT NULL DEFAULT '',
    category    TEXT NOT NULL DEFAULT '',
    catchphrase TEXT NOT NULL DEFAULT '',
    inserted_at INTEGER NOT NULL,   -- unix seconds; set once, never updated
    updated_at  INTEGER NOT NULL,   -- unix seconds; refreshed on every merge
    approved    INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS samples_approved_idx ON samples(approved);

PRAGMA user_version = 1;
";
