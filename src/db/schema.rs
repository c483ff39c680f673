//! SQL DDL for initializing persistent storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `contacts` is append-only; `created_at` is assigned at insert (RFC3339)
///   and never updated.
/// - `email_settings` holds at most one row, keyed by the fixed id `default`;
///   the upsert path enforces the singleton.
/// - `admins.email` is UNIQUE; password hash and salt are base64 text.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NULL,
    service TEXT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL -- RFC3339
);

CREATE INDEX IF NOT EXISTS idx_contacts_created_at ON contacts(created_at);

CREATE TABLE IF NOT EXISTS email_settings (
    id TEXT PRIMARY KEY,
    smtp_host TEXT NOT NULL,
    smtp_port INTEGER NOT NULL,
    smtp_secure INTEGER NOT NULL DEFAULT 0,
    smtp_user TEXT NOT NULL,
    smtp_password TEXT NOT NULL DEFAULT '',
    admin_email TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS admins (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    salt TEXT NOT NULL
);
"#;
