use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use crate::db::models::{Admin, Contact, EmailSettings, NewContact};
use crate::db::schema::SQLITE_INIT;
use crate::error::ApiError;

pub type SqlitePool = Pool<Sqlite>;

/// Fixed key of the singleton settings row.
const SETTINGS_ID: &str = "default";

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and run the
    /// bundled DDL.
    pub async fn connect(database_url: &str) -> Result<Self, ApiError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), ApiError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    // ---- contacts -------------------------------------------------------

    /// Insert a contact with a server-assigned timestamp. Returns the row id.
    pub async fn insert_contact(&self, form: &NewContact) -> Result<i64, ApiError> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            r#"INSERT INTO contacts (name, email, phone, service, message, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&form.name)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.service)
        .bind(&form.message)
        .bind(created_at)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Page through contacts, newest first. `search` filters case-insensitively
    /// across name, email and message.
    pub async fn list_contacts(
        &self,
        limit: i64,
        skip: i64,
        search: &str,
    ) -> Result<Vec<Contact>, ApiError> {
        let pattern = format!("%{}%", search.to_lowercase());
        let rows = sqlx::query(
            r#"SELECT id, name, email, phone, service, message, created_at
               FROM contacts
               WHERE ? = '' OR lower(name) LIKE ? OR lower(email) LIKE ? OR lower(message) LIKE ?
               ORDER BY created_at DESC, id DESC
               LIMIT ? OFFSET ?"#,
        )
        .bind(search)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Self::row_to_contact).collect()
    }

    /// Total row count under the same filter as [`Storage::list_contacts`].
    pub async fn count_contacts(&self, search: &str) -> Result<i64, ApiError> {
        let pattern = format!("%{}%", search.to_lowercase());
        let rec: (i64,) = sqlx::query_as(
            r#"SELECT COUNT(*) FROM contacts
               WHERE ? = '' OR lower(name) LIKE ? OR lower(email) LIKE ? OR lower(message) LIKE ?"#,
        )
        .bind(search)
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;
        Ok(rec.0)
    }

    // ---- email settings -------------------------------------------------

    pub async fn get_email_settings(&self) -> Result<Option<EmailSettings>, ApiError> {
        let row = sqlx::query(
            r#"SELECT smtp_host, smtp_port, smtp_secure, smtp_user, smtp_password, admin_email
               FROM email_settings WHERE id = ?"#,
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_settings).transpose()
    }

    /// Upsert the singleton settings row.
    ///
    /// A blank submitted password keeps whatever password is already stored,
    /// so admins can edit host/port/recipient without retyping the secret.
    pub async fn upsert_email_settings(&self, settings: &EmailSettings) -> Result<(), ApiError> {
        sqlx::query(
            r#"
            INSERT INTO email_settings (
                id, smtp_host, smtp_port, smtp_secure, smtp_user, smtp_password, admin_email
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                smtp_host=excluded.smtp_host,
                smtp_port=excluded.smtp_port,
                smtp_secure=excluded.smtp_secure,
                smtp_user=excluded.smtp_user,
                smtp_password=CASE
                    WHEN excluded.smtp_password = '' THEN email_settings.smtp_password
                    ELSE excluded.smtp_password
                END,
                admin_email=excluded.admin_email
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(&settings.smtp_host)
        .bind(settings.smtp_port as i64)
        .bind(if settings.smtp_secure { 1i64 } else { 0i64 })
        .bind(&settings.smtp_user)
        .bind(&settings.smtp_password)
        .bind(&settings.admin_email)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // ---- admins ---------------------------------------------------------

    pub async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>, ApiError> {
        let row = sqlx::query(
            r#"SELECT id, email, password_hash, salt FROM admins WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Self::row_to_admin).transpose()
    }

    /// Provision or rotate an admin account. Returns the row id.
    /// Only the seed binary calls this; the running app never creates admins.
    pub async fn upsert_admin(
        &self,
        email: &str,
        password_hash: &str,
        salt: &str,
    ) -> Result<i64, ApiError> {
        sqlx::query(
            r#"
            INSERT INTO admins (email, password_hash, salt) VALUES (?, ?, ?)
            ON CONFLICT(email) DO UPDATE SET
                password_hash=excluded.password_hash,
                salt=excluded.salt
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(salt)
        .execute(&self.pool)
        .await?;

        let rec: (i64,) = sqlx::query_as("SELECT id FROM admins WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    // ---- row decoding ---------------------------------------------------

    fn row_to_contact(row: SqliteRow) -> Result<Contact, ApiError> {
        let created_at_str: String = row.try_get("created_at")?;
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc);
        Ok(Contact {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            service: row.try_get("service")?,
            message: row.try_get("message")?,
            created_at,
        })
    }

    fn row_to_settings(row: SqliteRow) -> Result<EmailSettings, ApiError> {
        let port: i64 = row.try_get("smtp_port")?;
        let secure: i64 = row.try_get("smtp_secure")?;
        Ok(EmailSettings {
            smtp_host: row.try_get("smtp_host")?,
            smtp_port: port as u16,
            smtp_secure: secure != 0,
            smtp_user: row.try_get("smtp_user")?,
            smtp_password: row.try_get("smtp_password")?,
            admin_email: row.try_get("admin_email")?,
        })
    }

    fn row_to_admin(row: SqliteRow) -> Result<Admin, ApiError> {
        Ok(Admin {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password_hash: row.try_get("password_hash")?,
            salt: row.try_get("salt")?,
        })
    }
}
