use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Rows are append-only: created by the
/// public form, read by the admin listing, never mutated in-app.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact fields as submitted by the public form; the id and timestamp are
/// assigned server-side at insert.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: String,
}

/// The singleton SMTP settings row (fixed id `"default"`).
///
/// `smtp_password` is write-only from the client's perspective: use
/// [`EmailSettings::blank_password`] before serializing for any client-facing
/// response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub smtp_user: String,
    pub smtp_password: String,
    pub admin_email: String,
}

impl EmailSettings {
    pub fn blank_password(mut self) -> Self {
        self.smtp_password = String::new();
        self
    }
}

/// An admin account, used solely to mint bearer tokens at login.
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub salt: String,
}
