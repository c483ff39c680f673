use std::sync::LazyLock;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Process-wide configuration, resolved once at startup.
///
/// Defaults are overridden by environment variables of the same name in
/// uppercase (`DATABASE_URL`, `JWT_SECRET`, `OPENAI_API_KEY`, `SMTP_HOST`, ...).
/// `dotenvy` is invoked by the binaries before first access, so a local `.env`
/// participates as well.
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    })
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub loglevel: String,
    pub bind_addr: String,
    pub database_url: String,

    /// HS256 signing secret for admin bearer tokens.
    pub jwt_secret: String,

    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,

    /// SMTP fallback used when no settings row has been saved by the admin.
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub admin_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:nirvaan.db".to_string(),
            jwt_secret: "your-secret-key-change-in-production".to_string(),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            smtp_host: None,
            smtp_port: 587,
            smtp_secure: false,
            smtp_user: None,
            smtp_password: None,
            admin_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw())
            .extract()
    }
}
