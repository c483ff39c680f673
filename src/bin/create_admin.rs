//! Provision (or rotate the password of) an admin account.
//!
//! The running server has no self-service admin creation; this is the only
//! way accounts come into existence.
//!
//! Usage: `create_admin [email] [password]`
//! Defaults: `admin@webnirvaan.com` / `admin123` (change them).

use nirvaan_api::auth;
use nirvaan_api::db::Storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let email = args
        .next()
        .unwrap_or_else(|| "admin@webnirvaan.com".to_string());
    let password = args.next().unwrap_or_else(|| "admin123".to_string());

    println!("Creating admin user...");
    println!("Email: {email}");

    let storage = Storage::connect(&nirvaan_api::config::CONFIG.database_url).await?;

    let (hash, salt) = auth::hash_password(&password);
    let id = storage.upsert_admin(&email, &hash, &salt).await?;

    println!("Admin user created/updated successfully (id: {id})");
    Ok(())
}
