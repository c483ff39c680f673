use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::config::CONFIG;
use crate::error::ApiError;

const HASH_LEN: usize = 32;
const SALT_LEN: usize = 16;
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Token lifetime: 7 days.
const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Derive a password hash with a fresh random salt.
/// Returns `(hash, salt)`, both base64.
pub fn hash_password(password: &str) -> (String, String) {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut out);
    (B64.encode(out), B64.encode(salt))
}

/// Constant-time verification against a stored `(hash, salt)` pair.
pub fn verify_password(password: &str, hash_b64: &str, salt_b64: &str) -> bool {
    let (Ok(expected), Ok(salt)) = (B64.decode(hash_b64), B64.decode(salt_b64)) else {
        return false;
    };
    if expected.len() != HASH_LEN {
        return false;
    }
    let mut out = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut out);
    subtle::ConstantTimeEq::ct_eq(out.as_ref(), expected.as_slice()).into()
}

/// Claims carried by an admin bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin row id, decimal.
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

/// Mint an HS256 token for a freshly authenticated admin.
pub fn generate_token(admin_id: i64, email: &str) -> Result<String, ApiError> {
    let claims = AdminClaims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        exp: Utc::now().timestamp() + TOKEN_TTL_SECS,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
    )?;
    Ok(token)
}

/// Verify signature and expiry, returning the embedded claims.
pub fn verify_token(token: &str) -> Result<AdminClaims, ApiError> {
    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(CONFIG.jwt_secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
