//! Best-effort outbound email.
//!
//! SMTP parameters come from the admin-managed settings row, falling back to
//! environment configuration; with neither present every send is a logged
//! no-op. Contact intake spawns sends and never awaits them, so a slow or
//! failing provider cannot delay or fail a form submission.

pub mod mailer;
pub mod templates;

pub use mailer::{resolve_mail_config, send_mail, MailConfig};

use crate::db::{NewContact, Storage};
use crate::error::ApiError;

/// Notify the configured recipient of a new contact-form submission.
pub async fn send_contact_notification(
    storage: &Storage,
    contact: &NewContact,
) -> Result<(), ApiError> {
    let Some(config) = resolve_mail_config(storage).await else {
        tracing::debug!("email not configured; skipping contact notification");
        return Ok(());
    };
    let (subject, html, text) = templates::contact_notification(contact);
    send_mail(&config, &config.admin_email, &subject, &html, &text).await
}

/// Confirm receipt to the person who submitted the form.
pub async fn send_contact_confirmation(
    storage: &Storage,
    to: &str,
    name: &str,
) -> Result<(), ApiError> {
    let Some(config) = resolve_mail_config(storage).await else {
        tracing::debug!("email not configured; skipping contact confirmation");
        return Ok(());
    };
    let (subject, html, text) = templates::contact_confirmation(name);
    send_mail(&config, to, &subject, &html, &text).await
}
