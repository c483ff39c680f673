use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::warn;

use crate::config::CONFIG;
use crate::db::Storage;
use crate::error::ApiError;

/// Resolved SMTP parameters for one send.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_secure: bool,
    pub smtp_user: String,
    pub smtp_password: String,
    pub admin_email: String,
}

/// Resolve SMTP parameters: settings row first, then environment config,
/// else `None` (email treated as unconfigured).
pub async fn resolve_mail_config(storage: &Storage) -> Option<MailConfig> {
    match storage.get_email_settings().await {
        Ok(Some(s)) => {
            return Some(MailConfig {
                smtp_host: s.smtp_host,
                smtp_port: s.smtp_port,
                smtp_secure: s.smtp_secure,
                smtp_user: s.smtp_user,
                smtp_password: s.smtp_password,
                admin_email: s.admin_email,
            });
        }
        Ok(None) => {}
        Err(e) => {
            warn!(error = %e, "failed to read email settings; trying env fallback");
        }
    }

    let cfg = &*CONFIG;
    match (
        cfg.smtp_host.as_ref(),
        cfg.smtp_user.as_ref(),
        cfg.smtp_password.as_ref(),
        cfg.admin_email.as_ref(),
    ) {
        (Some(host), Some(user), Some(password), Some(admin_email)) => Some(MailConfig {
            smtp_host: host.clone(),
            smtp_port: cfg.smtp_port,
            smtp_secure: cfg.smtp_secure,
            smtp_user: user.clone(),
            smtp_password: password.clone(),
            admin_email: admin_email.clone(),
        }),
        _ => None,
    }
}

/// Send one message. A transport is built per send; delivery is best-effort
/// and callers are expected to spawn rather than await this.
pub async fn send_mail(
    config: &MailConfig,
    to: &str,
    subject: &str,
    html: &str,
    text: &str,
) -> Result<(), ApiError> {
    let from: Mailbox = format!("WebNirvaan <{}>", config.smtp_user)
        .parse()
        .map_err(|e| ApiError::Mail(format!("invalid from address: {e}")))?;
    let to: Mailbox = to
        .parse()
        .map_err(|e| ApiError::Mail(format!("invalid to address: {e}")))?;

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text.to_string()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html.to_string()),
                ),
        )
        .map_err(|e| ApiError::Mail(format!("failed to build message: {e}")))?;

    // secure selects implicit TLS (typically port 465); otherwise STARTTLS.
    let builder = if config.smtp_secure {
        AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
    }
    .map_err(|e| ApiError::Mail(format!("invalid SMTP relay: {e}")))?;

    let transport = builder
        .port(config.smtp_port)
        .credentials(Credentials::new(
            config.smtp_user.clone(),
            config.smtp_password.clone(),
        ))
        .build();

    transport.send(message).await.map_err(|e| {
        warn!(error = %e, "SMTP send failed");
        ApiError::Mail("Failed to send email".to_string())
    })?;
    Ok(())
}
