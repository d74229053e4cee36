//! Contact notification delivery via SMTP.
//!
//! [`Mailer`] wraps the `lettre` async SMTP transport to send a plain-text
//! email to the business for each contact-form submission. Configuration
//! is loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be
//! constructed; submissions still persist, only the notification is
//! skipped.

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@vitrina.local";

/// Configuration for the SMTP notification service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Inbox that receives contact notifications.
    pub to_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                  |
    /// |-----------------|----------|--------------------------|
    /// | `SMTP_HOST`     | yes      | —                        |
    /// | `SMTP_PORT`     | no       | `587`                    |
    /// | `SMTP_FROM`     | no       | `noreply@vitrina.local`  |
    /// | `CONTACT_EMAIL_TO` | no    | same as `SMTP_FROM`      |
    /// | `SMTP_USER`     | no       | —                        |
    /// | `SMTP_PASSWORD` | no       | —                        |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        let from_address =
            std::env::var("SMTP_FROM").unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string());
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            to_address: std::env::var("CONTACT_EMAIL_TO")
                .unwrap_or_else(|_| from_address.clone()),
            from_address,
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// A contact submission to notify the business about.
#[derive(Debug, Clone)]
pub struct ContactNotification<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub category: Option<&'a str>,
    pub message: &'a str,
}

/// Sends contact notification emails via SMTP.
pub struct Mailer {
    config: EmailConfig,
    site_name: String,
}

impl Mailer {
    /// Create a new mailer with the given configuration. `site_name`
    /// appears in the subject and signature lines.
    pub fn new(config: EmailConfig, site_name: impl Into<String>) -> Self {
        Self {
            config,
            site_name: site_name.into(),
        }
    }

    /// Send the notification email for one submission.
    pub async fn send_contact_notification(
        &self,
        contact: &ContactNotification<'_>,
    ) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let subject = format!("Nuevo contacto desde {} - {}", self.site_name, contact.name);
        let body = notification_body(contact, &self.site_name);

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.config.to_address.parse()?)
            .reply_to(contact.email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(to = %self.config.to_address, "Contact notification email sent");
        Ok(())
    }
}

/// Compose the plain-text notification body.
fn notification_body(contact: &ContactNotification<'_>, site_name: &str) -> String {
    format!(
        "Nuevo mensaje de contacto desde la p\u{00e1}gina web:\n\
         \n\
         Nombre: {}\n\
         Email: {}\n\
         Tel\u{00e9}fono: {}\n\
         Categor\u{00ed}a de inter\u{00e9}s: {}\n\
         \n\
         Mensaje:\n\
         {}\n\
         \n\
         ---\n\
         Este mensaje fue enviado desde el formulario de contacto de {site_name}.\n",
        contact.name,
        contact.email,
        contact.phone.unwrap_or("-"),
        contact.category.unwrap_or("-"),
        contact.message,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
