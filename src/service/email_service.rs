//! Out-of-band delivery of verification codes.
//!
//! [`EmailService`] renders the message and hands it to an [`EmailProvider`],
//! which only knows how to move bytes to a mailbox.

mod console;
#[cfg(feature = "email-resend")]
mod resend;
#[cfg(feature = "email-smtp")]
mod smtp;
mod templates;

pub use console::LogProvider;
pub use templates::VerificationEmailContent;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use crate::config::config::{EmailConfig, EmailProviderConfig};

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Failed to send email: {0}")]
    SendFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Provider not available: {0}")]
    ProviderNotAvailable(String),
}

/// A fully rendered message, ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

pub fn create_provider(config: &EmailConfig) -> Result<Box<dyn EmailProvider>, EmailError> {
    match &config.provider {
        EmailProviderConfig::Log => Ok(Box::new(LogProvider)),
        #[cfg(feature = "email-resend")]
        EmailProviderConfig::Resend { api_key } => {
            Ok(Box::new(resend::ResendProvider::new(api_key)))
        }
        #[cfg(not(feature = "email-resend"))]
        EmailProviderConfig::Resend { .. } => Err(EmailError::ProviderNotAvailable(
            "Resend support not compiled in. Enable the 'email-resend' feature.".to_string(),
        )),
        #[cfg(feature = "email-smtp")]
        EmailProviderConfig::Smtp {
            host,
            port,
            username,
            password,
            use_tls,
        } => {
            let provider = smtp::SmtpProvider::new(
                host.clone(),
                *port,
                username.clone(),
                password.clone(),
                *use_tls,
            )?;
            Ok(Box::new(provider))
        }
        #[cfg(not(feature = "email-smtp"))]
        EmailProviderConfig::Smtp { .. } => Err(EmailError::ProviderNotAvailable(
            "SMTP support not compiled in. Enable the 'email-smtp' feature.".to_string(),
        )),
    }
}

pub struct EmailService {
    provider: Box<dyn EmailProvider>,
    from: String,
    platform_name: String,
}

impl EmailService {
    pub fn new(config: &EmailConfig, platform_name: &str) -> Result<Self, EmailError> {
        let provider = create_provider(config)?;
        Ok(Self::with_provider(
            provider,
            &config.from_address,
            config.from_name.as_deref(),
            platform_name,
        ))
    }

    pub fn with_provider(
        provider: Box<dyn EmailProvider>,
        from_address: &str,
        from_name: Option<&str>,
        platform_name: &str,
    ) -> Self {
        let from = match from_name {
            Some(name) => format!("{} <{}>", name, from_address),
            None => from_address.to_string(),
        };

        Self {
            provider,
            from,
            platform_name: platform_name.to_string(),
        }
    }

    #[instrument(skip(self, code))]
    pub async fn send_verification(
        &self,
        to: &str,
        code: &str,
        ttl_minutes: i64,
    ) -> Result<(), EmailError> {
        let content = VerificationEmailContent::new(&self.platform_name, code, ttl_minutes);
        let email = OutgoingEmail {
            from: self.from.clone(),
            to: to.to_string(),
            subject: content.subject,
            text: content.text,
            html: content.html,
        };

        self.provider.send(&email).await
    }
}
