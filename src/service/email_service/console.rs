use async_trait::async_trait;
use tracing::warn;

use super::{EmailError, EmailProvider, OutgoingEmail};

/// Development provider: nothing leaves the process, the message is logged
/// so the code can be read from the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProvider;

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        warn!(
            to = %email.to,
            subject = %email.subject,
            "Email delivery disabled, message not sent:\n{}",
            email.text
        );
        Ok(())
    }
}
