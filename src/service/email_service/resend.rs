use async_trait::async_trait;
use resend_rs::{types::CreateEmailBaseOptions, Resend};

use super::{EmailError, EmailProvider, OutgoingEmail};

pub struct ResendProvider {
    client: Resend,
}

impl ResendProvider {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Resend::new(api_key),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let message = CreateEmailBaseOptions::new(
            email.from.as_str(),
            vec![email.to.clone()],
            email.subject.as_str(),
        )
        .with_text(&email.text)
        .with_html(&email.html);

        self.client
            .emails
            .send(message)
            .await
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
