use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, MultiPart, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{EmailError, EmailProvider, OutgoingEmail};

pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
    pub fn new(
        host: String,
        port: u16,
        username: Option<String>,
        password: Option<String>,
        use_tls: bool,
    ) -> Result<Self, EmailError> {
        let mut builder = if use_tls {
            let tls_params = TlsParameters::new(host.clone()).map_err(|e| {
                EmailError::InvalidConfig(format!("TLS configuration error: {}", e))
            })?;

            // 465 is implicit TLS, anything else negotiates STARTTLS
            if port == 465 {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&host)
                    .map_err(|e| EmailError::InvalidConfig(format!("SMTP relay error: {}", e)))?
                    .port(port)
                    .tls(Tls::Wrapper(tls_params))
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&host)
                    .map_err(|e| EmailError::InvalidConfig(format!("SMTP relay error: {}", e)))?
                    .port(port)
                    .tls(Tls::Required(tls_params))
            }
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&host).port(port)
        };

        if let (Some(user), Some(pass)) = (username, password) {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(
                email
                    .from
                    .parse()
                    .map_err(|e| EmailError::InvalidConfig(format!("Invalid from address: {}", e)))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|e| EmailError::SendFailed(format!("Invalid to address: {}", e)))?)
            .subject(email.subject.clone())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )
            .map_err(|e| EmailError::SendFailed(format!("Failed to build email: {}", e)))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
