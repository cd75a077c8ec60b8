use crate::configuration::SmtpSettings;
use crate::email::{Envelope, MailTransport};
use crate::error::TransportError;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

/// SMTP over implicit TLS, authenticated with the configured credentials.
///
/// Connections are opened on first use and pooled by `lettre`; they are closed
/// when the transport is dropped.
pub struct SmtpMailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn new(settings: &SmtpSettings) -> Result<Self, TransportError> {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose_secret().clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .timeout(Some(settings.timeout()))
            .build();
        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        let message = build_message(envelope)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

pub(crate) fn build_message(envelope: &Envelope) -> Result<Message, TransportError> {
    let message = Message::builder()
        .from(parse_mailbox(&envelope.sender)?)
        .to(parse_mailbox(&envelope.recipient)?)
        .header(ContentType::TEXT_PLAIN)
        .body(envelope.body.clone())?;
    Ok(message)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, TransportError> {
    address
        .parse()
        .map_err(|source| TransportError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

impl std::fmt::Debug for SmtpMailTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailTransport").finish_non_exhaustive()
    }
}
