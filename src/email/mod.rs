mod smtp_mail_transport;

use crate::error::TransportError;
use async_trait::async_trait;
pub use smtp_mail_transport::SmtpMailTransport;

/// What gets handed to the mail server: who it is from, who it is for, and the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: String,
    pub recipient: String,
    pub body: String,
}

/// An authenticated, encrypted channel to a mail server.
///
/// Every call to `send` is one use of the authenticated session and one
/// submission; implementations never retry.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError>;
}
