use crate::domain::UserEmail;
use crate::email::{Envelope, MailTransport};
use crate::error::NotifyError;
use crate::notifiers::Notifier;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends notifications as emails from the no-reply address.
pub struct EmailNotifier {
    transport: Arc<dyn MailTransport>,
    sender: UserEmail,
}

impl EmailNotifier {
    pub fn new(transport: Arc<dyn MailTransport>, sender: UserEmail) -> Self {
        Self { transport, sender }
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[tracing::instrument(name = "Sending an email", skip(self, message))]
    async fn notify(&self, receiver: &str, message: &str) -> Result<(), NotifyError> {
        let envelope = Envelope {
            sender: self.sender.as_ref().to_string(),
            recipient: receiver.to_string(),
            body: message.to_string(),
        };
        tracing::info!("Sending an email to {}", receiver);
        self.transport.send(&envelope).await?;
        Ok(())
    }
}
