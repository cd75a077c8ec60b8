use crate::configuration::SmtpSettings;
use crate::domain::{NotificationMethod, User};
use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

/// Sends notifications with the SMTP details written out inline.
///
/// Only email is supported and every new channel means editing this type.
/// [`DecoupledNotifier`](crate::dispatch::DecoupledNotifier) is the version
/// to use; this one is kept for comparison.
pub struct CoupledNotifier {
    settings: SmtpSettings,
}

impl CoupledNotifier {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    #[tracing::instrument(
        name = "Notifying a user over inline SMTP",
        skip(self, user, message),
        fields(user_email = %user.email)
    )]
    pub async fn notify_user(&self, user: &User, message: &str) -> Result<(), anyhow::Error> {
        if user.notification_method().ok() != Some(NotificationMethod::Email) {
            anyhow::bail!(
                "Notification method {} not implemented!",
                user.notification_preference
            );
        }

        // The session lives for this call only and is dropped on every path out.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.settings.host)
            .context("Failed to configure the SMTP transport.")?
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.username.clone(),
                self.settings.password.expose_secret().clone(),
            ))
            .timeout(Some(self.settings.timeout()))
            .build();

        let email = Message::builder()
            .from(
                self.settings
                    .no_reply_address
                    .parse::<Mailbox>()
                    .context("The no-reply address is not a valid mailbox.")?,
            )
            .to(user
                .email
                .as_ref()
                .parse::<Mailbox>()
                .context("The user's email is not a valid mailbox.")?)
            .header(ContentType::TEXT_PLAIN)
            .body(message.to_string())
            .context("Failed to build the email message.")?;

        transport
            .send(email)
            .await
            .with_context(|| format!("Failed to send an email to {}", user.email))?;
        Ok(())
    }
}
