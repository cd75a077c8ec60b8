mod email_notifier;

use crate::domain::{NotificationMethod, User};
use crate::error::NotifyError;
use async_trait::async_trait;
pub use email_notifier::EmailNotifier;
use std::sync::Arc;

/// Delivers a message to a contact address over one channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, receiver: &str, message: &str) -> Result<(), NotifyError>;
}

/// Maps each [`NotificationMethod`] to the notifier that serves it.
#[derive(Clone)]
pub struct NotifierResolver {
    email: Arc<EmailNotifier>,
}

impl NotifierResolver {
    pub fn new(email: EmailNotifier) -> Self {
        Self {
            email: Arc::new(email),
        }
    }

    pub fn get_notifier(
        &self,
        method: NotificationMethod,
    ) -> Result<Arc<dyn Notifier>, NotifyError> {
        let notifier: Arc<dyn Notifier> = match method {
            NotificationMethod::Email => self.email.clone(),
            NotificationMethod::Text => return Err(NotifyError::UnsupportedChannel(method)),
        };
        Ok(notifier)
    }
}

/// The address a user should be reached at on their preferred channel.
///
/// A missing phone number resolves to an empty contact; it is not validated.
pub fn get_user_contact(user: &User) -> Result<&str, NotifyError> {
    let contact = match user.notification_method()? {
        NotificationMethod::Email => user.email.as_ref(),
        NotificationMethod::Text => user.phone.as_deref().unwrap_or_default(),
    };
    Ok(contact)
}
