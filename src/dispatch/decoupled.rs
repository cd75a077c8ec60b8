use crate::domain::User;
use crate::error::NotifyError;
use crate::notifiers::{get_user_contact, NotifierResolver};

/// Routes a message to whichever notifier serves the user's preference.
///
/// Knows nothing about how any channel delivers; new channels are added to
/// the resolver, not here.
#[derive(Clone)]
pub struct DecoupledNotifier {
    notifiers: NotifierResolver,
}

impl DecoupledNotifier {
    pub fn new(notifiers: NotifierResolver) -> Self {
        Self { notifiers }
    }

    #[tracing::instrument(
        name = "Notifying a user",
        skip(self, user, message),
        fields(
            user_email = %user.email,
            notification_preference = %user.notification_preference
        )
    )]
    pub async fn notify_user(&self, user: &User, message: &str) -> Result<(), NotifyError> {
        let notifier = self.notifiers.get_notifier(user.notification_method()?)?;
        let contact = get_user_contact(user)?;
        notifier.notify(contact, message).await
    }
}
