use crate::domain::{NotificationMethod, UserEmail};
use crate::error::NotifyError;

/// Contact details of someone who can be notified.
///
/// `notification_preference` holds the value as it was declared for the user,
/// which is not necessarily one of the supported [`NotificationMethod`]s.
#[derive(Debug, Clone)]
pub struct User {
    pub email: UserEmail,
    pub phone: Option<String>,
    pub notification_preference: String,
}

impl User {
    pub fn new(email: UserEmail) -> Self {
        Self {
            email,
            phone: None,
            notification_preference: NotificationMethod::default().as_str().to_string(),
        }
    }

    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..self
        }
    }

    pub fn with_notification_method(self, method: NotificationMethod) -> Self {
        self.with_notification_preference(method.as_str())
    }

    pub fn with_notification_preference(self, preference: impl Into<String>) -> Self {
        Self {
            notification_preference: preference.into(),
            ..self
        }
    }

    pub fn notification_method(&self) -> Result<NotificationMethod, NotifyError> {
        NotificationMethod::try_from(self.notification_preference.clone()).map_err(|_| {
            NotifyError::InvalidPreference {
                email: self.email.to_string(),
            }
        })
    }
}
