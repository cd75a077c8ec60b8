use crate::domain::NotificationMethod;

/// Failures a notification dispatch can surface to its caller.
#[derive(thiserror::Error)]
pub enum NotifyError {
    #[error("No notifier is available for the {0} channel.")]
    UnsupportedChannel(NotificationMethod),
    #[error("Invalid notification preference for user {email}!")]
    InvalidPreference { email: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl std::fmt::Debug for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Failures raised while handing a message to the mail transport.
#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("{address} is not a valid mailbox address.")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },
    #[error("Failed to build the email message.")]
    Message(#[from] lettre::error::Error),
    #[error("The mail server refused the session or the message.")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
