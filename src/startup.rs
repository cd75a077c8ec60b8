use crate::configuration::Settings;
use crate::dispatch::{CoupledNotifier, DecoupledNotifier};
use crate::email::{MailTransport, SmtpMailTransport};
use crate::notifiers::{EmailNotifier, NotifierResolver};
use anyhow::anyhow;
use std::sync::Arc;

pub fn build_notifier(configuration: &Settings) -> Result<DecoupledNotifier, anyhow::Error> {
    let transport = SmtpMailTransport::new(&configuration.smtp)?;
    build_notifier_with_transport(configuration, Arc::new(transport))
}

/// Wires the dispatcher around an already-opened mail transport.
pub fn build_notifier_with_transport(
    configuration: &Settings,
    transport: Arc<dyn MailTransport>,
) -> Result<DecoupledNotifier, anyhow::Error> {
    let sender = configuration
        .smtp
        .sender()
        .map_err(|e| anyhow!(e).context("Invalid no-reply sender address."))?;
    let email_notifier = EmailNotifier::new(transport, sender);
    Ok(DecoupledNotifier::new(NotifierResolver::new(email_notifier)))
}

pub fn build_coupled_notifier(configuration: &Settings) -> CoupledNotifier {
    CoupledNotifier::new(configuration.smtp.clone())
}
