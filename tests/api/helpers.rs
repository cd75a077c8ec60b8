use anyhow::anyhow;
use async_trait::async_trait;
use notifications::configuration::{get_configuration, Settings};
use notifications::dispatch::{CoupledNotifier, DecoupledNotifier};
use notifications::domain::{NotificationMethod, User, UserEmail};
use notifications::email::{Envelope, MailTransport};
use notifications::error::TransportError;
use notifications::startup::{build_coupled_notifier, build_notifier_with_transport};
use notifications::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".into();
    let subscriber_name = "test".into();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Stands in for the mail server: remembers every envelope it was handed.
#[derive(Default)]
pub struct RecordingMailTransport {
    pub sent_emails: Mutex<Vec<Envelope>>,
    pub attempts: AtomicUsize,
    reject_login: bool,
}

impl RecordingMailTransport {
    pub fn rejecting_login() -> Self {
        Self {
            reject_login: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn send(&self, envelope: &Envelope) -> Result<(), TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.reject_login {
            return Err(TransportError::Other(anyhow!(
                "535 5.7.8 Authentication credentials invalid"
            )));
        }
        self.sent_emails.lock().unwrap().push(envelope.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub notifier: DecoupledNotifier,
    pub coupled_notifier: CoupledNotifier,
    pub email_client: Arc<RecordingMailTransport>,
    pub configuration: Settings,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(RecordingMailTransport::default())
}

pub fn spawn_app_with(transport: RecordingMailTransport) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let email_client = Arc::new(transport);
    let notifier = build_notifier_with_transport(&configuration, email_client.clone())
        .expect("Failed to build the notifier.");
    let coupled_notifier = build_coupled_notifier(&configuration);

    TestApp {
        notifier,
        coupled_notifier,
        email_client,
        configuration,
    }
}

pub fn email_user(email: &str) -> User {
    User::new(UserEmail::parse(email.to_string()).unwrap())
}

pub fn text_user(email: &str, phone: &str) -> User {
    email_user(email)
        .with_phone(phone)
        .with_notification_method(NotificationMethod::Text)
}
