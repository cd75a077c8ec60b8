use anyhow::{anyhow, Context};
use notifications::configuration::get_configuration;
use notifications::domain::{User, UserEmail};
use notifications::startup::build_notifier;
use notifications::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("notifications".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let mut args = std::env::args().skip(1);
    let (recipient, message) = match (args.next(), args.next()) {
        (Some(recipient), Some(message)) => (recipient, message),
        _ => return Err(anyhow!("Usage: notifications <recipient-email> <message>")),
    };

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let notifier = build_notifier(&configuration)?;

    let user = User::new(UserEmail::parse(recipient).map_err(|e| anyhow!(e))?);
    notifier.notify_user(&user, &message).await?;
    Ok(())
}
