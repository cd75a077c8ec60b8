use crate::helpers::{email_user, spawn_app, text_user};
use claim::assert_err;
use notifications::startup::build_coupled_notifier;

#[tokio::test]
async fn text_users_are_not_implemented() {
    // arrange
    let app = spawn_app();
    let user = text_user("b@x.com", "555-1234");

    // act
    let error = assert_err!(app.coupled_notifier.notify_user(&user, "hi").await);

    // assert
    assert_eq!(error.to_string(), "Notification method TEXT not implemented!");
}

#[tokio::test]
async fn an_unreachable_mail_server_is_reported_to_the_caller() {
    // arrange
    let mut app = spawn_app();
    app.configuration.smtp.host = "127.0.0.1".into();
    app.configuration.smtp.port = 9;
    app.configuration.smtp.timeout_milliseconds = 200;
    let coupled_notifier = build_coupled_notifier(&app.configuration);
    let user = email_user("a@x.com");

    // act
    let outcome = coupled_notifier.notify_user(&user, "hi").await;

    // assert
    assert_err!(outcome);
}
