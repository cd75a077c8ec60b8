mod notification_method;
mod user;
mod user_email;

pub use notification_method::NotificationMethod;
pub use user::User;
pub use user_email::UserEmail;
