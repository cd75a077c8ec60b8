/// The channels a user can ask to be notified on.
///
/// Adding a variant makes every `match` over it in the crate fail to compile
/// until the notifier resolver and the contact resolver both handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationMethod {
    #[default]
    Email,
    Text,
}

impl NotificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationMethod::Email => "EMAIL",
            NotificationMethod::Text => "TEXT",
        }
    }
}

impl std::fmt::Display for NotificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for NotificationMethod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Ok(Self::Email),
            "TEXT" => Ok(Self::Text),
            other => Err(format!(
                "{} is not a supported notification method. Use either 'EMAIL' or 'TEXT'.",
                other
            )),
        }
    }
}
