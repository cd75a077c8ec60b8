pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod email;
pub mod error;
pub mod notifiers;
pub mod startup;
pub mod telemetry;
