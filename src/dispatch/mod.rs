mod coupled;
mod decoupled;

pub use coupled::CoupledNotifier;
pub use decoupled::DecoupledNotifier;
