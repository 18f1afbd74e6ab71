pub mod args;
pub mod destination;
pub mod settings;
pub mod test_runner;

pub use destination::{Delivery, Destination, DestinationError, Target};
pub use settings::{Overrides, Settings, SettingsError};
