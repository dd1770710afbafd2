//! Engine configuration

mod settings;

pub use settings::{LoggingSettings, Settings, VariantSettings};
