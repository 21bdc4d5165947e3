/// Domain ordering arrays for enumerated fields
pub mod orders;

/// Settings file and environment overrides
pub mod settings;

pub use orders::DomainOrders;
pub use settings::{AppConfig, load_app_configuration, load_config};
