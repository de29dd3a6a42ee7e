pub mod breed;
pub mod config;

pub use breed::normalize_breed_name;
pub use config::{Config, DogApiConfig, LoggingConfig};
