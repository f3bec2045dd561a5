pub mod config;
pub mod types;

pub use config::{Config, ConfigError, LocalePolicy};
pub use types::{MediaType, TitleRecord};
