pub mod config;
pub mod selection;

pub use config::{AppConfig, CONFIG_ENV};
pub use selection::{parse_algorithm, resolve_algorithm, resolve_mode, DEFAULT_ALGORITHM};
