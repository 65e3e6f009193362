//! Configuration for docket.
//!
//! This module defines the Config struct that represents `config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use operations::default_config_path;
pub use types::IndexStrategy;
