//! GlyphKit Settings Crate
//!
//! Handles two-tone rendering configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, SvgSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
