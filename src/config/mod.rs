//! Configuration module for salesdash
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SalesPaths;
pub use settings::Settings;
