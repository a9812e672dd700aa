//! Configuration module for DocHunt
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DocHuntPaths;
pub use settings::Settings;
