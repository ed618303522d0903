//! Configuration module for groupsplit
//!
//! - Path resolution for the settings file and export directory
//! - Persisted user settings

pub mod paths;
pub mod settings;

pub use paths::GroupsplitPaths;
pub use settings::{OutputFormat, Settings};
