//! Configuration and path management for the Fynix CLI
//!
//! The computation core has no configuration of its own; this module only
//! serves the CLI front-end, which remembers the user's preferred
//! allocation settings and currency symbol between runs.

pub mod paths;
pub mod settings;

pub use paths::FynixPaths;
pub use settings::Settings;
