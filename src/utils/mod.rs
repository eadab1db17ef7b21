//! Utils - Filesystem and Configuration Helpers

pub mod config_store;
