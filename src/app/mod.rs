//! Application Layer
//!
//! Contains app initialization, window management, key bindings, and the workspace.

pub mod actions;
pub mod application;
pub mod workspace;
