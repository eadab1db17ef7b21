//! Components - Reusable UI Components
//!
//! UI components that don't do I/O.

pub mod layout;
pub mod primitives;
pub mod widgets;
