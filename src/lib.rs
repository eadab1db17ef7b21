//! UI Challenges Library
//!
//! Two small stateful widgets hosted in a GPUI window: a one-way click
//! toggle and a bounded step counter.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod theme;
pub mod utils;
