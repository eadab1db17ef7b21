//! Widget Components
//!
//! Stateful leaf views; each owns its own state record.

pub mod click_toggle;
pub mod step_counter;
