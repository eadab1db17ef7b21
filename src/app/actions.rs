//! Keyboard Actions and Shortcuts
//!
//! Every widget action runs the same transition as its click trigger.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Key context of the step counter view
pub const COUNTER_CONTEXT: &str = "StepCounter";
/// Key context of the click toggle view
pub const TOGGLE_CONTEXT: &str = "ClickToggle";

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Step counter actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum CounterAction {
    /// Add one step
    Increment,
    /// Subtract one step
    Decrement,
}

/// Click toggle actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ToggleAction {
    /// Latch the toggle
    Click,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Step counter
        KeyBinding::new("+", CounterAction::Increment, Some(COUNTER_CONTEXT)),
        KeyBinding::new("=", CounterAction::Increment, Some(COUNTER_CONTEXT)),
        KeyBinding::new("up", CounterAction::Increment, Some(COUNTER_CONTEXT)),
        KeyBinding::new("-", CounterAction::Decrement, Some(COUNTER_CONTEXT)),
        KeyBinding::new("down", CounterAction::Decrement, Some(COUNTER_CONTEXT)),
        // Click toggle
        KeyBinding::new("space", ToggleAction::Click, Some(TOGGLE_CONTEXT)),
        KeyBinding::new("enter", ToggleAction::Click, Some(TOGGLE_CONTEXT)),
    ]
}
