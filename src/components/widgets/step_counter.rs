//! Step Counter Widget
//!
//! Shows the current count in a well with a `-` and a `+` button. Moves that
//! would leave `0..=max` are silently ignored.

use gpui::{
    div, prelude::*, px, App, Context, FocusHandle, Focusable, InteractiveElement, IntoElement,
    ParentElement, Render, Styled, Window,
};

use crate::app::actions::{CounterAction, COUNTER_CONTEXT};
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::domain::counter::{CounterState, StepConfig};
use crate::i18n::{t_format, Locale};
use crate::theme::colors::ChallengeColors;

/// Control buttons in display order: id, label, variant, action
const CONTROLS: [(&str, &str, ButtonVariant, CounterAction); 2] = [
    ("counter-decrement", "-", ButtonVariant::Secondary, CounterAction::Decrement),
    ("counter-increment", "+", ButtonVariant::Primary, CounterAction::Increment),
];

/// Bounded step counter view
pub struct StepCounter {
    state: CounterState,
    config: StepConfig,
    locale: Locale,
    focus_handle: FocusHandle,
}

impl StepCounter {
    pub fn new(config: StepConfig, locale: Locale, cx: &mut Context<Self>) -> Self {
        tracing::debug!(step = config.step(), max = config.max(), "step counter mounted");
        Self {
            state: CounterState::default(),
            config,
            locale,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Current counter state
    pub fn state(&self) -> CounterState {
        self.state
    }

    /// Configuration fixed at construction
    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Run one trigger; buttons and key bindings both land here
    pub fn handle(&mut self, action: CounterAction, cx: &mut Context<Self>) {
        let next = match action {
            CounterAction::Increment => self.state.increment(&self.config),
            CounterAction::Decrement => self.state.decrement(&self.config),
        };
        if next != self.state {
            self.state = next;
            cx.notify();
        }
    }

    fn on_action(&mut self, action: &CounterAction, _window: &mut Window, cx: &mut Context<Self>) {
        self.handle(*action, cx);
    }
}

impl Focusable for StepCounter {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for StepCounter {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let step = self.config.step().to_string();
        let max = self.config.max().to_string();
        let bounds = t_format(
            self.locale,
            "counter-bounds",
            &[("step", step.as_str()), ("max", max.as_str())],
        );

        div()
            .key_context(COUNTER_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_action))
            .flex()
            .flex_col()
            .gap_2()
            .child(
                // Display well
                div()
                    .p(px(19.0))
                    .bg(ChallengeColors::well_bg())
                    .border_1()
                    .border_color(ChallengeColors::well_border())
                    .rounded_md()
                    .text_size(px(24.0))
                    .text_color(ChallengeColors::text_primary())
                    .child(self.state.display()),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .gap_2()
                    .children(CONTROLS.iter().map(|&(id, label, variant, action)| {
                        Button::new(id, label)
                            .variant(variant)
                            .size(ButtonSize::Large)
                            .on_click(cx.listener(move |this, _, _window, cx| {
                                this.handle(action, cx);
                            }))
                    })),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(ChallengeColors::text_secondary())
                    .child(bounds),
            )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gpui::{AppContext, Entity, TestAppContext};

    use super::*;

    fn mount(cx: &mut TestAppContext, config: StepConfig) -> Entity<StepCounter> {
        cx.new(|cx| StepCounter::new(config, Locale::EnUS, cx))
    }

    fn press(counter: &Entity<StepCounter>, action: CounterAction, cx: &mut TestAppContext) {
        counter.update(cx, |view, cx| view.handle(action, cx));
    }

    fn count(counter: &Entity<StepCounter>, cx: &mut TestAppContext) -> u32 {
        counter.read_with(cx, |view, _| view.state().count())
    }

    #[test]
    fn test_controls_minus_then_plus() {
        let [minus, plus] = CONTROLS;
        assert_eq!((minus.1, minus.3), ("-", CounterAction::Decrement));
        assert_eq!((plus.1, plus.3), ("+", CounterAction::Increment));
    }

    #[gpui::test]
    fn test_mounts_at_zero_with_config(cx: &mut TestAppContext) {
        let config = StepConfig::new(5, 7).unwrap();
        let counter = mount(cx, config);

        assert_eq!(count(&counter, cx), 0);
        assert_eq!(counter.read_with(cx, |view, _| *view.config()), config);
    }

    #[gpui::test]
    fn test_increment_to_max_then_noop(cx: &mut TestAppContext) {
        let counter = mount(cx, StepConfig::default());

        for _ in 0..20 {
            press(&counter, CounterAction::Increment, cx);
        }
        assert_eq!(count(&counter, cx), 100);

        press(&counter, CounterAction::Increment, cx);
        assert_eq!(count(&counter, cx), 100);
    }

    #[gpui::test]
    fn test_decrement_at_zero_is_noop(cx: &mut TestAppContext) {
        let counter = mount(cx, StepConfig::default());

        press(&counter, CounterAction::Decrement, cx);
        assert_eq!(count(&counter, cx), 0);

        press(&counter, CounterAction::Increment, cx);
        press(&counter, CounterAction::Decrement, cx);
        assert_eq!(count(&counter, cx), 0);
    }

    #[gpui::test]
    fn test_stalls_short_of_max(cx: &mut TestAppContext) {
        let counter = mount(cx, StepConfig::new(5, 7).unwrap());

        press(&counter, CounterAction::Increment, cx);
        press(&counter, CounterAction::Increment, cx);
        assert_eq!(count(&counter, cx), 5);
    }

    #[gpui::test]
    fn test_notifies_only_on_commit(cx: &mut TestAppContext) {
        let counter = mount(cx, StepConfig::default());
        let notified = Rc::new(Cell::new(0usize));
        let observed = notified.clone();
        cx.update(|cx| {
            cx.observe(&counter, move |_, _| observed.set(observed.get() + 1))
                .detach();
        });

        press(&counter, CounterAction::Decrement, cx);
        assert_eq!(notified.get(), 0);

        press(&counter, CounterAction::Increment, cx);
        assert_eq!(notified.get(), 1);
    }
}
