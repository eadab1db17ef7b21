//! Click Toggle Widget
//!
//! A label reading "Not clicked" until its first click, then "Clicked" for
//! the rest of its lifetime.

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, FocusHandle, Focusable, InteractiveElement,
    IntoElement, ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::actions::{ToggleAction, TOGGLE_CONTEXT};
use crate::domain::toggle::ClickState;
use crate::i18n::{t, Locale};
use crate::theme::colors::ChallengeColors;

/// One-way click latch view
pub struct ClickToggle {
    state: ClickState,
    locale: Locale,
    focus_handle: FocusHandle,
}

impl ClickToggle {
    pub fn new(locale: Locale, cx: &mut Context<Self>) -> Self {
        Self {
            state: ClickState::default(),
            locale,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Current latch state
    pub fn state(&self) -> ClickState {
        self.state
    }

    /// Run one trigger; clicks and key bindings both land here
    pub fn handle(&mut self, action: ToggleAction, cx: &mut Context<Self>) {
        let ToggleAction::Click = action;
        let next = self.state.click();
        if next != self.state {
            tracing::debug!("click toggle latched");
        }
        self.state = next;
        cx.notify();
    }

    fn on_click(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.handle(ToggleAction::Click, cx);
    }

    fn on_action(&mut self, action: &ToggleAction, _window: &mut Window, cx: &mut Context<Self>) {
        self.handle(*action, cx);
    }
}

impl Focusable for ClickToggle {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ClickToggle {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let text_color = if self.state.is_clicked() {
            ChallengeColors::success()
        } else {
            ChallengeColors::text_primary()
        };

        div()
            .id("click-toggle")
            .key_context(TOGGLE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_action))
            .on_click(cx.listener(Self::on_click))
            .cursor_pointer()
            .px(px(12.0))
            .py(px(8.0))
            .text_size(px(16.0))
            .text_color(text_color)
            .child(t(self.locale, self.state.label_key()))
    }
}

#[cfg(test)]
mod tests {
    use gpui::{AppContext, Entity, TestAppContext};

    use super::*;

    fn mount(cx: &mut TestAppContext) -> Entity<ClickToggle> {
        cx.new(|cx| ClickToggle::new(Locale::EnUS, cx))
    }

    fn label(toggle: &Entity<ClickToggle>, cx: &mut TestAppContext) -> String {
        toggle.read_with(cx, |view, _| t(view.locale, view.state().label_key()).to_string())
    }

    #[gpui::test]
    fn test_starts_not_clicked(cx: &mut TestAppContext) {
        let toggle = mount(cx);

        assert_eq!(toggle.read_with(cx, |view, _| view.state()), ClickState::NotClicked);
        assert_eq!(label(&toggle, cx), "Not clicked");
    }

    #[gpui::test]
    fn test_click_latches_for_good(cx: &mut TestAppContext) {
        let toggle = mount(cx);

        toggle.update(cx, |view, cx| view.handle(ToggleAction::Click, cx));
        assert_eq!(label(&toggle, cx), "Clicked");

        for _ in 0..5 {
            toggle.update(cx, |view, cx| view.handle(ToggleAction::Click, cx));
            assert!(toggle.read_with(cx, |view, _| view.state().is_clicked()));
        }
        assert_eq!(label(&toggle, cx), "Clicked");
    }
}
