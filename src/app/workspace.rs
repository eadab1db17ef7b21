//! Workspace - Main Shell with Layout
//!
//! Hosts one instance of each widget under the header. The widgets share
//! nothing; the workspace only lays them out.

use gpui::{
    div, prelude::*, px, AppContext, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::components::layout::header::Header;
use crate::components::widgets::click_toggle::ClickToggle;
use crate::components::widgets::step_counter::StepCounter;
use crate::domain::config::AppConfig;
use crate::i18n::{t, Locale};
use crate::theme::colors::ChallengeColors;

/// Main workspace containing the application layout
pub struct Workspace {
    locale: Locale,
    toggle: Entity<ClickToggle>,
    counter: Entity<StepCounter>,
}

impl Workspace {
    pub fn new(config: &AppConfig, cx: &mut Context<Self>) -> Self {
        let locale = config.locale;
        let step_config = config.counter;

        let toggle = cx.new(|cx| ClickToggle::new(locale, cx));
        let counter = cx.new(|cx| StepCounter::new(step_config, locale, cx));

        Self {
            locale,
            toggle,
            counter,
        }
    }

    fn render_card(&self, title: SharedString, body: impl IntoElement) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_3()
            .p(px(16.0))
            .bg(ChallengeColors::card_bg())
            .border_1()
            .border_color(ChallengeColors::border())
            .rounded_md()
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(ChallengeColors::text_secondary())
                    .child(title),
            )
            .child(body)
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(ChallengeColors::background())
            .child(Header::new(self.locale))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .gap_4()
                    .p(px(16.0))
                    .child(self.render_card(t(self.locale, "toggle-title"), self.toggle.clone()))
                    .child(self.render_card(t(self.locale, "counter-title"), self.counter.clone())),
            )
    }
}
