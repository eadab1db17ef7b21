//! Header Component
//!
//! The application header with title and active language.

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::i18n::{t, Locale};
use crate::theme::colors::ChallengeColors;

/// Header component
#[derive(IntoElement)]
pub struct Header {
    locale: Locale,
}

impl Header {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl RenderOnce for Header {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .h(px(48.0))
            .w_full()
            .px(px(16.0))
            .bg(ChallengeColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_color(ChallengeColors::text_light())
                    .text_size(px(18.0))
                    .child(t(self.locale, "app-title")),
            )
            .child(
                div()
                    .text_color(ChallengeColors::text_light())
                    .text_size(px(12.0))
                    .child(self.locale.display_name()),
            )
    }
}
