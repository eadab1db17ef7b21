//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::ChallengeColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding and font size
    fn metrics(self) -> (f32, f32, f32) {
        match self {
            ButtonSize::Small => (8.0, 4.0, 12.0),
            ButtonSize::Medium => (16.0, 8.0, 14.0),
            ButtonSize::Large => (24.0, 12.0, 18.0),
        }
    }
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                ChallengeColors::button_primary_bg(),
                ChallengeColors::button_primary_text(),
                ChallengeColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                ChallengeColors::button_secondary_bg(),
                ChallengeColors::text_primary(),
                ChallengeColors::button_secondary_hover(),
            ),
        };

        let (padding_x, padding_y, font_size) = self.size.metrics();

        // Bounds are enforced by the handler, so the button never greys out
        let mut element = div()
            .id(self.id)
            .px(px(padding_x))
            .py(px(padding_y))
            .min_w(px(40.0))
            .flex()
            .justify_center()
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(font_size))
            .rounded_md()
            .cursor_pointer()
            .hover(move |s| s.bg(hover_bg))
            .child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
