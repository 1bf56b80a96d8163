//! Counter Page
//!
//! The single page of the app: a greeting button, a heading, and the click
//! counter card.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::i18n::t;
use crate::state::counter_state::CounterState;
use crate::theme::colors::UiColors;
use crate::theme::typography::Typography;

/// Counter page component
///
/// Owns the counter entity; nothing outside the page can reach it.
pub struct CounterPage {
    entities: AppEntities,
    counter: Entity<CounterState>,
}

impl CounterPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let counter = cx.new(|_| CounterState::default());

        // Re-render on every increment
        cx.observe(&counter, |_this, _, cx| cx.notify()).detach();

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, counter }
    }

    /// Apply one increment trigger
    ///
    /// The update closure receives the current state, so triggers queued
    /// before a re-render are never lost.
    fn on_increment(&mut self, cx: &mut Context<Self>) {
        self.counter.update(cx, |counter, cx| {
            counter.increment();
            cx.notify();
        });
    }
}

impl Render for CounterPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let count_label = self.counter.read(cx).label();

        div()
            .id("counter-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap_6()
            .p_4()
            // Greeting button
            .child(Button::primary("greeting-btn", "Hello there!"))
            // Heading
            .child(
                div()
                    .text_size(px(Typography::TEXT_3XL))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(UiColors::text_primary())
                    .child("Rust + GPUI"),
            )
            // Counter card
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_4()
                    .p_8()
                    .bg(UiColors::card_bg())
                    .border_1()
                    .border_color(UiColors::border())
                    .rounded_md()
                    .child(
                        Button::secondary("count-btn", count_label).on_click(cx.listener(
                            |this, _event: &ClickEvent, _window, cx| {
                                this.on_increment(cx);
                            },
                        )),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(UiColors::text_secondary())
                            .child(t(locale, "counter-hint")),
                    ),
            )
    }
}
