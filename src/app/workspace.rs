//! Workspace - Main Shell
//!
//! The workspace is the main container that holds the header and the counter
//! page.

use gpui::{
    div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::features::counter::page::CounterPage;
use crate::theme::colors::UiColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    counter_page: Entity<CounterPage>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));

        // Create the single page
        let counter_page = cx.new(|cx| CounterPage::new(entities.clone(), cx));

        Self {
            header,
            counter_page,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Content
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.counter_page.clone()),
            )
    }
}
