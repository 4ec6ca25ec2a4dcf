use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text},
};

use crate::core::route::Route;
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets,
};

/// Catch-all view for paths the route table does not know.
#[derive(Debug, Clone, Default)]
pub struct NotFoundScreen;

impl Screen for NotFoundScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content = column![
            text("404").size(48),
            text("Oops! Page not found")
                .size(15)
                .color(widgets::muted_text_color()),
            button(text("Return to Home").size(14)).on_press(navigate(Route::Landing)),
        ]
        .spacing(16)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
