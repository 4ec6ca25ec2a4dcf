use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text},
};

use crate::core::route::{Role, Route};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets,
};

/// Public landing page with the three portal entry points.
#[derive(Debug, Clone, Default)]
pub struct LandingScreen;

impl Screen for LandingScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let hero = column![
            text("GovTrack").size(18).color(widgets::muted_text_color()),
            text("Transparent Government Project Tracker").size(36),
            text(
                "Empowering citizens with real-time visibility into public infrastructure \
                 projects. Track progress, access documents, and ensure accountability."
            )
            .size(15)
            .color(widgets::muted_text_color()),
            row![
                button("Citizen Login").on_press(navigate(Route::Login(Role::Citizen))),
                button("Contractor Login").on_press(navigate(Route::Login(Role::Contractor))),
                button("Admin Login").on_press(navigate(Route::Login(Role::Admin))),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .align_x(Center);

        let stats = row![
            landing_stat("150+", "Active Projects"),
            landing_stat("₹2,500Cr", "Budget Tracked"),
            landing_stat("12,000+", "Citizens Engaged"),
            landing_stat("98%", "Complaint Resolution"),
        ]
        .spacing(32);

        let features = row![
            feature(
                "Complete Transparency",
                "Track every government project from inception to completion with real-time \
                 updates."
            ),
            feature(
                "Progress Monitoring",
                "Visual progress bars and detailed timelines keep citizens informed at every \
                 stage."
            ),
            feature(
                "Document Access",
                "Access project documents, budgets, and contractor details in one place."
            ),
            feature(
                "Accountability",
                "File complaints and track resolution status to ensure project quality."
            ),
        ]
        .spacing(16);

        let content = column![hero, stats, features]
            .spacing(48)
            .padding(48)
            .align_x(Center)
            .width(Length::Fill);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn landing_stat<'a, M: 'a>(value: &'a str, label: &'a str) -> Element<'a, M> {
    column![
        text(value).size(28),
        text(label).size(12).color(widgets::muted_text_color()),
    ]
    .spacing(2)
    .align_x(Center)
    .into()
}

fn feature<'a, M: 'a>(title: &'a str, description: &'a str) -> Element<'a, M> {
    widgets::card(
        column![
            text(title).size(15),
            text(description)
                .size(12)
                .color(widgets::muted_text_color()),
        ]
        .spacing(8),
    )
    .width(Length::Fixed(230.0))
    .into()
}
