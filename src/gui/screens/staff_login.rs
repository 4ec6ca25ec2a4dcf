use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text, text_input},
};

use crate::core::route::{Role, Route};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate, toast},
    widgets,
};

/// Login form for the contractor and admin portals. Submission always
/// succeeds and navigates straight to the role dashboard.
#[derive(Debug, Clone)]
pub struct StaffLoginScreen {
    role: Role,
    email: String,
    secondary: String,
}

#[derive(Debug, Clone)]
pub enum StaffLoginMessage {
    EmailChanged(String),
    SecondaryChanged(String),
    Submit,
}

fn msg(message: StaffLoginMessage) -> ScreenMessage<StaffLoginScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl StaffLoginScreen {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            email: String::new(),
            secondary: String::new(),
        }
    }

    fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.secondary.trim().is_empty()
    }
}

impl Screen for StaffLoginScreen {
    type Message = StaffLoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let (title, subtitle, email_label, email_placeholder, secondary_label, footer) =
            match self.role {
                Role::Admin => (
                    "Admin Portal",
                    "Secure access to administrative controls",
                    "Admin Email",
                    "admin@govtrack.gov",
                    "Password",
                    "Authorized personnel only",
                ),
                _ => (
                    "Contractor Portal",
                    "Sign in to manage your assigned projects",
                    "Email Address",
                    "contractor@company.com",
                    "Contractor ID",
                    "Contact admin if you don't have contractor credentials",
                ),
            };

        let secondary_input = match self.role {
            Role::Admin => text_input("••••••••", &self.secondary)
                .on_input(|v| msg(StaffLoginMessage::SecondaryChanged(v)))
                .secure(true)
                .padding(8),
            _ => text_input("CON-XXXXX", &self.secondary)
                .on_input(|v| msg(StaffLoginMessage::SecondaryChanged(v)))
                .padding(8),
        };

        let mut submit = button(text("Sign In").size(14)).width(Length::Fill);
        if self.can_submit() {
            submit = submit.on_press(msg(StaffLoginMessage::Submit));
        }

        let card = widgets::card(
            column![
                text(title).size(22),
                text(subtitle).size(13).color(widgets::muted_text_color()),
                text(email_label).size(13),
                text_input(email_placeholder, &self.email)
                    .on_input(|v| msg(StaffLoginMessage::EmailChanged(v)))
                    .padding(8),
                text(secondary_label).size(13),
                secondary_input,
                submit,
                text(footer).size(11).color(widgets::muted_text_color()),
            ]
            .spacing(10),
        )
        .width(Length::Fixed(380.0));

        let content = column![
            button(text("Back to Home").size(13))
                .style(button::text)
                .on_press(navigate(Route::Landing)),
            card,
        ]
        .spacing(12)
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
        match message {
            StaffLoginMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            StaffLoginMessage::SecondaryChanged(value) => {
                self.secondary = value;
                Task::none()
            }
            StaffLoginMessage::Submit => {
                let (title, body) = match self.role {
                    Role::Admin => (
                        "Admin Login Successful",
                        "Welcome to the Admin Dashboard.",
                    ),
                    _ => (
                        "Login Successful",
                        "Welcome back to the Contractor Portal.",
                    ),
                };
                Task::batch([
                    Task::done(toast(title, body)),
                    Task::done(navigate(Route::Dashboard(self.role))),
                ])
            }
        }
    }
}
