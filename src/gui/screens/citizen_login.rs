use std::time::Duration;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, text, text_input},
};

use crate::core::flow::{RegistrationFlow, RegistrationStep};
use crate::core::route::{Role, Route};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate, toast},
    widgets,
};

/// Fixed simulated round trip before the login form navigates.
const LOGIN_DELAY: Duration = Duration::from_secs(1);

/// Citizen login with the cosmetic four-step registration flow
/// (login → aadhaar → otp → register). No real verification happens
/// anywhere; the gates are digit-length checks in [`RegistrationFlow`].
#[derive(Debug, Clone, Default)]
pub struct CitizenLoginScreen {
    flow: RegistrationFlow,
    pending: bool,
}

#[derive(Debug, Clone)]
pub enum CitizenLoginMessage {
    EmailChanged(String),
    AadhaarChanged(String),
    OtpChanged(String),
    SubmitLogin,
    LoginDelayElapsed,
    StartRegistration,
    BackToLogin,
    SubmitAadhaar,
    SubmitOtp,
    ResendCode,
    CompleteRegistration,
}

fn msg(message: CitizenLoginMessage) -> ScreenMessage<CitizenLoginScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for CitizenLoginScreen {
    type Message = CitizenLoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let (title, subtitle) = match self.flow.step {
            RegistrationStep::Login => ("Welcome Back", "Sign in with your email to continue"),
            RegistrationStep::Aadhaar => {
                ("Aadhaar Verification", "Verify your identity using Aadhaar")
            }
            RegistrationStep::Otp => {
                ("Enter OTP", "Enter the 6-digit code sent to your mobile")
            }
            RegistrationStep::Register => {
                ("Complete Registration", "Link your email for future logins")
            }
        };

        let form: Element<'_, ScreenMessage<Self>> = match self.flow.step {
            RegistrationStep::Login => {
                let mut submit = button(text("Send Login OTP").size(14)).width(Length::Fill);
                if !self.pending && !self.flow.email.trim().is_empty() {
                    submit = submit.on_press(msg(CitizenLoginMessage::SubmitLogin));
                }
                column![
                    text("Email Address").size(13),
                    text_input("citizen@example.com", &self.flow.email)
                        .on_input(|v| msg(CitizenLoginMessage::EmailChanged(v)))
                        .padding(8),
                    submit,
                    text("New to GovTrack?")
                        .size(11)
                        .color(widgets::muted_text_color()),
                    button(text("Register with Aadhaar").size(14))
                        .style(button::secondary)
                        .width(Length::Fill)
                        .on_press(msg(CitizenLoginMessage::StartRegistration)),
                ]
                .spacing(10)
                .into()
            }
            RegistrationStep::Aadhaar => {
                let mut submit = button(text("Verify Aadhaar").size(14)).width(Length::Fill);
                if self.flow.aadhaar_valid() {
                    submit = submit.on_press(msg(CitizenLoginMessage::SubmitAadhaar));
                }
                column![
                    text("Aadhaar Number").size(13),
                    text_input("XXXX XXXX XXXX", &self.flow.aadhaar)
                        .on_input(|v| msg(CitizenLoginMessage::AadhaarChanged(v)))
                        .padding(8),
                    text("Enter your 12-digit Aadhaar number")
                        .size(11)
                        .color(widgets::muted_text_color()),
                    submit,
                    button(text("Back to Login").size(14))
                        .style(button::text)
                        .width(Length::Fill)
                        .on_press(msg(CitizenLoginMessage::BackToLogin)),
                ]
                .spacing(10)
                .into()
            }
            RegistrationStep::Otp => {
                let mut submit = button(text("Verify OTP").size(14)).width(Length::Fill);
                if self.flow.otp_valid() {
                    submit = submit.on_press(msg(CitizenLoginMessage::SubmitOtp));
                }
                column![
                    text("Verification Code").size(13),
                    text_input("XXXXXX", &self.flow.otp)
                        .on_input(|v| msg(CitizenLoginMessage::OtpChanged(v)))
                        .padding(8),
                    text("Enter the code sent to your Aadhaar-linked mobile")
                        .size(11)
                        .color(widgets::muted_text_color()),
                    submit,
                    button(text("Resend Code").size(14))
                        .style(button::text)
                        .width(Length::Fill)
                        .on_press(msg(CitizenLoginMessage::ResendCode)),
                ]
                .spacing(10)
                .into()
            }
            RegistrationStep::Register => {
                let mut submit =
                    button(text("Complete Registration").size(14)).width(Length::Fill);
                if !self.flow.email.trim().is_empty() {
                    submit = submit.on_press(msg(CitizenLoginMessage::CompleteRegistration));
                }
                column![
                    text("Aadhaar verified successfully")
                        .size(13)
                        .color(widgets::Tone::Success.color()),
                    text("Email Address").size(13),
                    text_input("your.email@example.com", &self.flow.email)
                        .on_input(|v| msg(CitizenLoginMessage::EmailChanged(v)))
                        .padding(8),
                    text("You'll use this email for future logins")
                        .size(11)
                        .color(widgets::muted_text_color()),
                    submit,
                ]
                .spacing(10)
                .into()
            }
        };

        let card = widgets::card(
            column![
                text(title).size(22),
                text(subtitle).size(13).color(widgets::muted_text_color()),
                form,
            ]
            .spacing(14),
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
            CitizenLoginMessage::EmailChanged(value) => {
                self.flow.set_email(value);
                Task::none()
            }
            CitizenLoginMessage::AadhaarChanged(value) => {
                self.flow.set_aadhaar(&value);
                Task::none()
            }
            CitizenLoginMessage::OtpChanged(value) => {
                self.flow.set_otp(&value);
                Task::none()
            }
            CitizenLoginMessage::SubmitLogin => {
                self.pending = true;
                Task::batch([
                    Task::done(toast(
                        "OTP Sent",
                        "Please check your email for the login code.",
                    )),
                    Task::perform(tokio::time::sleep(LOGIN_DELAY), |_| {
                        msg(CitizenLoginMessage::LoginDelayElapsed)
                    }),
                ])
            }
            CitizenLoginMessage::LoginDelayElapsed => {
                Task::done(navigate(Route::Dashboard(Role::Citizen)))
            }
            CitizenLoginMessage::StartRegistration => {
                self.flow.start_registration();
                Task::none()
            }
            CitizenLoginMessage::BackToLogin => {
                self.flow.back_to_login();
                Task::none()
            }
            CitizenLoginMessage::SubmitAadhaar => {
                if self.flow.submit_aadhaar() {
                    Task::done(toast(
                        "OTP Sent",
                        "A verification code has been sent to your registered mobile.",
                    ))
                } else {
                    Task::none()
                }
            }
            CitizenLoginMessage::SubmitOtp => {
                if self.flow.submit_otp() {
                    Task::done(toast(
                        "Aadhaar Verified",
                        "Your identity has been verified successfully.",
                    ))
                } else {
                    Task::none()
                }
            }
            CitizenLoginMessage::ResendCode => {
                self.flow.back_to_aadhaar();
                Task::none()
            }
            CitizenLoginMessage::CompleteRegistration => Task::batch([
                Task::done(toast("Registration Complete", "Welcome to GovTrack!")),
                Task::done(navigate(Route::Dashboard(Role::Citizen))),
            ]),
        }
    }
}
