use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::core::format::format_date;
use crate::core::route::{Role, Route};
use crate::core::store::{
    Complaint, ComplaintCategory, ComplaintRepository, DEMO_CITIZEN_ID, FixtureStore,
    ProjectRepository,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, PickOption, Screen, ScreenMessage, navigate, toast},
    widgets::{self, Tone},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintsTab {
    History,
    New,
}

/// Citizen complaints page: filing history with the status stepper, plus the
/// new-complaint form. Submission raises a toast and discards the input.
#[derive(Debug, Clone)]
pub struct CitizenComplaintsScreen {
    complaints: Vec<Complaint>,
    project_options: Vec<PickOption>,
    tab: ComplaintsTab,
    selected_project: Option<PickOption>,
    category: Option<ComplaintCategory>,
    description: String,
}

#[derive(Debug, Clone)]
pub enum CitizenComplaintsMessage {
    TabSelected(ComplaintsTab),
    ProjectSelected(PickOption),
    CategorySelected(ComplaintCategory),
    DescriptionChanged(String),
    Submit,
}

fn msg(message: CitizenComplaintsMessage) -> ScreenMessage<CitizenComplaintsScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl CitizenComplaintsScreen {
    pub async fn new(store: &FixtureStore, preselect: Option<String>, open_form: bool) -> Self {
        let complaints = store
            .get_complaints_by_citizen(DEMO_CITIZEN_ID)
            .await
            .unwrap_or_else(|_| Vec::new());
        let project_options: Vec<PickOption> = store
            .get_projects()
            .await
            .unwrap_or_else(|_| Vec::new())
            .into_iter()
            .map(|p| PickOption::new(p.id, p.name))
            .collect();
        let selected_project = preselect
            .and_then(|id| project_options.iter().find(|o| o.id == id).cloned());
        let tab = if open_form || selected_project.is_some() {
            ComplaintsTab::New
        } else {
            ComplaintsTab::History
        };
        Self {
            complaints,
            project_options,
            tab,
            selected_project,
            category: None,
            description: String::new(),
        }
    }

    fn can_submit(&self) -> bool {
        self.selected_project.is_some()
            && self.category.is_some()
            && !self.description.trim().is_empty()
    }

    fn history(&self) -> Element<'_, ScreenMessage<Self>> {
        if self.complaints.is_empty() {
            return widgets::card(
                column![
                    text("You haven't filed any complaints yet.")
                        .size(14)
                        .color(widgets::muted_text_color()),
                    button(text("File Your First Complaint").size(14)).on_press(msg(
                        CitizenComplaintsMessage::TabSelected(ComplaintsTab::New),
                    )),
                ]
                .spacing(12),
            )
            .width(Length::Fill)
            .into();
        }

        let mut list = column![].spacing(12);
        for complaint in &self.complaints {
            list = list.push(widgets::card(
                column![
                    row![
                        column![
                            row![
                                text(format!("#{}", complaint.id))
                                    .size(12)
                                    .color(widgets::muted_text_color()),
                                widgets::status_badge(
                                    complaint.status.label(),
                                    Tone::from(complaint.status),
                                ),
                            ]
                            .spacing(8),
                            text(complaint.project_name.clone()).size(15),
                            text(complaint.category.label())
                                .size(12)
                                .color(widgets::muted_text_color()),
                        ]
                        .spacing(4)
                        .width(Length::Fill),
                        text(format_date(complaint.created_at))
                            .size(12)
                            .color(widgets::muted_text_color()),
                    ],
                    text(complaint.description.clone())
                        .size(13)
                        .color(widgets::muted_text_color()),
                    widgets::status_stepper(complaint.status),
                ]
                .spacing(10),
            ));
        }
        list.into()
    }

    fn form(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut submit = button(text("Submit Complaint").size(14)).width(Length::Fill);
        if self.can_submit() {
            submit = submit.on_press(msg(CitizenComplaintsMessage::Submit));
        }

        widgets::card(
            column![
                text("File a New Complaint").size(16),
                text("Select Project").size(13),
                pick_list(
                    self.project_options.as_slice(),
                    self.selected_project.clone(),
                    |option| msg(CitizenComplaintsMessage::ProjectSelected(option)),
                )
                .placeholder("Choose the project this complaint is about")
                .width(Length::Fill),
                text("Category").size(13),
                pick_list(ComplaintCategory::ALL, self.category, |category| {
                    msg(CitizenComplaintsMessage::CategorySelected(category))
                })
                .placeholder("Select complaint category")
                .width(Length::Fill),
                text("Description").size(13),
                text_input("Describe your complaint in detail...", &self.description)
                    .on_input(|v| msg(CitizenComplaintsMessage::DescriptionChanged(v)))
                    .padding(8),
                text("Attach Image (Optional)").size(13),
                container(
                    column![
                        text("Click to upload or drag and drop")
                            .size(13)
                            .color(widgets::muted_text_color()),
                        text("PNG, JPG up to 5MB")
                            .size(11)
                            .color(widgets::muted_text_color()),
                    ]
                    .spacing(2),
                )
                .padding(20)
                .width(Length::Fill)
                .style(iced_widget::container::bordered_box),
                submit,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .into()
    }
}

impl Screen for CitizenComplaintsScreen {
    type Message = CitizenComplaintsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let tab_button = |label: &'static str, tab: ComplaintsTab, current: ComplaintsTab| {
            let style: fn(&iced::Theme, button::Status) -> button::Style = if tab == current {
                button::primary
            } else {
                button::text
            };
            button(text(label).size(14))
                .style(style)
                .on_press(msg(CitizenComplaintsMessage::TabSelected(tab)))
        };

        let tabs = row![
            tab_button("Complaint History", ComplaintsTab::History, self.tab),
            tab_button("New Complaint", ComplaintsTab::New, self.tab),
        ]
        .spacing(8);

        let body = match self.tab {
            ComplaintsTab::History => self.history(),
            ComplaintsTab::New => self.form(),
        };

        widgets::layout(
            Role::Citizen,
            "My Complaints",
            "File and track your complaints",
            &Route::Complaints(Role::Citizen),
            navigate,
            column![tabs, body].spacing(16),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            CitizenComplaintsMessage::TabSelected(tab) => {
                self.tab = tab;
                Task::none()
            }
            CitizenComplaintsMessage::ProjectSelected(option) => {
                self.selected_project = Some(option);
                Task::none()
            }
            CitizenComplaintsMessage::CategorySelected(category) => {
                self.category = Some(category);
                Task::none()
            }
            CitizenComplaintsMessage::DescriptionChanged(value) => {
                self.description = value;
                Task::none()
            }
            CitizenComplaintsMessage::Submit => {
                self.selected_project = None;
                self.category = None;
                self.description.clear();
                self.tab = ComplaintsTab::History;
                Task::done(toast(
                    "Complaint Submitted",
                    "Your complaint has been registered and will be reviewed shortly.",
                ))
            }
        }
    }
}
