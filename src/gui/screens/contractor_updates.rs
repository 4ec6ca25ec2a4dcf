use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, slider, text, text_input},
};

use crate::core::route::{Role, Route};
use crate::core::store::{
    DEMO_CONTRACTOR_ID, FixtureStore, Project, ProjectRepository, ProjectStatus,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, PickOption, Screen, ScreenMessage, navigate, toast},
    widgets,
};

/// Progress-update form for the signed-in contractor. The slider is floored
/// at the stored progress so an update can only move forward; submission
/// toasts and discards the input.
#[derive(Debug, Clone)]
pub struct ContractorUpdatesScreen {
    projects: Vec<Project>,
    options: Vec<PickOption>,
    selected: Option<PickOption>,
    progress: u8,
    notes: String,
    delay_reason: String,
}

#[derive(Debug, Clone)]
pub enum ContractorUpdatesMessage {
    ProjectSelected(PickOption),
    ProgressChanged(u8),
    NotesChanged(String),
    DelayReasonChanged(String),
    Submit,
}

fn msg(message: ContractorUpdatesMessage) -> ScreenMessage<ContractorUpdatesScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl ContractorUpdatesScreen {
    pub async fn new(store: &FixtureStore, preselect: Option<String>) -> Self {
        let projects = store
            .get_projects_by_contractor(DEMO_CONTRACTOR_ID)
            .await
            .unwrap_or_else(|_| Vec::new());
        let options: Vec<PickOption> = projects
            .iter()
            .map(|p| PickOption::new(p.id.clone(), p.name.clone()))
            .collect();
        let selected =
            preselect.and_then(|id| options.iter().find(|o| o.id == id).cloned());
        let progress = selected
            .as_ref()
            .and_then(|option| projects.iter().find(|p| p.id == option.id))
            .map(Project::clamped_progress)
            .unwrap_or(50);
        Self {
            projects,
            options,
            selected,
            progress,
            notes: String::new(),
            delay_reason: String::new(),
        }
    }

    fn current_project(&self) -> Option<&Project> {
        let selected = self.selected.as_ref()?;
        self.projects.iter().find(|p| p.id == selected.id)
    }
}

impl Screen for ContractorUpdatesScreen {
    type Message = ContractorUpdatesMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut form = column![
            text("Progress Update").size(16),
            text("Select Project").size(13),
            pick_list(self.options.as_slice(), self.selected.clone(), |option| {
                msg(ContractorUpdatesMessage::ProjectSelected(option))
            })
            .placeholder("Choose a project")
            .width(Length::Fill),
        ]
        .spacing(10);

        if let Some(project) = self.current_project() {
            let floor = project.clamped_progress();
            form = form
                .push(
                    container(
                        column![
                            text("Current Progress")
                                .size(12)
                                .color(widgets::muted_text_color()),
                            text(format!("{}%", floor)).size(24),
                        ]
                        .spacing(2),
                    )
                    .padding(10)
                    .width(Length::Fill)
                    .style(iced_widget::container::bordered_box),
                )
                .push(text(format!("Updated Progress: {}%", self.progress)).size(13))
                .push(slider(floor..=100, self.progress, |v| {
                    msg(ContractorUpdatesMessage::ProgressChanged(v))
                }))
                .push(text("Progress Notes").size(13))
                .push(
                    text_input("Describe the work completed...", &self.notes)
                        .on_input(|v| msg(ContractorUpdatesMessage::NotesChanged(v)))
                        .padding(8),
                );

            if project.status == ProjectStatus::Delayed {
                form = form.push(text("Delay Reason Update").size(13)).push(
                    text_input(
                        "Update the delay reason if applicable...",
                        &self.delay_reason,
                    )
                    .on_input(|v| msg(ContractorUpdatesMessage::DelayReasonChanged(v)))
                    .padding(8),
                );
            }

            form = form.push(
                button(text("Submit Update").size(14))
                    .width(Length::Fill)
                    .on_press(msg(ContractorUpdatesMessage::Submit)),
            );
        }

        let uploads = column![
            upload_card("Upload Photos", "Drop progress photos here", "PNG, JPG up to 10MB each"),
            upload_card(
                "Upload Documents",
                "Drop documents here",
                "PDF, DOC up to 25MB each",
            ),
            widgets::card(
                column![
                    text("Recent Uploads").size(16),
                    recent_upload("progress_photo_nov28.jpg"),
                    recent_upload("site_report.pdf"),
                    recent_upload("milestone_2_completion.pdf"),
                ]
                .spacing(8),
            ),
        ]
        .spacing(16);

        let content = row![
            widgets::card(form).width(Length::FillPortion(1)),
            uploads.width(Length::FillPortion(1)),
        ]
        .spacing(16);

        widgets::layout(
            Role::Contractor,
            "Submit Updates",
            "Update project progress and upload documents",
            &Route::Updates(None),
            navigate,
            content,
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ContractorUpdatesMessage::ProjectSelected(option) => {
                self.selected = Some(option);
                if let Some(progress) = self.current_project().map(Project::clamped_progress) {
                    self.progress = progress;
                }
                Task::none()
            }
            ContractorUpdatesMessage::ProgressChanged(value) => {
                self.progress = value.min(100);
                Task::none()
            }
            ContractorUpdatesMessage::NotesChanged(value) => {
                self.notes = value;
                Task::none()
            }
            ContractorUpdatesMessage::DelayReasonChanged(value) => {
                self.delay_reason = value;
                Task::none()
            }
            ContractorUpdatesMessage::Submit => Task::done(toast(
                "Update Submitted",
                "Your progress update has been submitted for admin review.",
            )),
        }
    }
}

fn upload_card<'a>(
    title: &'a str,
    prompt: &'a str,
    hint: &'a str,
) -> Element<'a, ScreenMessage<ContractorUpdatesScreen>> {
    widgets::card(
        column![
            text(title).size(16),
            container(
                column![
                    text(prompt).size(13),
                    text(hint).size(11).color(widgets::muted_text_color()),
                ]
                .spacing(2),
            )
            .padding(24)
            .width(Length::Fill)
            .style(iced_widget::container::bordered_box),
        ]
        .spacing(10),
    )
    .width(Length::Fill)
    .into()
}

fn recent_upload(name: &str) -> Element<'_, ScreenMessage<ContractorUpdatesScreen>> {
    row![
        text(name).size(13).width(Length::Fill),
        text("Uploaded")
            .size(11)
            .color(widgets::Tone::Success.color()),
    ]
    .into()
}
