use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};

use crate::core::format::{format_date, format_inr};
use crate::core::route::{Role, Route};
use crate::core::store::{
    Contractor, ContractorRepository, FixtureStore, Project, ProjectRepository,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets::{self, Tone},
};

/// Project detail page, shared by all three portals. An id that is not in
/// the store renders the not-found branch with a way back, never an error.
#[derive(Debug, Clone)]
pub struct ProjectDetailsScreen {
    role: Role,
    project: Option<Project>,
    contractor: Option<Contractor>,
}

impl ProjectDetailsScreen {
    pub async fn new(store: &FixtureStore, role: Role, id: &str) -> Self {
        let project = store.get_project_by_id(id).await.ok().flatten();
        let contractor = match &project {
            Some(project) => store
                .get_contractor_by_id(&project.contractor_id)
                .await
                .ok()
                .flatten(),
            None => None,
        };
        Self {
            role,
            project,
            contractor,
        }
    }

    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    fn back_route(&self) -> Route {
        match self.role {
            Role::Admin => Route::Projects(Role::Admin),
            role => Route::Dashboard(role),
        }
    }
}

impl Screen for ProjectDetailsScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let Some(project) = &self.project else {
            let body = column![
                text("The requested project could not be found.")
                    .size(14)
                    .color(widgets::muted_text_color()),
                button(text("Back to Dashboard").size(14))
                    .style(button::secondary)
                    .on_press(navigate(self.back_route())),
            ]
            .spacing(12);
            return widgets::layout(
                self.role,
                "Project Not Found",
                "",
                &Route::Dashboard(self.role),
                navigate,
                container(body).center_x(Length::Fill).padding(48),
            );
        };

        let overview = widgets::card(
            column![
                row![
                    text("Project Overview").size(16).width(Length::Fill),
                    widgets::status_badge(project.status.label(), Tone::from(project.status)),
                ],
                text(project.description.clone())
                    .size(13)
                    .color(widgets::muted_text_color()),
                text("Progress").size(13),
                widgets::labeled_progress_bar(project.clamped_progress()),
                row![
                    info_tile("Budget", format_inr(project.budget)),
                    info_tile("Location", project.location.clone()),
                ]
                .spacing(12),
                row![
                    info_tile("Start Date", format_date(project.start_date)),
                    info_tile("End Date", format_date(project.end_date)),
                ]
                .spacing(12),
            ]
            .spacing(12),
        );

        let mut main = column![overview].spacing(16);

        if let Some(reason) = &project.delay_reason {
            main = main.push(widgets::card(
                column![
                    text("Delay Reason").size(14).color(Tone::Warning.color()),
                    text(reason.clone())
                        .size(13)
                        .color(widgets::muted_text_color()),
                ]
                .spacing(4),
            ));
        }

        let mut gallery = row![].spacing(12);
        for _ in &project.images {
            gallery = gallery.push(
                container(
                    text("Image")
                        .size(12)
                        .color(widgets::muted_text_color()),
                )
                .padding(28)
                .style(iced_widget::container::bordered_box),
            );
        }
        main = main.push(widgets::card(
            column![text("Project Gallery").size(16), gallery].spacing(12),
        ));

        let mut documents = column![].spacing(8);
        for document in &project.documents {
            documents = documents.push(row![
                text(document.clone()).size(13).width(Length::Fill),
                text("Download").size(12).color(widgets::muted_text_color()),
            ]);
        }
        main = main.push(widgets::card(
            column![text("Documents").size(16), documents].spacing(12),
        ));

        let contractor_email = self
            .contractor
            .as_ref()
            .map(|c| c.email.clone())
            .unwrap_or_else(|| "contact@contractor.com".to_string());
        let mut side = column![
            widgets::card(
                column![
                    text("Contractor Details").size(16),
                    text(project.contractor.clone()).size(14),
                    text(format!("Contractor ID: {}", project.contractor_id))
                        .size(12)
                        .color(widgets::muted_text_color()),
                    text(contractor_email)
                        .size(12)
                        .color(widgets::muted_text_color()),
                    text("+91 98765 43210")
                        .size(12)
                        .color(widgets::muted_text_color()),
                ]
                .spacing(6),
            ),
            widgets::card(
                column![
                    text("Project Timeline").size(16),
                    timeline_entry("Project Started", format_date(project.start_date)),
                    timeline_entry(
                        "Current Progress",
                        format!("{}% Complete", project.clamped_progress()),
                    ),
                    timeline_entry("Expected Completion", format_date(project.end_date)),
                ]
                .spacing(10),
            ),
        ]
        .spacing(16)
        .width(Length::Fixed(260.0));

        if self.role == Role::Citizen {
            side = side.push(
                button(text("Submit Complaint").size(14))
                    .style(button::secondary)
                    .width(Length::Fill)
                    .on_press(navigate(Route::NewComplaint(Some(project.id.clone())))),
            );
        }

        let content = column![
            button(text("Back to Projects").size(13))
                .style(button::text)
                .on_press(navigate(self.back_route())),
            row![main.width(Length::Fill), side].spacing(16),
        ]
        .spacing(12);

        widgets::layout(
            self.role,
            &project.name,
            &project.department,
            &Route::Dashboard(self.role),
            navigate,
            content,
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}

fn info_tile<'a>(
    label: &'a str,
    value: String,
) -> Element<'a, ScreenMessage<ProjectDetailsScreen>> {
    container(
        column![
            text(label).size(11).color(widgets::muted_text_color()),
            text(value).size(14),
        ]
        .spacing(2),
    )
    .padding(10)
    .width(Length::FillPortion(1))
    .style(iced_widget::container::bordered_box)
    .into()
}

fn timeline_entry<'a>(
    label: &'a str,
    value: String,
) -> Element<'a, ScreenMessage<ProjectDetailsScreen>> {
    column![
        text(label).size(13),
        text(value).size(12).color(widgets::muted_text_color()),
    ]
    .spacing(2)
    .into()
}
