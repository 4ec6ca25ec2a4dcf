use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, row, text},
};

use crate::core::format::{format_date, format_inr};
use crate::core::route::{Role, Route};
use crate::core::stats;
use crate::core::store::{
    Complaint, ComplaintRepository, DEMO_CONTRACTOR_ID, FixtureStore, Project,
    ProjectRepository,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets::{self, Tone},
};

/// Contractor dashboard over the signed-in contractor's projects and
/// assigned complaints. Also serves the "My Projects" and "Assigned
/// Complaints" sidebar entries.
#[derive(Debug, Clone)]
pub struct ContractorDashboardScreen {
    active: Route,
    projects: Vec<Project>,
    complaints: Vec<Complaint>,
}

impl ContractorDashboardScreen {
    pub async fn new(store: &FixtureStore, active: Route) -> Self {
        let projects = store
            .get_projects_by_contractor(DEMO_CONTRACTOR_ID)
            .await
            .unwrap_or_else(|_| Vec::new());
        let complaints = store
            .get_complaints_assigned_to(DEMO_CONTRACTOR_ID)
            .await
            .unwrap_or_else(|_| Vec::new());
        Self {
            active,
            projects,
            complaints,
        }
    }
}

impl Screen for ContractorDashboardScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let counts = stats::status_counts(&self.projects);
        let pending = stats::pending_complaint_count(&self.complaints);
        let stat_row = row![
            widgets::stat_card("Total Projects", counts.total.to_string(), None, Tone::Info),
            widgets::stat_card(
                "Active Projects",
                stats::active_project_count(&self.projects).to_string(),
                None,
                Tone::Warning,
            ),
            widgets::stat_card("Completed", counts.completed.to_string(), None, Tone::Success),
            widgets::stat_card("Pending Complaints", pending.to_string(), None, Tone::Muted),
        ]
        .spacing(12);

        let mut project_list = column![text("My Projects").size(16)].spacing(12);
        for project in &self.projects {
            project_list = project_list.push(widgets::card(
                column![
                    row![
                        column![
                            button(text(project.name.clone()).size(15))
                                .style(button::text)
                                .padding(0)
                                .on_press(navigate(Route::ProjectDetails(
                                    Role::Contractor,
                                    project.id.clone(),
                                ))),
                            text(project.department.clone())
                                .size(12)
                                .color(widgets::muted_text_color()),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        widgets::status_badge(
                            project.status.label(),
                            Tone::from(project.status),
                        ),
                    ],
                    widgets::labeled_progress_bar(project.clamped_progress()),
                    row![
                        text(format!("Budget: {}", format_inr(project.budget)))
                            .size(12)
                            .color(widgets::muted_text_color())
                            .width(Length::Fill),
                        button(text("Update").size(12))
                            .style(button::secondary)
                            .on_press(navigate(Route::Updates(Some(project.id.clone())))),
                    ],
                ]
                .spacing(10),
            ));
        }

        let mut complaint_list = column![text("Assigned Complaints").size(16)].spacing(12);
        if self.complaints.is_empty() {
            complaint_list = complaint_list.push(
                text("No complaints assigned")
                    .size(13)
                    .color(widgets::muted_text_color()),
            );
        } else {
            for complaint in self.complaints.iter().take(3) {
                complaint_list = complaint_list.push(widgets::card(
                    column![
                        row![
                            text(complaint.project_name.clone())
                                .size(13)
                                .width(Length::Fill),
                            widgets::status_badge(
                                complaint.status.label(),
                                Tone::from(complaint.status),
                            ),
                        ],
                        text(complaint.description.clone())
                            .size(12)
                            .color(widgets::muted_text_color()),
                        text(format_date(complaint.created_at))
                            .size(11)
                            .color(widgets::muted_text_color()),
                    ]
                    .spacing(6),
                ));
            }
        }

        let content = column![
            stat_row,
            row![
                project_list.width(Length::FillPortion(2)),
                complaint_list.width(Length::FillPortion(1)),
            ]
            .spacing(16),
        ]
        .spacing(16);

        widgets::layout(
            Role::Contractor,
            "Dashboard",
            "Manage your assigned projects",
            &self.active,
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
