use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, row, text},
};

use crate::core::format::{format_date, format_inr};
use crate::core::route::{Role, Route};
use crate::core::stats;
use crate::core::store::{
    Complaint, ComplaintRepository, Contractor, ContractorRepository, FixtureStore, Project,
    ProjectCategory, ProjectRepository,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets::{self, Tone},
};

/// Admin overview: headline stats, quick actions, recent projects, progress
/// by category, pending complaints and top contractors. Also serves the
/// "Contractors" and "Users" sidebar entries, as the route table binds both
/// paths here.
#[derive(Debug, Clone)]
pub struct AdminDashboardScreen {
    active: Route,
    projects: Vec<Project>,
    contractors: Vec<Contractor>,
    complaints: Vec<Complaint>,
}

impl AdminDashboardScreen {
    pub async fn new(store: &FixtureStore, active: Route) -> Self {
        let projects = store.get_projects().await.unwrap_or_else(|_| Vec::new());
        let contractors = store.get_contractors().await.unwrap_or_else(|_| Vec::new());
        let complaints = store.get_complaints().await.unwrap_or_else(|_| Vec::new());
        Self {
            active,
            projects,
            contractors,
            complaints,
        }
    }
}

impl Screen for AdminDashboardScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let pending = stats::pending_complaint_count(&self.complaints);
        let stat_row = row![
            widgets::stat_card(
                "Total Projects",
                self.projects.len().to_string(),
                None,
                Tone::Info,
            ),
            widgets::stat_card(
                "Active Contractors",
                self.contractors.len().to_string(),
                None,
                Tone::Muted,
            ),
            widgets::stat_card("Pending Complaints", pending.to_string(), None, Tone::Warning),
            widgets::stat_card(
                "Total Budget",
                format_inr(stats::total_budget(&self.projects)),
                Some("Across all projects"),
                Tone::Success,
            ),
        ]
        .spacing(12);

        let actions = row![
            button(text("Add New Project").size(14)).on_press(navigate(Route::NewProject)),
            button(text("Manage Contractors").size(14))
                .style(button::secondary)
                .on_press(navigate(Route::Contractors)),
            button(text("View Analytics").size(14))
                .style(button::secondary)
                .on_press(navigate(Route::Analytics)),
        ]
        .spacing(12);

        let mut recent = column![
            row![
                text("Recent Projects").size(16).width(Length::Fill),
                button(text("View All").size(12))
                    .style(button::text)
                    .on_press(navigate(Route::Projects(Role::Admin))),
            ],
        ]
        .spacing(10);
        for project in stats::recent_projects(&self.projects, 5) {
            recent = recent.push(row![
                column![
                    text(project.name.clone()).size(13),
                    text(project.department.clone())
                        .size(11)
                        .color(widgets::muted_text_color()),
                ]
                .spacing(2)
                .width(Length::FillPortion(2)),
                text(project.contractor.clone())
                    .size(12)
                    .color(widgets::muted_text_color())
                    .width(Length::FillPortion(2)),
                column![
                    widgets::progress_bar(project.clamped_progress()),
                    text(format!("{}%", project.clamped_progress()))
                        .size(11)
                        .color(widgets::muted_text_color()),
                ]
                .spacing(2)
                .width(Length::FillPortion(1)),
                widgets::status_badge(project.status.label(), Tone::from(project.status)),
                button(text("Edit").size(12))
                    .style(button::text)
                    .on_press(navigate(Route::ProjectDetails(
                        Role::Admin,
                        project.id.clone(),
                    ))),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center));
        }

        let mut overview = column![text("Progress Overview").size(16)].spacing(10);
        for category in ProjectCategory::ALL {
            let average = stats::average_progress_for(&self.projects, category);
            overview = overview.push(
                column![
                    row![
                        text(format!("{} Projects", category.label()))
                            .size(13)
                            .width(Length::Fill),
                        text(format!("{average}% avg"))
                            .size(12)
                            .color(widgets::muted_text_color()),
                    ],
                    widgets::progress_bar(average),
                ]
                .spacing(4),
            );
        }

        let mut pending_list = column![
            row![
                text("Pending Complaints").size(16).width(Length::Fill),
                button(text("View All").size(12))
                    .style(button::text)
                    .on_press(navigate(Route::Complaints(Role::Admin))),
            ],
        ]
        .spacing(10);
        for complaint in stats::pending_complaints(&self.complaints).into_iter().take(4) {
            pending_list = pending_list.push(
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
                .spacing(4),
            );
        }

        let mut top_contractors = column![text("Top Contractors").size(16)].spacing(10);
        for contractor in self.contractors.iter().take(4) {
            top_contractors = top_contractors.push(row![
                column![
                    text(contractor.name.clone()).size(13),
                    text(format!("{} projects", contractor.projects.len()))
                        .size(11)
                        .color(widgets::muted_text_color()),
                ]
                .spacing(2)
                .width(Length::Fill),
                text(format!("★ {:.1}", contractor.rating))
                    .size(13)
                    .color(Tone::Warning.color()),
            ]);
        }

        let content = column![
            stat_row,
            actions,
            row![
                column![widgets::card(recent), widgets::card(overview)]
                    .spacing(16)
                    .width(Length::FillPortion(2)),
                column![widgets::card(pending_list), widgets::card(top_contractors)]
                    .spacing(16)
                    .width(Length::FillPortion(1)),
            ]
            .spacing(16),
        ]
        .spacing(16);

        widgets::layout(
            Role::Admin,
            "Admin Dashboard",
            "Manage all government projects",
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
