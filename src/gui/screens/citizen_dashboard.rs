use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, text, text_input},
};

use crate::core::format::{format_date, format_inr};
use crate::core::query::{CategoryChoice, ProjectFilter, StatusChoice};
use crate::core::route::{Role, Route};
use crate::core::stats;
use crate::core::store::{FixtureStore, Project, ProjectRepository};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets::{self, Tone},
};

/// Citizen dashboard: headline stats plus the searchable, filterable grid of
/// all projects. Also serves the "All Projects" sidebar entry.
#[derive(Debug, Clone)]
pub struct CitizenDashboardScreen {
    active: Route,
    projects: Vec<Project>,
    filter: ProjectFilter,
}

#[derive(Debug, Clone)]
pub enum CitizenDashboardMessage {
    SearchChanged(String),
    CategorySelected(CategoryChoice),
    StatusSelected(StatusChoice),
}

fn msg(message: CitizenDashboardMessage) -> ScreenMessage<CitizenDashboardScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl CitizenDashboardScreen {
    pub async fn new(store: &FixtureStore, active: Route) -> Self {
        let projects = store.get_projects().await.unwrap_or_else(|_| Vec::new());
        Self {
            active,
            projects,
            filter: ProjectFilter::default(),
        }
    }
}

impl Screen for CitizenDashboardScreen {
    type Message = CitizenDashboardMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let counts = stats::status_counts(&self.projects);
        let stat_row = row![
            widgets::stat_card("Total Projects", counts.total.to_string(), None, Tone::Info),
            widgets::stat_card("On Track", counts.on_track.to_string(), None, Tone::Muted),
            widgets::stat_card("Delayed", counts.delayed.to_string(), None, Tone::Warning),
            widgets::stat_card("Completed", counts.completed.to_string(), None, Tone::Success),
        ]
        .spacing(12);

        let filters = row![
            text_input("Search projects...", &self.filter.search)
                .on_input(|v| msg(CitizenDashboardMessage::SearchChanged(v)))
                .padding(8)
                .width(Length::Fill),
            pick_list(CategoryChoice::ALL, Some(self.filter.category), |c| {
                msg(CitizenDashboardMessage::CategorySelected(c))
            }),
            pick_list(StatusChoice::ALL, Some(self.filter.status), |s| {
                msg(CitizenDashboardMessage::StatusSelected(s))
            }),
        ]
        .spacing(12);

        let filtered = self.filter.apply(&self.projects);
        let grid: Element<'_, ScreenMessage<Self>> = if filtered.is_empty() {
            container(
                text("No projects found matching your criteria")
                    .size(14)
                    .color(widgets::muted_text_color()),
            )
            .center_x(Length::Fill)
            .padding(40)
            .into()
        } else {
            let mut rows = column![].spacing(12);
            for pair in filtered.chunks(2) {
                let mut cards = row![].spacing(12);
                for project in pair {
                    cards = cards.push(project_card(project));
                }
                if pair.len() == 1 {
                    cards = cards.push(container(text("")).width(Length::FillPortion(1)));
                }
                rows = rows.push(cards);
            }
            rows.into()
        };

        widgets::layout(
            Role::Citizen,
            "Dashboard",
            "Track government projects in your area",
            &self.active,
            navigate,
            column![stat_row, filters, grid].spacing(16),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            CitizenDashboardMessage::SearchChanged(value) => {
                self.filter.search = value;
                Task::none()
            }
            CitizenDashboardMessage::CategorySelected(choice) => {
                self.filter.category = choice;
                Task::none()
            }
            CitizenDashboardMessage::StatusSelected(choice) => {
                self.filter.status = choice;
                Task::none()
            }
        }
    }
}

fn project_card(project: &Project) -> Element<'static, ScreenMessage<CitizenDashboardScreen>> {
    let body = column![
        row![
            column![
                text(project.category.label().to_uppercase())
                    .size(10)
                    .color(widgets::muted_text_color()),
                text(project.name.clone()).size(15),
                text(project.department.clone())
                    .size(12)
                    .color(widgets::muted_text_color()),
            ]
            .spacing(2)
            .width(Length::Fill),
            widgets::status_badge(project.status.label(), Tone::from(project.status)),
        ]
        .spacing(8),
        widgets::labeled_progress_bar(project.clamped_progress()),
        row![
            text(format_inr(project.budget))
                .size(12)
                .color(widgets::muted_text_color())
                .width(Length::Fill),
            text(project.contractor.clone())
                .size(12)
                .color(widgets::muted_text_color()),
        ],
        row![
            text(format_date(project.end_date))
                .size(12)
                .color(widgets::muted_text_color())
                .width(Length::Fill),
            text(project.location.clone())
                .size(12)
                .color(widgets::muted_text_color()),
        ],
    ]
    .spacing(10);

    button(widgets::card(body).width(Length::Fill))
        .style(button::text)
        .padding(0)
        .width(Length::FillPortion(1))
        .on_press(navigate(Route::ProjectDetails(
            Role::Citizen,
            project.id.clone(),
        )))
        .into()
}
