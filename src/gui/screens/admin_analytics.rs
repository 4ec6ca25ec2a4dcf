use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{column, row, text},
};

use crate::core::format::format_crore;
use crate::core::route::{Role, Route};
use crate::core::stats;
use crate::core::store::{FixtureStore, Project, ProjectRepository, ProjectStatus};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate},
    widgets::{self, Tone},
};

/// Admin analytics: category and department shares, status distribution and
/// a recent-activity feed, all computed inline over the project collection.
#[derive(Debug, Clone)]
pub struct AdminAnalyticsScreen {
    projects: Vec<Project>,
}

impl AdminAnalyticsScreen {
    pub async fn new(store: &FixtureStore) -> Self {
        let projects = store.get_projects().await.unwrap_or_else(|_| Vec::new());
        Self { projects }
    }
}

impl Screen for AdminAnalyticsScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let counts = stats::status_counts(&self.projects);
        let stat_row = row![
            widgets::stat_card(
                "Average Progress",
                format!("{}%", stats::average_progress(&self.projects)),
                None,
                Tone::Info,
            ),
            widgets::stat_card("Total Projects", counts.total.to_string(), None, Tone::Muted),
            widgets::stat_card("Completed", counts.completed.to_string(), None, Tone::Success),
            widgets::stat_card("Delayed", counts.delayed.to_string(), None, Tone::Warning),
        ]
        .spacing(12);

        let mut by_category = column![text("Projects by Type").size(16)].spacing(10);
        for (category, count) in stats::category_counts(&self.projects) {
            let share = stats::share_percent(count, self.projects.len());
            by_category = by_category.push(
                column![
                    row![
                        text(category.label()).size(13).width(Length::Fill),
                        text(format!("{count} projects ({share}%)"))
                            .size(12)
                            .color(widgets::muted_text_color()),
                    ],
                    widgets::tinted_bar(share, Tone::Info),
                ]
                .spacing(4),
            );
        }

        let total_budget = stats::total_budget(&self.projects);
        let mut by_department = column![text("Budget by Department").size(16)].spacing(10);
        for department in stats::departments(&self.projects) {
            let budget = stats::department_budget(&self.projects, &department);
            let share = stats::budget_share_percent(budget, total_budget);
            by_department = by_department.push(
                column![
                    row![
                        text(department.clone()).size(13).width(Length::Fill),
                        text(format!("{} ({share}%)", format_crore(budget)))
                            .size(12)
                            .color(widgets::muted_text_color()),
                    ],
                    widgets::tinted_bar(share, Tone::Success),
                ]
                .spacing(4),
            );
        }

        let distribution = column![
            text("Project Status Distribution").size(16),
            row![
                status_count("On-track", counts.on_track, Tone::from(ProjectStatus::OnTrack)),
                status_count("Delayed", counts.delayed, Tone::from(ProjectStatus::Delayed)),
                status_count(
                    "Completed",
                    counts.completed,
                    Tone::from(ProjectStatus::Completed),
                ),
            ]
            .spacing(32),
        ]
        .spacing(12);

        let activity_entries = [
            ("Project Update", "Highway NH-48 Expansion", "2 hours ago"),
            ("Complaint Resolved", "Ring Road Construction", "5 hours ago"),
            ("New Project Added", "Metro Station Phase 2", "1 day ago"),
            ("Contractor Assigned", "Water Treatment Plant", "2 days ago"),
        ];
        let mut activity = column![text("Recent Activity").size(16)].spacing(10);
        for (action, project, time) in activity_entries {
            activity = activity.push(row![
                column![
                    text(action).size(13),
                    text(project).size(11).color(widgets::muted_text_color()),
                ]
                .spacing(2)
                .width(Length::Fill),
                text(time).size(11).color(widgets::muted_text_color()),
            ]);
        }

        let content = column![
            stat_row,
            row![
                widgets::card(by_category).width(Length::FillPortion(1)),
                widgets::card(by_department).width(Length::FillPortion(1)),
            ]
            .spacing(16),
            row![
                widgets::card(distribution).width(Length::FillPortion(1)),
                widgets::card(activity).width(Length::FillPortion(1)),
            ]
            .spacing(16),
        ]
        .spacing(16);

        widgets::layout(
            Role::Admin,
            "Analytics",
            "Project performance insights",
            &Route::Analytics,
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

fn status_count<'a>(
    label: &'a str,
    count: usize,
    tone: Tone,
) -> Element<'a, ScreenMessage<AdminAnalyticsScreen>> {
    column![
        text(count.to_string()).size(28).color(tone.color()),
        text(label).size(12).color(widgets::muted_text_color()),
    ]
    .spacing(4)
    .align_x(Center)
    .into()
}
