use iced::{
    Element, Length, Task,
    widget::{button, column, pick_list, row, text, text_input},
};

use crate::core::format::format_date;
use crate::core::query::{ComplaintFilter, ComplaintStatusChoice};
use crate::core::route::{Role, Route};
use crate::core::store::{Complaint, ComplaintRepository, ComplaintStatus, FixtureStore};
use crate::gui::{
    AppState,
    screens::{ParentMessage, Screen, ScreenMessage, navigate, toast},
    widgets::{self, Tone},
};

/// Admin complaint review: search + status filter over every complaint, with
/// a status picker and a Resolve shortcut per card. Both actions only raise
/// a toast; the stored status never changes.
#[derive(Debug, Clone)]
pub struct AdminComplaintsScreen {
    complaints: Vec<Complaint>,
    filter: ComplaintFilter,
}

#[derive(Debug, Clone)]
pub enum AdminComplaintsMessage {
    SearchChanged(String),
    StatusFilterSelected(ComplaintStatusChoice),
    StatusPicked(String, ComplaintStatus),
    Resolve(String),
}

fn msg(message: AdminComplaintsMessage) -> ScreenMessage<AdminComplaintsScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl AdminComplaintsScreen {
    pub async fn new(store: &FixtureStore) -> Self {
        let complaints = store.get_complaints().await.unwrap_or_else(|_| Vec::new());
        Self {
            complaints,
            filter: ComplaintFilter::default(),
        }
    }
}

impl Screen for AdminComplaintsScreen {
    type Message = AdminComplaintsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let filters = row![
            text_input("Search complaints...", &self.filter.search)
                .on_input(|v| msg(AdminComplaintsMessage::SearchChanged(v)))
                .padding(8)
                .width(Length::Fill),
            pick_list(
                ComplaintStatusChoice::ALL,
                Some(self.filter.status),
                |choice| msg(AdminComplaintsMessage::StatusFilterSelected(choice)),
            ),
        ]
        .spacing(12);

        let mut list = column![].spacing(12);
        for complaint in self.filter.apply(&self.complaints) {
            let id = complaint.id.clone();
            let picker_id = id.clone();
            let mut actions = row![
                pick_list(ComplaintStatus::ALL, Some(complaint.status), move |status| {
                    msg(AdminComplaintsMessage::StatusPicked(
                        picker_id.clone(),
                        status,
                    ))
                }),
            ]
            .spacing(8);
            if complaint.status != ComplaintStatus::Resolved {
                actions = actions.push(
                    button(text("Resolve").size(12))
                        .on_press(msg(AdminComplaintsMessage::Resolve(id))),
                );
            }

            let mut meta = row![text(format!("Filed: {}", format_date(complaint.created_at)))
                .size(11)
                .color(widgets::muted_text_color())]
            .spacing(12);
            if let Some(assigned) = &complaint.assigned_to {
                meta = meta.push(
                    text(format!("Assigned to: {assigned}"))
                        .size(11)
                        .color(widgets::muted_text_color()),
                );
            }

            list = list.push(widgets::card(
                column![
                    row![
                        text(format!("#{}", complaint.id))
                            .size(12)
                            .color(widgets::muted_text_color()),
                        widgets::status_badge(
                            complaint.status.label(),
                            Tone::from(complaint.status),
                        ),
                        text(complaint.category.label())
                            .size(11)
                            .color(widgets::muted_text_color()),
                    ]
                    .spacing(8),
                    text(complaint.project_name.clone()).size(15),
                    text(complaint.description.clone())
                        .size(13)
                        .color(widgets::muted_text_color()),
                    row![meta.width(Length::Fill), actions].spacing(12),
                ]
                .spacing(8),
            ));
        }

        widgets::layout(
            Role::Admin,
            "All Complaints",
            "Review and manage citizen complaints",
            &Route::Complaints(Role::Admin),
            navigate,
            column![filters, list].spacing(16),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            AdminComplaintsMessage::SearchChanged(value) => {
                self.filter.search = value;
                Task::none()
            }
            AdminComplaintsMessage::StatusFilterSelected(choice) => {
                self.filter.status = choice;
                Task::none()
            }
            AdminComplaintsMessage::StatusPicked(_, status) => Task::done(toast(
                "Status Updated",
                format!("Complaint status changed to {}", status.label()),
            )),
            AdminComplaintsMessage::Resolve(_) => Task::done(toast(
                "Status Updated",
                format!(
                    "Complaint status changed to {}",
                    ComplaintStatus::Resolved.label()
                ),
            )),
        }
    }
}
