use iced::{
    Element, Length, Task,
    widget::{button, column, pick_list, row, text, text_input},
};

use crate::core::flow::digits_only;
use crate::core::format::format_inr;
use crate::core::query::{ProjectFilter, SearchScope};
use crate::core::route::{Role, Route};
use crate::core::store::{
    ContractorRepository, FixtureStore, Project, ProjectCategory, ProjectRepository,
};
use crate::gui::{
    AppState,
    screens::{ParentMessage, PickOption, Screen, ScreenMessage, navigate, toast},
    widgets::{self, Tone},
};

/// Local state of the add-project form. Submission never persists anything;
/// the record is discarded after the toast.
#[derive(Debug, Clone, Default)]
pub struct NewProjectForm {
    pub name: String,
    pub department: String,
    pub category: Option<ProjectCategory>,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
    pub contractor: Option<PickOption>,
    pub location: String,
    pub description: String,
}

impl NewProjectForm {
    fn complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.department.trim().is_empty()
            && self.category.is_some()
            && !self.budget.trim().is_empty()
            && !self.start_date.trim().is_empty()
            && !self.end_date.trim().is_empty()
            && self.contractor.is_some()
            && !self.location.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

/// Admin project management: searchable table of every project plus the
/// add-project form, which `/admin/projects/new` opens directly.
#[derive(Debug, Clone)]
pub struct AdminProjectsScreen {
    projects: Vec<Project>,
    contractor_options: Vec<PickOption>,
    search: String,
    show_form: bool,
    form: NewProjectForm,
}

#[derive(Debug, Clone)]
pub enum AdminProjectsMessage {
    SearchChanged(String),
    OpenForm,
    CloseForm,
    FormName(String),
    FormDepartment(String),
    FormCategory(ProjectCategory),
    FormBudget(String),
    FormStartDate(String),
    FormEndDate(String),
    FormContractor(PickOption),
    FormLocation(String),
    FormDescription(String),
    SubmitForm,
    Delete(String),
}

fn msg(message: AdminProjectsMessage) -> ScreenMessage<AdminProjectsScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl AdminProjectsScreen {
    pub async fn new(store: &FixtureStore, show_form: bool) -> Self {
        let projects = store.get_projects().await.unwrap_or_else(|_| Vec::new());
        let contractor_options: Vec<PickOption> = store
            .get_contractors()
            .await
            .unwrap_or_else(|_| Vec::new())
            .into_iter()
            .map(|c| PickOption::new(c.id, c.name))
            .collect();
        Self {
            projects,
            contractor_options,
            search: String::new(),
            show_form,
            form: NewProjectForm::default(),
        }
    }

    fn form_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut submit = button(text("Create Project").size(14));
        if self.form.complete() {
            submit = submit.on_press(msg(AdminProjectsMessage::SubmitForm));
        }

        widgets::card(
            column![
                text("Add New Project").size(16),
                row![
                    labeled_input("Project Name", "Enter project name", &self.form.name, |v| {
                        msg(AdminProjectsMessage::FormName(v))
                    }),
                    labeled_input(
                        "Department",
                        "e.g., Public Works",
                        &self.form.department,
                        |v| msg(AdminProjectsMessage::FormDepartment(v)),
                    ),
                ]
                .spacing(12),
                row![
                    column![
                        text("Project Type").size(13),
                        pick_list(ProjectCategory::ALL, self.form.category, |c| {
                            msg(AdminProjectsMessage::FormCategory(c))
                        })
                        .placeholder("Select type")
                        .width(Length::Fill),
                    ]
                    .spacing(4)
                    .width(Length::FillPortion(1)),
                    labeled_input("Budget (INR)", "Enter budget", &self.form.budget, |v| {
                        msg(AdminProjectsMessage::FormBudget(v))
                    }),
                ]
                .spacing(12),
                row![
                    labeled_input("Start Date", "YYYY-MM-DD", &self.form.start_date, |v| {
                        msg(AdminProjectsMessage::FormStartDate(v))
                    }),
                    labeled_input("End Date", "YYYY-MM-DD", &self.form.end_date, |v| {
                        msg(AdminProjectsMessage::FormEndDate(v))
                    }),
                ]
                .spacing(12),
                row![
                    column![
                        text("Assign Contractor").size(13),
                        pick_list(
                            self.contractor_options.as_slice(),
                            self.form.contractor.clone(),
                            |c| msg(AdminProjectsMessage::FormContractor(c)),
                        )
                        .placeholder("Select contractor")
                        .width(Length::Fill),
                    ]
                    .spacing(4)
                    .width(Length::FillPortion(1)),
                    labeled_input("Location", "Enter location", &self.form.location, |v| {
                        msg(AdminProjectsMessage::FormLocation(v))
                    }),
                ]
                .spacing(12),
                labeled_input(
                    "Description",
                    "Project description...",
                    &self.form.description,
                    |v| msg(AdminProjectsMessage::FormDescription(v)),
                ),
                row![
                    button(text("Cancel").size(14))
                        .style(button::secondary)
                        .on_press(msg(AdminProjectsMessage::CloseForm)),
                    submit,
                ]
                .spacing(12),
            ]
            .spacing(12),
        )
        .width(Length::Fill)
        .into()
    }
}

impl Screen for AdminProjectsScreen {
    type Message = AdminProjectsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            text_input("Search projects...", &self.search)
                .on_input(|v| msg(AdminProjectsMessage::SearchChanged(v)))
                .padding(8)
                .width(Length::Fill),
            button(text("Add Project").size(14)).on_press(msg(AdminProjectsMessage::OpenForm)),
        ]
        .spacing(12);

        let filter = ProjectFilter {
            search: self.search.clone(),
            scope: SearchScope::NameAndContractor,
            ..ProjectFilter::default()
        };

        let mut table = column![].spacing(10);
        for project in filter.apply(&self.projects) {
            table = table.push(
                row![
                    column![
                        text(project.name.clone()).size(13),
                        text(project.department.clone())
                            .size(11)
                            .color(widgets::muted_text_color()),
                    ]
                    .spacing(2)
                    .width(Length::FillPortion(3)),
                    text(project.category.label())
                        .size(12)
                        .width(Length::FillPortion(1)),
                    text(project.contractor.clone())
                        .size(12)
                        .color(widgets::muted_text_color())
                        .width(Length::FillPortion(2)),
                    text(format_inr(project.budget))
                        .size(12)
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
                    button(text("Delete").size(12))
                        .style(button::text)
                        .on_press(msg(AdminProjectsMessage::Delete(project.id.clone()))),
                ]
                .spacing(12)
                .align_y(iced::Alignment::Center),
            );
        }

        let mut content = column![header].spacing(16);
        if self.show_form {
            content = content.push(self.form_view());
        }
        content = content.push(widgets::card(table).width(Length::Fill));

        widgets::layout(
            Role::Admin,
            "Manage Projects",
            "Add, edit, and manage all government projects",
            &Route::Projects(Role::Admin),
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
            AdminProjectsMessage::SearchChanged(value) => {
                self.search = value;
                Task::none()
            }
            AdminProjectsMessage::OpenForm => {
                self.show_form = true;
                Task::none()
            }
            AdminProjectsMessage::CloseForm => {
                self.show_form = false;
                Task::none()
            }
            AdminProjectsMessage::FormName(v) => {
                self.form.name = v;
                Task::none()
            }
            AdminProjectsMessage::FormDepartment(v) => {
                self.form.department = v;
                Task::none()
            }
            AdminProjectsMessage::FormCategory(category) => {
                self.form.category = Some(category);
                Task::none()
            }
            AdminProjectsMessage::FormBudget(v) => {
                self.form.budget = digits_only(&v, 12);
                Task::none()
            }
            AdminProjectsMessage::FormStartDate(v) => {
                self.form.start_date = v;
                Task::none()
            }
            AdminProjectsMessage::FormEndDate(v) => {
                self.form.end_date = v;
                Task::none()
            }
            AdminProjectsMessage::FormContractor(option) => {
                self.form.contractor = Some(option);
                Task::none()
            }
            AdminProjectsMessage::FormLocation(v) => {
                self.form.location = v;
                Task::none()
            }
            AdminProjectsMessage::FormDescription(v) => {
                self.form.description = v;
                Task::none()
            }
            AdminProjectsMessage::SubmitForm => {
                self.form = NewProjectForm::default();
                self.show_form = false;
                Task::done(toast(
                    "Project Added",
                    "New project has been created successfully.",
                ))
            }
            AdminProjectsMessage::Delete(_) => Task::done(toast(
                "Project Deleted",
                "The project has been removed.",
            )),
        }
    }
}

fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> ScreenMessage<AdminProjectsScreen> + 'a,
) -> Element<'a, ScreenMessage<AdminProjectsScreen>> {
    column![
        text(label).size(13),
        text_input(placeholder, value).on_input(on_input).padding(8),
    ]
    .spacing(4)
    .width(Length::FillPortion(1))
    .into()
}
