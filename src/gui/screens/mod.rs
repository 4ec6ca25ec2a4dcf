pub mod admin_analytics;
pub mod admin_complaints;
pub mod admin_dashboard;
pub mod admin_projects;
pub mod citizen_complaints;
pub mod citizen_dashboard;
pub mod citizen_login;
pub mod contractor_dashboard;
pub mod contractor_updates;
pub mod landing;
pub mod loading;
pub mod not_found;
pub mod project_details;
pub mod staff_login;

use std::time::Duration;

use iced::{Element, Task};
use tracing::debug;

use crate::core::route::{Role, Route};
use crate::core::store::FixtureStore;
use crate::gui::{AppState, Message};

/// How long a toast stays up before auto-dismissing.
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// What a screen can ask of the application: go somewhere, or raise a toast.
#[derive(Debug, Clone)]
pub enum ParentMessage {
    Navigate(Route),
    Toast { title: String, body: String },
}

/// Shorthand for a navigation parent message in a view.
pub fn navigate<S>(route: Route) -> ScreenMessage<S>
where
    S: Screen<ParentMessage = ParentMessage>,
{
    ScreenMessage::ParentMessage(ParentMessage::Navigate(route))
}

/// Shorthand for a toast parent message.
pub fn toast<S>(title: impl Into<String>, body: impl Into<String>) -> ScreenMessage<S>
where
    S: Screen<ParentMessage = ParentMessage>,
{
    ScreenMessage::ParentMessage(ParentMessage::Toast {
        title: title.into(),
        body: body.into(),
    })
}

/// Entry for the project and contractor pick lists.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOption {
    pub id: String,
    pub label: String,
}

impl PickOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl std::fmt::Display for PickOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Loading(loading::LoadingScreen),
    Landing(landing::LandingScreen),
    CitizenLogin(citizen_login::CitizenLoginScreen),
    StaffLogin(staff_login::StaffLoginScreen),
    CitizenDashboard(citizen_dashboard::CitizenDashboardScreen),
    CitizenComplaints(citizen_complaints::CitizenComplaintsScreen),
    ProjectDetails(project_details::ProjectDetailsScreen),
    ContractorDashboard(contractor_dashboard::ContractorDashboardScreen),
    ContractorUpdates(contractor_updates::ContractorUpdatesScreen),
    AdminDashboard(admin_dashboard::AdminDashboardScreen),
    AdminProjects(admin_projects::AdminProjectsScreen),
    AdminComplaints(admin_complaints::AdminComplaintsScreen),
    AdminAnalytics(admin_analytics::AdminAnalyticsScreen),
    NotFound(not_found::NotFoundScreen),
}

impl ScreenData {
    /// Resolve a route to its screen, reading whatever the view needs from
    /// the store. Aliased paths land on the same screens the route table
    /// binds them to (`/citizen/projects` is the citizen dashboard, and so
    /// on). There is no access check.
    pub async fn load(route: Route, store: FixtureStore) -> ScreenData {
        match route {
            Route::Landing => ScreenData::Landing(landing::LandingScreen),
            Route::Login(Role::Citizen) => {
                ScreenData::CitizenLogin(citizen_login::CitizenLoginScreen::default())
            }
            Route::Login(role) => {
                ScreenData::StaffLogin(staff_login::StaffLoginScreen::new(role))
            }
            Route::Dashboard(Role::Citizen) | Route::Projects(Role::Citizen) => {
                ScreenData::CitizenDashboard(
                    citizen_dashboard::CitizenDashboardScreen::new(&store, route).await,
                )
            }
            Route::Dashboard(Role::Contractor)
            | Route::Projects(Role::Contractor)
            | Route::Complaints(Role::Contractor) => ScreenData::ContractorDashboard(
                contractor_dashboard::ContractorDashboardScreen::new(&store, route).await,
            ),
            Route::Dashboard(Role::Admin) | Route::Contractors | Route::Users => {
                ScreenData::AdminDashboard(
                    admin_dashboard::AdminDashboardScreen::new(&store, route).await,
                )
            }
            Route::Projects(Role::Admin) => ScreenData::AdminProjects(
                admin_projects::AdminProjectsScreen::new(&store, false).await,
            ),
            Route::NewProject => ScreenData::AdminProjects(
                admin_projects::AdminProjectsScreen::new(&store, true).await,
            ),
            Route::ProjectDetails(role, id) => ScreenData::ProjectDetails(
                project_details::ProjectDetailsScreen::new(&store, role, &id).await,
            ),
            Route::Complaints(Role::Citizen) => ScreenData::CitizenComplaints(
                citizen_complaints::CitizenComplaintsScreen::new(&store, None, false).await,
            ),
            Route::NewComplaint(preselect) => ScreenData::CitizenComplaints(
                citizen_complaints::CitizenComplaintsScreen::new(&store, preselect, true).await,
            ),
            Route::Updates(preselect) => ScreenData::ContractorUpdates(
                contractor_updates::ContractorUpdatesScreen::new(&store, preselect).await,
            ),
            Route::Complaints(Role::Admin) => ScreenData::AdminComplaints(
                admin_complaints::AdminComplaintsScreen::new(&store).await,
            ),
            Route::Analytics => ScreenData::AdminAnalytics(
                admin_analytics::AdminAnalyticsScreen::new(&store).await,
            ),
            Route::NotFound => ScreenData::NotFound(not_found::NotFoundScreen),
        }
    }
}

fn handle_parent(
    state: &mut AppState,
    message: ParentMessage,
) -> Task<ScreenMessage<ScreenData>> {
    match message {
        ParentMessage::Navigate(route) => {
            debug!("navigating to {}", route.path());
            Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
        }
        ParentMessage::Toast { title, body } => {
            let id = state.push_toast(title, body);
            Task::perform(tokio::time::sleep(TOAST_TTL), move |_| {
                ScreenMessage::ScreenMessage(Message::DismissToast(id))
            })
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Loading(screen) => screen.view().map(Message::Loading),
            ScreenData::Landing(screen) => screen.view().map(Message::Landing),
            ScreenData::CitizenLogin(screen) => screen.view().map(Message::CitizenLogin),
            ScreenData::StaffLogin(screen) => screen.view().map(Message::StaffLogin),
            ScreenData::CitizenDashboard(screen) => {
                screen.view().map(Message::CitizenDashboard)
            }
            ScreenData::CitizenComplaints(screen) => {
                screen.view().map(Message::CitizenComplaints)
            }
            ScreenData::ProjectDetails(screen) => screen.view().map(Message::ProjectDetails),
            ScreenData::ContractorDashboard(screen) => {
                screen.view().map(Message::ContractorDashboard)
            }
            ScreenData::ContractorUpdates(screen) => {
                screen.view().map(Message::ContractorUpdates)
            }
            ScreenData::AdminDashboard(screen) => screen.view().map(Message::AdminDashboard),
            ScreenData::AdminProjects(screen) => screen.view().map(Message::AdminProjects),
            ScreenData::AdminComplaints(screen) => screen.view().map(Message::AdminComplaints),
            ScreenData::AdminAnalytics(screen) => screen.view().map(Message::AdminAnalytics),
            ScreenData::NotFound(screen) => screen.view().map(Message::NotFound),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (_, Message::Navigate(route)) => {
                let store = state.store.clone();
                Task::perform(ScreenData::load(route, store), |screen| {
                    ScreenMessage::ScreenMessage(Message::ScreenLoaded(Box::new(screen)))
                })
            }
            (current, Message::ScreenLoaded(screen)) => {
                *current = *screen;
                Task::none()
            }
            (_, Message::DismissToast(id)) => {
                state.dismiss_toast(id);
                Task::none()
            }
            (ScreenData::Landing(page), Message::Landing(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Landing)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::CitizenLogin(page), Message::CitizenLogin(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::CitizenLogin)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::StaffLogin(page), Message::StaffLogin(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::StaffLogin)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::CitizenDashboard(page), Message::CitizenDashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::CitizenDashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::CitizenComplaints(page), Message::CitizenComplaints(msg)) => match msg
            {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::CitizenComplaints)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::ProjectDetails(page), Message::ProjectDetails(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectDetails)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::ContractorDashboard(page), Message::ContractorDashboard(msg)) => {
                match msg {
                    ScreenMessage::ScreenMessage(msg) => page
                        .update(msg, state)
                        .map(Message::ContractorDashboard)
                        .map(ScreenMessage::ScreenMessage),
                    ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
                }
            }
            (ScreenData::ContractorUpdates(page), Message::ContractorUpdates(msg)) => match msg
            {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ContractorUpdates)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::AdminDashboard(page), Message::AdminDashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AdminDashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::AdminProjects(page), Message::AdminProjects(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AdminProjects)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::AdminComplaints(page), Message::AdminComplaints(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AdminComplaints)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::AdminAnalytics(page), Message::AdminAnalytics(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::AdminAnalytics)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            (ScreenData::NotFound(page), Message::NotFound(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::NotFound)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(msg) => handle_parent(state, msg),
            },
            _ => Task::none(),
        }
    }
}
