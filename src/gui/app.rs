use iced::{Element, Task, Theme};

use crate::core::route::Route;

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, loading::LoadingScreen},
    widgets,
};

pub struct GovTrackApp {
    state: AppState,
    screen: ScreenData,
}

impl GovTrackApp {
    pub fn new(start: Route) -> (Self, Task<Message>) {
        let state = AppState::default();
        let store = state.store.clone();
        let load = Task::perform(ScreenData::load(start, store), |screen| {
            Message::ScreenLoaded(Box::new(screen))
        });
        (
            Self {
                state,
                screen: ScreenData::Loading(LoadingScreen),
            },
            load,
        )
    }

    pub fn title(&self) -> String {
        let page = match &self.screen {
            ScreenData::Loading(_) => "Loading",
            ScreenData::Landing(_) => "Transparent Government Project Tracker",
            ScreenData::CitizenLogin(_) | ScreenData::StaffLogin(_) => "Sign In",
            ScreenData::CitizenDashboard(_) | ScreenData::ContractorDashboard(_) => "Dashboard",
            ScreenData::CitizenComplaints(_) => "My Complaints",
            ScreenData::ProjectDetails(_) => "Project Details",
            ScreenData::ContractorUpdates(_) => "Submit Updates",
            ScreenData::AdminDashboard(_) => "Admin Dashboard",
            ScreenData::AdminProjects(_) => "Manage Projects",
            ScreenData::AdminComplaints(_) => "All Complaints",
            ScreenData::AdminAnalytics(_) => "Analytics",
            ScreenData::NotFound(_) => "Not Found",
        };
        format!("GovTrack - {page}")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        });
        widgets::toast_overlay(content, &self.state.toasts, Message::DismissToast)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Open the application at the given start route.
pub fn run(start: Route) -> iced::Result {
    iced::application(
        move || GovTrackApp::new(start.clone()),
        GovTrackApp::update,
        GovTrackApp::view,
    )
    .title(GovTrackApp::title)
    .theme(GovTrackApp::theme)
    .run()
}
