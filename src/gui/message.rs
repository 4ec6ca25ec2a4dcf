use crate::core::route::Route;
use crate::gui::screens::{
    ScreenData, ScreenMessage, admin_analytics::AdminAnalyticsScreen,
    admin_complaints::AdminComplaintsScreen, admin_dashboard::AdminDashboardScreen,
    admin_projects::AdminProjectsScreen, citizen_complaints::CitizenComplaintsScreen,
    citizen_dashboard::CitizenDashboardScreen, citizen_login::CitizenLoginScreen,
    contractor_dashboard::ContractorDashboardScreen,
    contractor_updates::ContractorUpdatesScreen, landing::LandingScreen,
    loading::LoadingScreen, not_found::NotFoundScreen, project_details::ProjectDetailsScreen,
    staff_login::StaffLoginScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Loading(ScreenMessage<LoadingScreen>),
    Landing(ScreenMessage<LandingScreen>),
    CitizenLogin(ScreenMessage<CitizenLoginScreen>),
    StaffLogin(ScreenMessage<StaffLoginScreen>),
    CitizenDashboard(ScreenMessage<CitizenDashboardScreen>),
    CitizenComplaints(ScreenMessage<CitizenComplaintsScreen>),
    ProjectDetails(ScreenMessage<ProjectDetailsScreen>),
    ContractorDashboard(ScreenMessage<ContractorDashboardScreen>),
    ContractorUpdates(ScreenMessage<ContractorUpdatesScreen>),
    AdminDashboard(ScreenMessage<AdminDashboardScreen>),
    AdminProjects(ScreenMessage<AdminProjectsScreen>),
    AdminComplaints(ScreenMessage<AdminComplaintsScreen>),
    AdminAnalytics(ScreenMessage<AdminAnalyticsScreen>),
    NotFound(ScreenMessage<NotFoundScreen>),
    Navigate(Route),
    ScreenLoaded(Box<ScreenData>),
    DismissToast(u64),
}
