//! Integration tests for route-to-screen resolution, including the
//! not-found branch of the project detail page.

#![cfg(feature = "gui")]

mod common;

use common::*;
use govtrack::core::route::{Role, Route};
use govtrack::gui::screens::{ScreenData, project_details::ProjectDetailsScreen};

#[tokio::test]
async fn unknown_project_id_takes_the_not_found_branch() -> anyhow::Result<()> {
    let store = store();

    let screen = ProjectDetailsScreen::new(&store, Role::Citizen, "PRJ999").await;
    assert!(screen.project().is_none());

    let screen = ProjectDetailsScreen::new(&store, Role::Citizen, "PRJ003").await;
    assert_eq!(
        screen.project().map(|p| p.name.as_str()),
        Some("Solar Power Grid Phase-2")
    );
    Ok(())
}

#[tokio::test]
async fn aliased_paths_resolve_to_their_declared_screens() -> anyhow::Result<()> {
    let store = store();

    let screen = ScreenData::load(Route::parse("/citizen/projects"), store.clone()).await;
    assert!(matches!(screen, ScreenData::CitizenDashboard(_)));

    let screen = ScreenData::load(Route::parse("/contractor/complaints"), store.clone()).await;
    assert!(matches!(screen, ScreenData::ContractorDashboard(_)));

    let screen = ScreenData::load(Route::parse("/admin/users"), store.clone()).await;
    assert!(matches!(screen, ScreenData::AdminDashboard(_)));

    let screen = ScreenData::load(Route::parse("/admin/contractors"), store.clone()).await;
    assert!(matches!(screen, ScreenData::AdminDashboard(_)));

    let screen = ScreenData::load(Route::parse("/admin/projects/new"), store.clone()).await;
    assert!(matches!(screen, ScreenData::AdminProjects(_)));

    let screen = ScreenData::load(Route::parse("/definitely/not/a/route"), store).await;
    assert!(matches!(screen, ScreenData::NotFound(_)));
    Ok(())
}
