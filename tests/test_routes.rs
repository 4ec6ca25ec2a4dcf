//! Tests for the route table: parse/path round trips over the full
//! enumeration, alias targets, and the not-found catch-all.

use govtrack::core::route::{Role, Route};

#[test]
fn every_declared_path_round_trips() {
    let paths = [
        "/",
        "/citizen/login",
        "/citizen/dashboard",
        "/citizen/projects",
        "/citizen/project/PRJ001",
        "/citizen/complaints",
        "/citizen/complaints/new",
        "/contractor/login",
        "/contractor/dashboard",
        "/contractor/projects",
        "/contractor/project/PRJ004",
        "/contractor/updates",
        "/contractor/complaints",
        "/admin/login",
        "/admin/dashboard",
        "/admin/projects",
        "/admin/projects/new",
        "/admin/projects/PRJ006",
        "/admin/contractors",
        "/admin/complaints",
        "/admin/analytics",
        "/admin/users",
    ];
    for path in paths {
        let route = Route::parse(path);
        assert_ne!(route, Route::NotFound, "{path} should be a known route");
        assert_eq!(route.path(), path, "{path} should round trip");
    }
}

#[test]
fn parameterized_routes_capture_the_record_id() {
    assert_eq!(
        Route::parse("/citizen/project/PRJ003"),
        Route::ProjectDetails(Role::Citizen, "PRJ003".to_string())
    );
    assert_eq!(
        Route::parse("/admin/projects/PRJ003"),
        Route::ProjectDetails(Role::Admin, "PRJ003".to_string())
    );
    // "new" wins over the id capture.
    assert_eq!(Route::parse("/admin/projects/new"), Route::NewProject);
}

#[test]
fn unknown_paths_hit_the_catch_all() {
    assert_eq!(Route::parse("/nope"), Route::NotFound);
    assert_eq!(Route::parse("/citizen/settings"), Route::NotFound);
    assert_eq!(Route::parse("/admin"), Route::NotFound);
    assert_eq!(Route::parse("/citizen/project"), Route::NotFound);
    assert_eq!(Route::parse("/citizen/project/PRJ001/extra"), Route::NotFound);
}

#[test]
fn trailing_and_duplicate_slashes_are_tolerated() {
    assert_eq!(Route::parse("/citizen/dashboard/"), Route::Dashboard(Role::Citizen));
    assert_eq!(Route::parse("//citizen//login"), Route::Login(Role::Citizen));
    assert_eq!(Route::parse(""), Route::Landing);
}

#[test]
fn routes_know_their_portal() {
    assert_eq!(Route::Landing.role(), None);
    assert_eq!(Route::NotFound.role(), None);
    assert_eq!(Route::Login(Role::Citizen).role(), Some(Role::Citizen));
    assert_eq!(Route::Updates(None).role(), Some(Role::Contractor));
    assert_eq!(Route::NewComplaint(None).role(), Some(Role::Citizen));
    assert_eq!(Route::Analytics.role(), Some(Role::Admin));
    assert_eq!(Route::Contractors.role(), Some(Role::Admin));
}

#[test]
fn sidebar_links_match_the_portal_menus() {
    let citizen: Vec<&str> = Route::sidebar(Role::Citizen)
        .into_iter()
        .map(|(_, label)| label)
        .collect();
    assert_eq!(citizen, vec!["Dashboard", "All Projects", "My Complaints"]);

    let contractor: Vec<&str> = Route::sidebar(Role::Contractor)
        .into_iter()
        .map(|(_, label)| label)
        .collect();
    assert_eq!(
        contractor,
        vec!["Dashboard", "My Projects", "Submit Updates", "Assigned Complaints"]
    );

    let admin = Route::sidebar(Role::Admin);
    assert_eq!(admin.len(), 6);
    assert_eq!(admin[0].0, Route::Dashboard(Role::Admin));
    assert_eq!(admin[4].0, Route::Analytics);
}
