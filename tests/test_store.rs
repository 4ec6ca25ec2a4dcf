//! Integration tests for the fixture store repositories.
//!
//! Tests cover:
//! - Listing order and record counts
//! - Lookup by id, including the unknown-id case (Ok(None), not an error)
//! - Contractor- and citizen-scoped accessors

mod common;

use common::*;
use govtrack::core::store::{DEMO_CITIZEN_ID, DEMO_CONTRACTOR_ID};

#[tokio::test]
async fn listings_keep_insertion_order() -> anyhow::Result<()> {
    let store = store();

    let projects = store.get_projects().await?;
    assert_eq!(projects.len(), 6);
    assert_eq!(projects[0].id, "PRJ001");
    assert_eq!(projects[5].id, "PRJ006");

    let contractors = store.get_contractors().await?;
    assert_eq!(contractors.len(), 4);
    assert_eq!(contractors[0].id, "CON001");

    let complaints = store.get_complaints().await?;
    assert_eq!(complaints.len(), 4);
    assert_eq!(complaints[3].id, "CMP004");
    Ok(())
}

#[tokio::test]
async fn lookup_by_unknown_id_is_none_not_an_error() -> anyhow::Result<()> {
    let store = store();

    assert!(store.get_project_by_id("PRJ999").await?.is_none());
    assert!(store.get_contractor_by_id("CON999").await?.is_none());

    let project = store.get_project_by_id("PRJ003").await?;
    assert_eq!(
        project.map(|p| p.name),
        Some("Solar Power Grid Phase-2".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn projects_scoped_to_a_contractor() -> anyhow::Result<()> {
    let store = store();

    let projects = store.get_projects_by_contractor(DEMO_CONTRACTOR_ID).await?;
    assert_eq!(ids(&projects), vec!["PRJ001", "PRJ004", "PRJ006"]);

    let none = store.get_projects_by_contractor("CON999").await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn complaints_scoped_to_citizen_and_contractor() -> anyhow::Result<()> {
    let store = store();

    let filed: Vec<String> = store
        .get_complaints_by_citizen(DEMO_CITIZEN_ID)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(filed, vec!["CMP001", "CMP002"]);

    let assigned: Vec<String> = store
        .get_complaints_assigned_to(DEMO_CONTRACTOR_ID)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(assigned, vec!["CMP001", "CMP003"]);

    // CMP004 is unassigned and must not show up for anyone.
    let unassigned = store.get_complaints_assigned_to("CON999").await?;
    assert!(unassigned.is_empty());
    Ok(())
}

#[tokio::test]
async fn delay_reasons_only_exist_on_delayed_projects() -> anyhow::Result<()> {
    let projects = all_projects().await;
    for project in &projects {
        if project.status == ProjectStatus::Delayed {
            assert!(project.delay_reason.is_some(), "{} lacks a reason", project.id);
        } else {
            assert!(project.delay_reason.is_none());
        }
    }
    Ok(())
}
