//! Integration tests for the fixture query layer.
//!
//! Tests cover:
//! - Pass-through behavior of empty/"all" criteria
//! - Free-text search over the declared display fields
//! - Category and status filters, alone and AND-combined
//! - Order preservation of the result set

mod common;

use common::*;

#[tokio::test]
async fn default_filter_is_a_pass_through() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let result = ProjectFilter::default().apply(&projects);

    assert_eq!(result.len(), 6);
    assert_eq!(
        ids(&result),
        vec!["PRJ001", "PRJ002", "PRJ003", "PRJ004", "PRJ005", "PRJ006"]
    );
    Ok(())
}

#[tokio::test]
async fn search_matches_name_case_insensitively() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let filter = ProjectFilter {
        search: "HIGHWAY".to_string(),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ001"]);
    Ok(())
}

#[tokio::test]
async fn search_matches_department_in_dashboard_scope() -> anyhow::Result<()> {
    let projects = all_projects().await;

    // "Energy Department" owns PRJ003 and PRJ005; neither name contains
    // the needle.
    let filter = ProjectFilter {
        search: "energy".to_string(),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ003", "PRJ005"]);
    Ok(())
}

#[tokio::test]
async fn admin_scope_searches_contractor_instead_of_department() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let filter = ProjectFilter {
        search: "buildright".to_string(),
        scope: SearchScope::NameAndContractor,
        ..ProjectFilter::default()
    };
    assert_eq!(
        ids(&filter.apply(&projects)),
        vec!["PRJ001", "PRJ004", "PRJ006"]
    );

    // The same needle finds nothing in the citizen scope.
    let filter = ProjectFilter {
        search: "buildright".to_string(),
        ..ProjectFilter::default()
    };
    assert!(filter.apply(&projects).is_empty());
    Ok(())
}

#[tokio::test]
async fn category_filter_preserves_order() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let filter = ProjectFilter {
        category: CategoryChoice::Only(ProjectCategory::Road),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ001", "PRJ006"]);

    let filter = ProjectFilter {
        category: CategoryChoice::Only(ProjectCategory::Electricity),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ003", "PRJ005"]);
    Ok(())
}

#[tokio::test]
async fn status_filter_selects_exactly_matching_projects() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let filter = ProjectFilter {
        status: StatusChoice::Only(ProjectStatus::Delayed),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ002", "PRJ006"]);
    Ok(())
}

#[tokio::test]
async fn combined_criteria_are_anded() -> anyhow::Result<()> {
    let projects = all_projects().await;

    let filter = ProjectFilter {
        category: CategoryChoice::Only(ProjectCategory::Road),
        status: StatusChoice::Only(ProjectStatus::Delayed),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ006"]);

    // All three criteria active, satisfied only by PRJ006.
    let filter = ProjectFilter {
        search: "ring".to_string(),
        category: CategoryChoice::Only(ProjectCategory::Road),
        status: StatusChoice::Only(ProjectStatus::Delayed),
        ..ProjectFilter::default()
    };
    assert_eq!(ids(&filter.apply(&projects)), vec!["PRJ006"]);

    // A conflicting status empties the result.
    let filter = ProjectFilter {
        search: "ring".to_string(),
        status: StatusChoice::Only(ProjectStatus::Completed),
        ..ProjectFilter::default()
    };
    assert!(filter.apply(&projects).is_empty());
    Ok(())
}

#[tokio::test]
async fn complaint_filter_searches_project_name_and_description() -> anyhow::Result<()> {
    let complaints = all_complaints().await;

    let filter = ComplaintFilter {
        search: "water".to_string(),
        ..ComplaintFilter::default()
    };
    let result = filter.apply(&complaints);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "CMP002");

    // "potholes" only appears in CMP001's description.
    let filter = ComplaintFilter {
        search: "potholes".to_string(),
        ..ComplaintFilter::default()
    };
    let result = filter.apply(&complaints);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "CMP001");
    Ok(())
}

#[tokio::test]
async fn complaint_status_filter_combines_with_search() -> anyhow::Result<()> {
    let complaints = all_complaints().await;

    let filter = ComplaintFilter {
        status: ComplaintStatusChoice::Only(ComplaintStatus::Resolved),
        ..ComplaintFilter::default()
    };
    let result = filter.apply(&complaints);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "CMP003");

    let filter = ComplaintFilter {
        search: "noise".to_string(),
        status: ComplaintStatusChoice::Only(ComplaintStatus::Submitted),
    };
    assert!(filter.apply(&complaints).is_empty());
    Ok(())
}
