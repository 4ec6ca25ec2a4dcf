//! Integration tests for the aggregate statistics the dashboards compute.
//! All figures over the fixed sample dataset are deterministic.

mod common;

use common::*;
use govtrack::core::stats;

#[tokio::test]
async fn total_budget_is_the_sum_of_the_literal_budgets() -> anyhow::Result<()> {
    let projects = all_projects().await;
    assert_eq!(stats::total_budget(&projects), 610_000_000);
    Ok(())
}

#[tokio::test]
async fn average_progress_is_the_rounded_mean() -> anyhow::Result<()> {
    let projects = all_projects().await;
    // (68 + 42 + 100 + 55 + 78 + 35) / 6 = 63
    assert_eq!(stats::average_progress(&projects), 63);
    assert_eq!(stats::average_progress(&[]), 0);
    Ok(())
}

#[tokio::test]
async fn status_counts_match_the_dataset() -> anyhow::Result<()> {
    let projects = all_projects().await;
    let counts = stats::status_counts(&projects);
    assert_eq!(counts.total, 6);
    assert_eq!(counts.on_track, 3);
    assert_eq!(counts.delayed, 2);
    assert_eq!(counts.completed, 1);
    Ok(())
}

#[tokio::test]
async fn category_counts_cover_every_category() -> anyhow::Result<()> {
    let projects = all_projects().await;
    let counts = stats::category_counts(&projects);
    assert_eq!(
        counts,
        [
            (ProjectCategory::Road, 2),
            (ProjectCategory::Water, 1),
            (ProjectCategory::Electricity, 2),
            (ProjectCategory::Health, 1),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn per_category_progress_averages() -> anyhow::Result<()> {
    let projects = all_projects().await;
    // Road: (68 + 35) / 2 rounds up to 52.
    assert_eq!(
        stats::average_progress_for(&projects, ProjectCategory::Road),
        52
    );
    assert_eq!(
        stats::average_progress_for(&projects, ProjectCategory::Water),
        42
    );
    assert_eq!(
        stats::average_progress_for(&projects, ProjectCategory::Electricity),
        89
    );
    assert_eq!(
        stats::average_progress_for(&projects, ProjectCategory::Health),
        55
    );
    Ok(())
}

#[test]
fn share_percent_guards_the_zero_denominator() {
    assert_eq!(stats::share_percent(2, 6), 33);
    assert_eq!(stats::share_percent(1, 4), 25);
    assert_eq!(stats::share_percent(0, 6), 0);
    assert_eq!(stats::share_percent(3, 0), 0);
    assert_eq!(stats::budget_share_percent(375_000_000, 610_000_000), 61);
    assert_eq!(stats::budget_share_percent(1, 0), 0);
}

#[tokio::test]
async fn departments_and_their_budgets() -> anyhow::Result<()> {
    let projects = all_projects().await;
    assert_eq!(
        stats::departments(&projects),
        vec![
            "Public Works Department",
            "Water Supply Board",
            "Energy Department",
            "Health Ministry",
        ]
    );
    assert_eq!(
        stats::department_budget(&projects, "Public Works Department"),
        375_000_000
    );
    assert_eq!(
        stats::department_budget(&projects, "Energy Department"),
        123_000_000
    );
    assert_eq!(stats::department_budget(&projects, "Unknown"), 0);
    Ok(())
}

#[tokio::test]
async fn recent_projects_sort_by_start_date_descending() -> anyhow::Result<()> {
    let projects = all_projects().await;
    let recent = stats::recent_projects(&projects, 5);
    assert_eq!(
        ids(&recent),
        vec!["PRJ005", "PRJ002", "PRJ004", "PRJ001", "PRJ003"]
    );

    let all = stats::recent_projects(&projects, 10);
    assert_eq!(all.len(), 6);
    assert_eq!(all[5].id, "PRJ006");
    Ok(())
}

#[tokio::test]
async fn pending_complaints_exclude_resolved() -> anyhow::Result<()> {
    let complaints = all_complaints().await;
    let pending = stats::pending_complaints(&complaints);
    assert_eq!(pending.len(), 3);
    assert!(pending.iter().all(|c| c.status != ComplaintStatus::Resolved));
    assert_eq!(stats::pending_complaint_count(&complaints), 3);
    Ok(())
}

#[tokio::test]
async fn active_projects_exclude_completed() -> anyhow::Result<()> {
    let projects = all_projects().await;
    assert_eq!(stats::active_project_count(&projects), 5);
    Ok(())
}
