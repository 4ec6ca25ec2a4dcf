//! Aggregate figures the dashboards compute inline: counts, sums, rounded
//! averages and percentage shares over the (filtered or full) collections.

use super::store::{Complaint, ComplaintStatus, Project, ProjectCategory, ProjectStatus};

/// Project counts broken down by status, plus the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub total: usize,
    pub on_track: usize,
    pub delayed: usize,
    pub completed: usize,
}

pub fn status_counts(projects: &[Project]) -> StatusCounts {
    let mut counts = StatusCounts {
        total: projects.len(),
        ..StatusCounts::default()
    };
    for project in projects {
        match project.status {
            ProjectStatus::OnTrack => counts.on_track += 1,
            ProjectStatus::Delayed => counts.delayed += 1,
            ProjectStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

/// Count of projects in each category, in declaration order.
pub fn category_counts(projects: &[Project]) -> [(ProjectCategory, usize); 4] {
    ProjectCategory::ALL.map(|category| {
        let count = projects.iter().filter(|p| p.category == category).count();
        (category, count)
    })
}

/// Sum of sanctioned budgets in rupees.
pub fn total_budget(projects: &[Project]) -> i64 {
    projects.iter().map(|p| p.budget).sum()
}

/// Mean completion percentage, rounded to the nearest integer. Empty input
/// yields 0.
pub fn average_progress(projects: &[Project]) -> u8 {
    if projects.is_empty() {
        return 0;
    }
    let sum: u32 = projects.iter().map(|p| u32::from(p.progress)).sum();
    let count = projects.len() as u32;
    ((sum + count / 2) / count) as u8
}

/// Mean completion percentage of the projects in one category.
pub fn average_progress_for(projects: &[Project], category: ProjectCategory) -> u8 {
    let in_category: Vec<Project> = projects
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect();
    average_progress(&in_category)
}

/// Integer percentage share of `part` within `total`. Returns 0 for a zero
/// denominator.
pub fn share_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part * 100 + total / 2) / total) as u8
}

/// Integer percentage share of a budget slice within a total budget.
pub fn budget_share_percent(part: i64, total: i64) -> u8 {
    if total <= 0 {
        return 0;
    }
    ((part * 100 + total / 2) / total) as u8
}

/// Combined budget of one department's projects.
pub fn department_budget(projects: &[Project], department: &str) -> i64 {
    projects
        .iter()
        .filter(|p| p.department == department)
        .map(|p| p.budget)
        .sum()
}

/// Departments in first-seen order.
pub fn departments(projects: &[Project]) -> Vec<String> {
    let mut seen = Vec::new();
    for project in projects {
        if !seen.contains(&project.department) {
            seen.push(project.department.clone());
        }
    }
    seen
}

/// The `limit` most recently started projects, newest first. Ties keep the
/// original relative order.
pub fn recent_projects(projects: &[Project], limit: usize) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted.truncate(limit);
    sorted
}

/// Complaints not yet resolved, order preserved.
pub fn pending_complaints(complaints: &[Complaint]) -> Vec<Complaint> {
    complaints
        .iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .cloned()
        .collect()
}

pub fn pending_complaint_count(complaints: &[Complaint]) -> usize {
    complaints
        .iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .count()
}

/// Projects not yet completed.
pub fn active_project_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|p| p.status != ProjectStatus::Completed)
        .count()
}
