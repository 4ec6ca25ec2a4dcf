use std::future::Future;

use time::Date;

/// What kind of infrastructure a project builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Road,
    Water,
    Electricity,
    Health,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Road,
        ProjectCategory::Water,
        ProjectCategory::Electricity,
        ProjectCategory::Health,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Road => "Road",
            ProjectCategory::Water => "Water",
            ProjectCategory::Electricity => "Electricity",
            ProjectCategory::Health => "Health",
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Delivery status as recorded on the project.
/// Stored independently of `progress`; the two are never cross-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    OnTrack,
    Delayed,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::OnTrack,
        ProjectStatus::Delayed,
        ProjectStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::OnTrack => "On-track",
            ProjectStatus::Delayed => "Delayed",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A government infrastructure project.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub department: String,
    pub category: ProjectCategory,
    /// Sanctioned budget in whole rupees.
    pub budget: i64,
    pub start_date: Date,
    pub end_date: Date,
    /// Display name of the assigned contractor, denormalized from the
    /// contractor record.
    pub contractor: String,
    pub contractor_id: String,
    /// Completion percentage as stored; may exceed 100. Use
    /// [`Project::clamped_progress`] for rendering.
    pub progress: u8,
    pub status: ProjectStatus,
    pub description: String,
    pub delay_reason: Option<String>,
    pub images: Vec<String>,
    pub documents: Vec<String>,
    pub location: String,
}

impl Project {
    /// Progress clamped into the renderable 0–100 range. The unsigned type
    /// already rules out negatives, so only the top end needs capping.
    pub fn clamped_progress(&self) -> u8 {
        self.progress.min(100)
    }
}

/// Color band a progress value falls into when rendered as a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Success,
    Info,
    Warning,
    Critical,
}

impl ProgressBand {
    /// Band thresholds: >=75 success, >=50 info, >=25 warning, below critical.
    /// The input is clamped first so out-of-range stored values land in a band.
    pub fn for_progress(progress: u8) -> ProgressBand {
        match progress.min(100) {
            75..=100 => ProgressBand::Success,
            50..=74 => ProgressBand::Info,
            25..=49 => ProgressBand::Warning,
            _ => ProgressBand::Critical,
        }
    }
}

pub trait ProjectRepository {
    fn get_projects(&self) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
    fn get_project_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Project>>>;
    fn get_projects_by_contractor(
        &self,
        contractor_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Project>>>;
}
