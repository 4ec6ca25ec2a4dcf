use std::future::Future;

use time::Date;

/// Fixed set of complaint categories a citizen can file under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintCategory {
    RoadIssue,
    DelayIssue,
    ServiceProblem,
    QualityConcern,
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 5] = [
        ComplaintCategory::RoadIssue,
        ComplaintCategory::DelayIssue,
        ComplaintCategory::ServiceProblem,
        ComplaintCategory::QualityConcern,
        ComplaintCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComplaintCategory::RoadIssue => "Road issue",
            ComplaintCategory::DelayIssue => "Delay issue",
            ComplaintCategory::ServiceProblem => "Service problem",
            ComplaintCategory::QualityConcern => "Quality concern",
            ComplaintCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolution stage of a complaint. Variant order is the stepper order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ComplaintStatus {
    Submitted,
    UnderReview,
    Assigned,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 4] = [
        ComplaintStatus::Submitted,
        ComplaintStatus::UnderReview,
        ComplaintStatus::Assigned,
        ComplaintStatus::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::UnderReview => "Under Review",
            ComplaintStatus::Assigned => "Assigned",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    /// Position of this status in the stepper, 0-based.
    pub fn index(self) -> usize {
        match self {
            ComplaintStatus::Submitted => 0,
            ComplaintStatus::UnderReview => 1,
            ComplaintStatus::Assigned => 2,
            ComplaintStatus::Resolved => 3,
        }
    }

    /// Derive the four stepper entries for a complaint currently at `self`.
    /// A step is completed iff its index is at or before the current one,
    /// and current iff equal. Purely a rendering derivation.
    pub fn steps(self) -> [StatusStep; 4] {
        let current = self.index();
        let mut steps = [StatusStep {
            label: "",
            completed: false,
            current: false,
        }; 4];
        for (i, status) in ComplaintStatus::ALL.iter().enumerate() {
            steps[i] = StatusStep {
                label: status.label(),
                completed: i <= current,
                current: i == current,
            };
        }
        steps
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the four-stage status stepper shown per complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStep {
    pub label: &'static str,
    pub completed: bool,
    pub current: bool,
}

/// A citizen complaint filed against a project.
#[derive(Debug, Clone)]
pub struct Complaint {
    pub id: String,
    pub project_id: String,
    /// Denormalized from the project record.
    pub project_name: String,
    pub citizen_id: String,
    pub category: ComplaintCategory,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: Date,
    pub image: Option<String>,
    /// Contractor id the complaint was assigned to, if any.
    pub assigned_to: Option<String>,
}

pub trait ComplaintRepository {
    fn get_complaints(&self) -> impl Future<Output = anyhow::Result<Vec<Complaint>>>;
    fn get_complaints_by_citizen(
        &self,
        citizen_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Complaint>>>;
    fn get_complaints_assigned_to(
        &self,
        contractor_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Complaint>>>;
}
