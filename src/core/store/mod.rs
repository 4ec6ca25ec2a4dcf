mod complaint;
mod contractor;
mod fixtures;
mod project;

use std::sync::Arc;

use tracing::debug;

pub use complaint::{
    Complaint, ComplaintCategory, ComplaintRepository, ComplaintStatus, StatusStep,
};
pub use contractor::{Contractor, ContractorRepository};
pub use fixtures::{DEMO_CITIZEN_ID, DEMO_CONTRACTOR_ID};
pub use project::{
    ProgressBand, Project, ProjectCategory, ProjectRepository, ProjectStatus,
};

/// Read-only store over the built-in sample dataset.
///
/// This is the only repository implementation in the crate; the traits exist
/// so a real backend could be injected without touching view code. Cloning is
/// cheap, the dataset is shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    data: Arc<FixtureData>,
}

#[derive(Debug)]
struct FixtureData {
    projects: Vec<Project>,
    contractors: Vec<Contractor>,
    complaints: Vec<Complaint>,
}

impl FixtureStore {
    pub fn new() -> Self {
        let data = FixtureData {
            projects: fixtures::sample_projects(),
            contractors: fixtures::sample_contractors(),
            complaints: fixtures::sample_complaints(),
        };
        debug!(
            projects = data.projects.len(),
            contractors = data.contractors.len(),
            complaints = data.complaints.len(),
            "fixture store created"
        );
        Self {
            data: Arc::new(data),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectRepository for FixtureStore {
    async fn get_projects(&self) -> anyhow::Result<Vec<Project>> {
        Ok(self.data.projects.clone())
    }

    async fn get_project_by_id(&self, id: &str) -> anyhow::Result<Option<Project>> {
        Ok(self.data.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_projects_by_contractor(
        &self,
        contractor_id: &str,
    ) -> anyhow::Result<Vec<Project>> {
        Ok(self
            .data
            .projects
            .iter()
            .filter(|p| p.contractor_id == contractor_id)
            .cloned()
            .collect())
    }
}

impl ContractorRepository for FixtureStore {
    async fn get_contractors(&self) -> anyhow::Result<Vec<Contractor>> {
        Ok(self.data.contractors.clone())
    }

    async fn get_contractor_by_id(&self, id: &str) -> anyhow::Result<Option<Contractor>> {
        Ok(self.data.contractors.iter().find(|c| c.id == id).cloned())
    }
}

impl ComplaintRepository for FixtureStore {
    async fn get_complaints(&self) -> anyhow::Result<Vec<Complaint>> {
        Ok(self.data.complaints.clone())
    }

    async fn get_complaints_by_citizen(
        &self,
        citizen_id: &str,
    ) -> anyhow::Result<Vec<Complaint>> {
        Ok(self
            .data
            .complaints
            .iter()
            .filter(|c| c.citizen_id == citizen_id)
            .cloned()
            .collect())
    }

    async fn get_complaints_assigned_to(
        &self,
        contractor_id: &str,
    ) -> anyhow::Result<Vec<Complaint>> {
        Ok(self
            .data
            .complaints
            .iter()
            .filter(|c| c.assigned_to.as_deref() == Some(contractor_id))
            .cloned()
            .collect())
    }
}
