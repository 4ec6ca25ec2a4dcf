//! Pure filter predicates over the fixture collections. Criteria combine
//! with logical AND, "all" choices pass everything through, and results keep
//! the original relative order. Linear scans are fine at fixture size.

use super::store::{
    Complaint, ComplaintStatus, Project, ProjectCategory, ProjectStatus,
};

/// Category criterion for project lists, including the "All Types"
/// placeholder that matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryChoice {
    pub const ALL: [CategoryChoice; 5] = [
        CategoryChoice::All,
        CategoryChoice::Only(ProjectCategory::Road),
        CategoryChoice::Only(ProjectCategory::Water),
        CategoryChoice::Only(ProjectCategory::Electricity),
        CategoryChoice::Only(ProjectCategory::Health),
    ];

    fn matches(self, category: ProjectCategory) -> bool {
        match self {
            CategoryChoice::All => true,
            CategoryChoice::Only(c) => c == category,
        }
    }
}

impl std::fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryChoice::All => f.write_str("All Types"),
            CategoryChoice::Only(c) => f.write_str(c.label()),
        }
    }
}

/// Status criterion for project lists, including the "All Status"
/// placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusChoice {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusChoice {
    pub const ALL: [StatusChoice; 4] = [
        StatusChoice::All,
        StatusChoice::Only(ProjectStatus::OnTrack),
        StatusChoice::Only(ProjectStatus::Delayed),
        StatusChoice::Only(ProjectStatus::Completed),
    ];

    fn matches(self, status: ProjectStatus) -> bool {
        match self {
            StatusChoice::All => true,
            StatusChoice::Only(s) => s == status,
        }
    }
}

impl std::fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusChoice::All => f.write_str("All Status"),
            StatusChoice::Only(s) => f.write_str(s.label()),
        }
    }
}

/// Which display fields the free-text search looks at. The citizen and
/// contractor lists search name and department; the admin table searches
/// name and contractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    NameAndDepartment,
    NameAndContractor,
}

/// Combined criteria for a project list view.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub search: String,
    pub scope: SearchScope,
    pub category: CategoryChoice,
    pub status: StatusChoice,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || match self.scope {
                SearchScope::NameAndDepartment => {
                    project.name.to_lowercase().contains(&needle)
                        || project.department.to_lowercase().contains(&needle)
                }
                SearchScope::NameAndContractor => {
                    project.name.to_lowercase().contains(&needle)
                        || project.contractor.to_lowercase().contains(&needle)
                }
            };
        matches_search
            && self.category.matches(project.category)
            && self.status.matches(project.status)
    }

    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Status criterion for complaint lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComplaintStatusChoice {
    #[default]
    All,
    Only(ComplaintStatus),
}

impl ComplaintStatusChoice {
    pub const ALL: [ComplaintStatusChoice; 5] = [
        ComplaintStatusChoice::All,
        ComplaintStatusChoice::Only(ComplaintStatus::Submitted),
        ComplaintStatusChoice::Only(ComplaintStatus::UnderReview),
        ComplaintStatusChoice::Only(ComplaintStatus::Assigned),
        ComplaintStatusChoice::Only(ComplaintStatus::Resolved),
    ];

    fn matches(self, status: ComplaintStatus) -> bool {
        match self {
            ComplaintStatusChoice::All => true,
            ComplaintStatusChoice::Only(s) => s == status,
        }
    }
}

impl std::fmt::Display for ComplaintStatusChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatusChoice::All => f.write_str("All Status"),
            ComplaintStatusChoice::Only(s) => f.write_str(s.label()),
        }
    }
}

/// Combined criteria for a complaint list view. Free text searches the
/// project name and the complaint description.
#[derive(Debug, Clone, Default)]
pub struct ComplaintFilter {
    pub search: String,
    pub status: ComplaintStatusChoice,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || complaint.project_name.to_lowercase().contains(&needle)
            || complaint.description.to_lowercase().contains(&needle);
        matches_search && self.status.matches(complaint.status)
    }

    pub fn apply(&self, complaints: &[Complaint]) -> Vec<Complaint> {
        complaints
            .iter()
            .filter(|c| self.matches(c))
            .cloned()
            .collect()
    }
}
