mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from govtrack for tests
pub use govtrack::core::query::{
    CategoryChoice, ComplaintFilter, ComplaintStatusChoice, ProjectFilter, SearchScope,
    StatusChoice,
};
pub use govtrack::core::store::{
    Complaint, ComplaintCategory, ComplaintRepository, ComplaintStatus, Contractor,
    ContractorRepository, FixtureStore, ProgressBand, Project, ProjectCategory,
    ProjectRepository, ProjectStatus,
};
