pub mod core;

pub use crate::core::route::{Role, Route};
pub use crate::core::store::{
    Complaint, ComplaintCategory, ComplaintStatus, Contractor, FixtureStore, Project,
    ProjectCategory, ProjectStatus,
};

#[cfg(feature = "gui")]
pub mod gui;
