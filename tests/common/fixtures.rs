use govtrack::core::store::{
    Complaint, ComplaintRepository, FixtureStore, Project, ProjectRepository,
};

/// Store over the built-in sample dataset.
pub fn store() -> FixtureStore {
    FixtureStore::new()
}

/// All six sample projects in insertion order.
pub async fn all_projects() -> Vec<Project> {
    store()
        .get_projects()
        .await
        .expect("fixture store reads are infallible")
}

/// All four sample complaints in insertion order.
pub async fn all_complaints() -> Vec<Complaint> {
    store()
        .get_complaints()
        .await
        .expect("fixture store reads are infallible")
}

/// Ids of a project slice, for order-sensitive assertions.
pub fn ids(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}
