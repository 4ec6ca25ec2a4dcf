use std::future::Future;

/// A contractor company registered with the platform.
///
/// `projects` lists owned project ids as recorded on the contractor; it is
/// maintained separately from `Project::contractor_id` back-references and
/// the two can drift.
#[derive(Debug, Clone)]
pub struct Contractor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub projects: Vec<String>,
    pub rating: f32,
}

pub trait ContractorRepository {
    fn get_contractors(&self) -> impl Future<Output = anyhow::Result<Vec<Contractor>>>;
    fn get_contractor_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = anyhow::Result<Option<Contractor>>>;
}
