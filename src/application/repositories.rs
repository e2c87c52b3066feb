// Collaborator traits for template storage, schema probing and dashboard persistence
use crate::domain::dashboard::InstantiatedDashboard;
use crate::domain::data_source::ProjectDataSource;
use crate::domain::template::DashboardTemplate;
use async_trait::async_trait;

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// List all available templates, ordered by name
    async fn list_templates(&self) -> anyhow::Result<Vec<DashboardTemplate>>;

    async fn get_template(&self, name: &str) -> anyhow::Result<Option<DashboardTemplate>>;
}

#[async_trait]
pub trait SchemaProbe: Send + Sync {
    /// Current data sources of a project, with their physical column schemas.
    /// Returns `None` when the project is unknown.
    async fn data_sources(&self, project_id: &str) -> anyhow::Result<Option<Vec<ProjectDataSource>>>;
}

#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Persist a fully resolved dashboard and return its permanent identifier
    async fn save(&self, dashboard: InstantiatedDashboard) -> anyhow::Result<String>;

    async fn get(&self, id: &str) -> anyhow::Result<Option<InstantiatedDashboard>>;
}
