// Template service - Use cases for checking and applying templates to projects
use crate::application::compatibility_validator::validate;
use crate::application::instantiation_engine::InstantiationEngine;
use crate::application::repositories::{DashboardStore, SchemaProbe, TemplateRepository};
use crate::domain::dashboard::InstantiatedDashboard;
use crate::domain::data_source::ProjectDataSource;
use crate::domain::error::InstantiationError;
use crate::domain::template::{DashboardTemplate, TemplateMetadata};
use crate::domain::validation::ValidationResult;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateServiceError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TemplateServiceError>;

/// One gallery entry: a template and how well it fits the project.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateCompatibility {
    pub template: TemplateMetadata,
    pub validation: ValidationResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredDashboard {
    pub id: String,
    pub dashboard: InstantiatedDashboard,
}

#[derive(Clone)]
pub struct TemplateService {
    templates: Arc<dyn TemplateRepository>,
    probe: Arc<dyn SchemaProbe>,
    store: Arc<dyn DashboardStore>,
    engine: InstantiationEngine,
}

impl TemplateService {
    pub fn new(
        templates: Arc<dyn TemplateRepository>,
        probe: Arc<dyn SchemaProbe>,
        store: Arc<dyn DashboardStore>,
    ) -> Self {
        Self {
            templates,
            probe,
            store,
            engine: InstantiationEngine::new(),
        }
    }

    pub async fn check_compatibility(
        &self,
        template_name: &str,
        project_id: &str,
    ) -> Result<ValidationResult> {
        let template = self.load_template(template_name).await?;
        let sources = self.load_sources(project_id).await?;
        Ok(validate(&template, &sources))
    }

    /// Every template, re-validated against the project's current schemas.
    pub async fn gallery(&self, project_id: &str) -> Result<Vec<TemplateCompatibility>> {
        let sources = self.load_sources(project_id).await?;
        let templates = self.templates.list_templates().await?;

        Ok(templates
            .into_iter()
            .map(|template| {
                let validation = validate(&template, &sources);
                TemplateCompatibility {
                    template: template.template_metadata,
                    validation,
                }
            })
            .collect())
    }

    pub async fn instantiate(
        &self,
        template_name: &str,
        project_id: &str,
        title_override: Option<&str>,
    ) -> Result<StoredDashboard> {
        let template = self.load_template(template_name).await?;
        let sources = self.load_sources(project_id).await?;

        let validation = validate(&template, &sources);
        let dashboard = self
            .engine
            .instantiate(&template, &validation, project_id, title_override)?;

        let id = self.store.save(dashboard.clone()).await?;
        tracing::info!("Stored dashboard {} from template {}", id, template_name);

        Ok(StoredDashboard { id, dashboard })
    }

    pub async fn get_dashboard(&self, id: &str) -> Result<Option<InstantiatedDashboard>> {
        Ok(self.store.get(id).await?)
    }

    async fn load_template(&self, name: &str) -> Result<DashboardTemplate> {
        self.templates
            .get_template(name)
            .await?
            .ok_or_else(|| TemplateServiceError::TemplateNotFound(name.to_string()))
    }

    async fn load_sources(&self, project_id: &str) -> Result<Vec<ProjectDataSource>> {
        self.probe
            .data_sources(project_id)
            .await?
            .ok_or_else(|| TemplateServiceError::ProjectNotFound(project_id.to_string()))
    }
}
