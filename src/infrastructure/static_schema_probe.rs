// Schema probe backed by a static TOML description of each project
use crate::application::repositories::SchemaProbe;
use crate::domain::data_source::ProjectDataSource;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    id: String,
    #[serde(default)]
    data_sources: Vec<ProjectDataSource>,
}

#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProbe {
    projects: HashMap<String, Vec<ProjectDataSource>>,
}

impl StaticSchemaProbe {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let file: ProjectsFile = toml::from_str(raw).context("Failed to parse projects file")?;

        let projects = file
            .projects
            .into_iter()
            .map(|p| (p.id, p.data_sources))
            .collect();

        Ok(Self { projects })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read projects file {}", path.display()))?;
        let probe = Self::from_toml_str(&raw)?;

        tracing::info!("Loaded {} projects from {}", probe.projects.len(), path.display());
        Ok(probe)
    }
}

#[async_trait]
impl SchemaProbe for StaticSchemaProbe {
    async fn data_sources(&self, project_id: &str) -> anyhow::Result<Option<Vec<ProjectDataSource>>> {
        Ok(self.projects.get(project_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::compatibility_validator::validate;
    use crate::domain::template::{
        ColumnRequirement, DashboardTemplate, DataCollectionRequirement, DcType, TemplateMetadata,
    };

    const PROJECTS: &str = r#"
        [[projects]]
        id = "iris-project"

        [[projects.data_sources]]
        dc_id = "DC1"
        dc_tag = "iris_table"
        dc_type = "table"
        workflow_id = "WF1"

        [projects.data_sources.column_schema]
        "sepal.length" = "float64"
        variety = "str"

        [[projects]]
        id = "empty-project"
    "#;

    #[tokio::test]
    async fn test_parses_projects() {
        let probe = StaticSchemaProbe::from_toml_str(PROJECTS).unwrap();

        let sources = probe.data_sources("iris-project").await.unwrap().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].dc_type, DcType::Table);
        assert_eq!(sources[0].column_type("sepal.length"), Some("float64"));

        assert_eq!(probe.data_sources("empty-project").await.unwrap(), Some(vec![]));
        assert_eq!(probe.data_sources("unknown").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unrelated_unknown_kind_does_not_block_validation() {
        let raw = r#"
            [[projects]]
            id = "p"

            [[projects.data_sources]]
            dc_id = "DC1"
            dc_tag = "iris_table"
            dc_type = "table"
            workflow_id = "WF1"

            [projects.data_sources.column_schema]
            "sepal.length" = "float64"

            [[projects.data_sources]]
            dc_id = "DC2"
            dc_tag = "tracks"
            dc_type = "jbrowse2"
            workflow_id = "WF1"
        "#;

        let probe = StaticSchemaProbe::from_toml_str(raw).unwrap();
        let sources = probe.data_sources("p").await.unwrap().unwrap();
        assert_eq!(sources[1].dc_type, DcType::Other("jbrowse2".to_string()));

        let template = DashboardTemplate {
            template_metadata: TemplateMetadata {
                name: "iris".to_string(),
                description: String::new(),
                version: "1.0".to_string(),
                tags: vec![],
            },
            schema_requirements: vec![DataCollectionRequirement {
                dc_tag: "iris_table".to_string(),
                dc_type: DcType::Table,
                required_columns: vec![ColumnRequirement::required("sepal.length", "float64")],
                description: String::new(),
            }],
            components: vec![],
            layout: vec![],
        };

        let result = validate(&template, &sources);
        assert!(result.valid);
        assert_eq!(result.mappings["iris_table"].dc_id, "DC1");
    }
}
