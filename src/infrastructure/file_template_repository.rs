// Template repository reading one JSON document per template from a directory
use crate::application::repositories::TemplateRepository;
use crate::domain::template::DashboardTemplate;
use anyhow::Context;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileTemplateRepository {
    dir: PathBuf,
}

impl FileTemplateRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_all(&self) -> anyhow::Result<Vec<DashboardTemplate>> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .with_context(|| format!("Failed to read template directory {}", self.dir.display()))?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        // Directory order is unspecified; name collisions resolve by path
        paths.sort();

        let mut templates: Vec<DashboardTemplate> = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for path in paths {
            let raw = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read template {}", path.display()))?;

            match serde_json::from_str::<DashboardTemplate>(&raw) {
                Ok(template) => match seen.get(template.name()) {
                    Some(first) => tracing::warn!(
                        "Ignoring template {} in {}: name already defined by {}",
                        template.name(),
                        path.display(),
                        first.display()
                    ),
                    None => {
                        seen.insert(template.name().to_string(), path.clone());
                        templates.push(template);
                    }
                },
                Err(e) => {
                    // One broken file should not hide the rest of the gallery
                    tracing::warn!("Skipping unparseable template {}: {}", path.display(), e);
                }
            }
        }

        templates.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(templates)
    }
}

#[async_trait]
impl TemplateRepository for FileTemplateRepository {
    async fn list_templates(&self) -> anyhow::Result<Vec<DashboardTemplate>> {
        self.read_all().await
    }

    async fn get_template(&self, name: &str) -> anyhow::Result<Option<DashboardTemplate>> {
        Ok(self.read_all().await?.into_iter().find(|t| t.name() == name))
    }
}
