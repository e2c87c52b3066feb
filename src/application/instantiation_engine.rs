// Instantiation engine - Turns a validated template into a concrete dashboard
use crate::application::config_rewriter::{resolve_config, Substitutions};
use crate::domain::dashboard::{InstantiatedDashboard, ResolvedComponent};
use crate::domain::error::InstantiationError;
use crate::domain::template::{DashboardTemplate, LayoutEntry};
use crate::domain::validation::ValidationResult;
use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

/// Stateless engine; every call produces an independent, freshly identified
/// copy of the template.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantiationEngine;

impl InstantiationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn instantiate(
        &self,
        template: &DashboardTemplate,
        validation: &ValidationResult,
        project_id: &str,
        title_override: Option<&str>,
    ) -> Result<InstantiatedDashboard, InstantiationError> {
        // A malformed template is reported as such whatever the validation outcome
        template.check_integrity().inspect_err(|e| {
            tracing::warn!("Template {} is malformed: {}", template.name(), e);
        })?;

        if !validation.valid {
            tracing::warn!(
                "Refusing to instantiate template {} into project {}: {} validation errors",
                template.name(),
                project_id,
                validation.errors.len()
            );
            return Err(InstantiationError::Configuration(format!(
                "template {} is not compatible with project {}",
                template.name(),
                project_id
            )));
        }

        // Old index -> fresh index, built once for the whole call
        let indices: HashMap<String, String> = template
            .components
            .iter()
            .map(|c| (c.index.clone(), fresh_index()))
            .collect();

        let subs = Substitutions {
            indices: &indices,
            mappings: &validation.mappings,
        };

        let mut components = Vec::with_capacity(template.components.len());
        for component in &template.components {
            let mapping = validation
                .mapping(&component.dc_tag)
                .ok_or_else(|| InstantiationError::undeclared_tag(&component.dc_tag))?;

            components.push(ResolvedComponent {
                index: indices[&component.index].clone(),
                dc_id: mapping.dc_id.clone(),
                component_type: component.component_type.clone(),
                config: resolve_config(&component.component_type, &component.config, &subs),
            });
        }

        let layout = template
            .layout
            .iter()
            .map(|entry| rewrite_layout_entry(entry, &indices))
            .collect::<Result<Vec<_>, _>>()?;

        let dashboard = InstantiatedDashboard {
            title: title_override
                .map(str::to_string)
                .unwrap_or_else(|| template.name().to_string()),
            project_id: project_id.to_string(),
            source_template_name: template.name().to_string(),
            instantiated_at: Utc::now(),
            components,
            layout,
        };

        tracing::info!(
            "Instantiated template {} into project {} ({} components)",
            dashboard.source_template_name,
            dashboard.project_id,
            dashboard.components.len()
        );

        Ok(dashboard)
    }
}

fn fresh_index() -> String {
    Uuid::new_v4().to_string()
}

fn rewrite_layout_entry(
    entry: &LayoutEntry,
    indices: &HashMap<String, String>,
) -> Result<LayoutEntry, InstantiationError> {
    let new_index = indices.get(&entry.i).ok_or_else(|| {
        InstantiationError::Integrity(format!("layout references unknown component: {}", entry.i))
    })?;

    Ok(LayoutEntry {
        i: new_index.clone(),
        ..entry.clone()
    })
}
