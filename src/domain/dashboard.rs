// Instantiated dashboard domain model
use super::template::LayoutEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A template component bound to a concrete data collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub index: String,
    pub dc_id: String,
    pub component_type: String,
    pub config: Value,
}

/// Fully resolved dashboard document, ready to hand to a dashboard store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstantiatedDashboard {
    pub title: String,
    pub project_id: String,
    pub source_template_name: String,
    pub instantiated_at: DateTime<Utc>,
    pub components: Vec<ResolvedComponent>,
    pub layout: Vec<LayoutEntry>,
}

impl InstantiatedDashboard {
    pub fn component(&self, index: &str) -> Option<&ResolvedComponent> {
        self.components.iter().find(|c| c.index == index)
    }
}
