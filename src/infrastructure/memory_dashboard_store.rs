// In-memory dashboard store
use crate::application::repositories::DashboardStore;
use crate::domain::dashboard::InstantiatedDashboard;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryDashboardStore {
    dashboards: RwLock<HashMap<String, InstantiatedDashboard>>,
}

impl InMemoryDashboardStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DashboardStore for InMemoryDashboardStore {
    async fn save(&self, dashboard: InstantiatedDashboard) -> anyhow::Result<String> {
        let id = Uuid::new_v4().to_string();
        self.dashboards.write().await.insert(id.clone(), dashboard);
        Ok(id)
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<InstantiatedDashboard>> {
        Ok(self.dashboards.read().await.get(id).cloned())
    }
}
