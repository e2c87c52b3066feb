// Main entry point - Dependency injection and server setup
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dashboard_templates::application::template_service::TemplateService;
use dashboard_templates::infrastructure::config::load_app_config;
use dashboard_templates::infrastructure::file_template_repository::FileTemplateRepository;
use dashboard_templates::infrastructure::memory_dashboard_store::InMemoryDashboardStore;
use dashboard_templates::infrastructure::static_schema_probe::StaticSchemaProbe;
use dashboard_templates::presentation::app_state::AppState;
use dashboard_templates::presentation::handlers::{
    check_compatibility, get_dashboard, health_check, instantiate_template, list_templates,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create adapters (infrastructure layer)
    let templates = Arc::new(FileTemplateRepository::new(&app_config.storage.templates_dir));
    let probe = Arc::new(StaticSchemaProbe::load(&app_config.storage.projects_file)?);
    let store = Arc::new(InMemoryDashboardStore::new());

    // Create services (application layer)
    let template_service = TemplateService::new(templates, probe, store);

    let state = Arc::new(AppState { template_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/projects/:project_id/templates", get(list_templates))
        .route(
            "/projects/:project_id/templates/:name/compatibility",
            get(check_compatibility),
        )
        .route(
            "/projects/:project_id/templates/:name/instantiate",
            post(instantiate_template),
        )
        .route("/dashboards/:id", get(get_dashboard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = app_config.server.socket_addr()?;
    tracing::info!("Starting dashboard-templates service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
