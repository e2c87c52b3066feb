// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_template_repository;
pub mod http_response;
pub mod memory_dashboard_store;
pub mod static_schema_probe;
