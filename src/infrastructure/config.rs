use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// Directory holding one JSON file per template
    pub templates_dir: PathBuf,
    /// TOML file describing each project's data sources
    pub projects_file: PathBuf,
}

/// Load `config/app.toml` (optional) overlaid with `TEMPLATES__*` environment variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(config::File::with_name("config/app").required(false))
}

pub fn load_app_config_from<S>(file: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("storage.templates_dir", "templates")?
        .set_default("storage.projects_file", "config/projects.toml")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("TEMPLATES")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
