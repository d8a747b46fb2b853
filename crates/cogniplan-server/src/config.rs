use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use cogniplan_schedule::WeeklyTemplate;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Process configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `COGNIPLAN_BIND`
    pub bind: SocketAddr,
    /// `COGNIPLAN_TEMPLATE`: JSON weekly template; the built-in week when unset.
    pub template_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let bind = env::var("COGNIPLAN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = bind
            .parse()
            .map_err(|e| eyre::eyre!("invalid COGNIPLAN_BIND '{bind}': {e}"))?;
        let template_path = env::var_os("COGNIPLAN_TEMPLATE").map(PathBuf::from);

        Ok(Self {
            bind,
            template_path,
        })
    }

    pub fn load_template(&self) -> eyre::Result<WeeklyTemplate> {
        let Some(path) = &self.template_path else {
            tracing::info!("using built-in weekly template");
            return Ok(WeeklyTemplate::default());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read template at {}: {e}", path.display()))?;
        let template = WeeklyTemplate::from_json(&contents)
            .map_err(|e| eyre::eyre!("invalid template at {}: {e}", path.display()))?;
        tracing::info!(path = %path.display(), days = template.days().count(), "loaded weekly template");
        Ok(template)
    }
}
