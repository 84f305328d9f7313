use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

pub const ENV_VAR: &str = "INNOAGENT_HUB_ENV";
pub const ROOT_VAR: &str = "INNOAGENT_HUB_ROOT";
pub const DEFAULT_ENV: &str = "development";

/// Resolved process-wide settings. Nothing here is written back to the
/// process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runtime {
    pub env: String,
    pub project_root: PathBuf,
}

impl Runtime {
    pub fn src_dir(&self) -> PathBuf {
        self.project_root.join("src")
    }

    pub fn demos_dir(&self) -> PathBuf {
        self.project_root.join("demos")
    }

    pub fn default_session_file(&self) -> PathBuf {
        self.demos_dir().join("open-innovation-session.json")
    }
}

pub fn bootstrap(config: &AppConfig) -> Result<Runtime> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let runtime = resolve(config, |key| std::env::var(key).ok(), &cwd);
    tracing::debug!(
        env = %runtime.env,
        project_root = %runtime.project_root.display(),
        "bootstrap complete"
    );
    Ok(runtime)
}

fn resolve(config: &AppConfig, lookup: impl Fn(&str) -> Option<String>, cwd: &Path) -> Runtime {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let env = non_empty(ENV_VAR)
        .or_else(|| config.hub.env.clone())
        .unwrap_or_else(|| DEFAULT_ENV.to_string());

    let project_root = non_empty(ROOT_VAR)
        .map(PathBuf::from)
        .or_else(|| config.hub.project_root.clone())
        .unwrap_or_else(|| cwd.to_path_buf());

    Runtime { env, project_root }
}
