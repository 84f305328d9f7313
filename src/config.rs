use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub hub: HubConfig,
    #[serde(default)]
    pub community: CommunityConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct HubConfig {
    pub env: Option<String>,
    pub project_root: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CommunityConfig {
    /// JSON files holding saved issue-tracker responses.
    #[serde(default)]
    pub issue_files: Vec<PathBuf>,
}

pub fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".innoagent-hub")
        .join("config.toml")
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(config.hub.env.is_none());
        assert!(config.community.issue_files.is_empty());
    }

    #[test]
    fn parses_all_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[hub]
env = "staging"
project_root = "/srv/hub"

[community]
issue_files = ["issues/a.json", "issues/b.json"]
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.hub.env.as_deref(), Some("staging"));
        assert_eq!(config.hub.project_root, Some(PathBuf::from("/srv/hub")));
        assert_eq!(
            config.community.issue_files,
            vec![PathBuf::from("issues/a.json"), PathBuf::from("issues/b.json")]
        );
    }

    #[test]
    fn sections_are_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hub]\nenv = \"production\"").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.hub.env.as_deref(), Some("production"));
        assert!(config.community.issue_files.is_empty());
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hub\nenv = ").unwrap();
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
