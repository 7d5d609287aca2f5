use anyhow::{Context, Result, anyhow};
use libcamp::database::DEFAULT_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::{
    fs::{File, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};
use tracing::debug;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Config {
    fn parse(contents: String) -> Result<Self> {
        serde_json::from_str(&contents).with_context(|| "Couldn't parse json string")
    }

    fn format(&self) -> Result<String> {
        serde_json::to_string_pretty(self).with_context(|| "Couldn't convert config to json")
    }

    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let p = path.as_ref();
        debug!(?p, "Trying to load config");
        let contents = read_to_string(path).await?;
        Self::parse(contents)
    }

    /// Load the config file, or an empty config if the file doesn't exist
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match tokio::fs::try_exists(path.as_ref()).await? {
            true => Self::load_from_file(path).await,
            false => Ok(Self::default()),
        }
    }

    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!(?path, "Saving config");
        if let Some(dir) = path.parent() {
            create_dir_all(dir).await?;
        }
        let mut file = File::create(path).await?;
        let serialized = self.format()?;
        file.write_all(serialized.as_bytes())
            .await
            .with_context(|| "Failed to write config file")?;
        Ok(())
    }

    /// The database url to use: the one given on the command line, then the
    /// one from the config file, then the default development database
    pub fn database_url(&self, cli: Option<String>) -> String {
        cli.or_else(|| self.database.clone())
            .unwrap_or_else(|| DEFAULT_URL.to_string())
    }

    /// A printable representation of the config file contents
    pub fn to_display_string(&self) -> Result<String> {
        self.format()
    }
}

pub fn config_file() -> Result<PathBuf> {
    let project_dirs = directories::ProjectDirs::from("org", "campseed", "campseed")
        .ok_or_else(|| anyhow!("Cannot find default project config directory"))?;
    Ok(project_dirs.config_dir().join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_parse() {
        let cfg = Config::parse(
            r#"{"database": "sqlite://camps.sqlite", "author": "692e03e22c5965e21aadf5b8"}"#
                .to_string(),
        )
        .unwrap();
        assert_eq!(cfg.database.as_deref(), Some("sqlite://camps.sqlite"));
        assert_eq!(cfg.author.as_deref(), Some("692e03e22c5965e21aadf5b8"));

        assert_eq!(Config::parse("{}".to_string()).unwrap(), Config::default());
        assert!(Config::parse(r#"{"username": "camper"}"#.to_string()).is_err());
    }

    #[test]
    fn test_database_precedence() {
        let empty = Config::default();
        assert_eq!(empty.database_url(None), DEFAULT_URL);
        let cfg = Config {
            database: Some("sqlite://camps.sqlite".to_string()),
            author: None,
        };
        assert_eq!(cfg.database_url(None), "sqlite://camps.sqlite");
        assert_eq!(
            cfg.database_url(Some("mongodb://db.example.com/camps".to_string())),
            "mongodb://db.example.com/camps"
        );
    }

    #[test(tokio::test)]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        assert_eq!(Config::load_or_default(&path).await.unwrap(), Config::default());

        let cfg = Config {
            database: Some("sqlite://camps.sqlite".to_string()),
            author: Some("692e03e22c5965e21aadf5b8".to_string()),
        };
        cfg.save_to_file(&path).await.unwrap();
        assert_eq!(Config::load_or_default(&path).await.unwrap(), cfg);
    }
}
