//! Commands for managing the campseed configuration file
use crate::{cli::ConfigCommands, config::Config};
use anyhow::Result;
use libcamp::{database::Backend, generate::SeedProfile};
use std::path::Path;
use tokio::fs;

/// Handle the `campseed config` command and its subcommands
pub(crate) async fn handle_command(
    command: ConfigCommands,
    mut cfg: Config,
    config_file: &Path,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            println!("Configuration file: {}", config_file.display());
            println!("{}", cfg.to_display_string()?);
            Ok(())
        }
        ConfigCommands::Set { url, author } => {
            if let Some(url) = url {
                Backend::from_url(&url)?;
                cfg.database = Some(url);
            }
            if let Some(author) = author {
                SeedProfile {
                    author: author.clone(),
                    ..Default::default()
                }
                .validate()?;
                cfg.author = Some(author);
            }
            cfg.save_to_file(config_file).await?;
            println!("Saved configuration to {}", config_file.display());
            Ok(())
        }
        ConfigCommands::Reset => reset(config_file).await,
    }
}

/// Remove the configuration file. This never reads the file, so it also
/// works when the file can no longer be parsed.
pub(crate) async fn reset(config_file: &Path) -> Result<()> {
    fs::remove_file(config_file)
        .await
        .or_else(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(anyhow::Error::from(e)),
        })?;
    println!("Removed configuration file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_set_and_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        handle_command(
            ConfigCommands::Set {
                url: Some("sqlite://camps.sqlite".to_string()),
                author: None,
            },
            Config::default(),
            &path,
        )
        .await
        .unwrap();
        let cfg = Config::load_from_file(&path).await.unwrap();
        assert_eq!(cfg.database.as_deref(), Some("sqlite://camps.sqlite"));

        handle_command(
            ConfigCommands::Set {
                url: None,
                author: Some("692e03e22c5965e21aadf5b8".to_string()),
            },
            cfg,
            &path,
        )
        .await
        .unwrap();
        let cfg = Config::load_from_file(&path).await.unwrap();
        assert_eq!(cfg.database.as_deref(), Some("sqlite://camps.sqlite"));
        assert_eq!(cfg.author.as_deref(), Some("692e03e22c5965e21aadf5b8"));

        handle_command(ConfigCommands::Reset, cfg, &path).await.unwrap();
        assert!(!path.exists());
        // resetting again is fine
        handle_command(ConfigCommands::Reset, Config::default(), &path)
            .await
            .unwrap();
    }

    #[test(tokio::test)]
    async fn test_reset_removes_unreadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"database": "sqlite://camps.sqlite", "user": "old"}"#,
        )
        .await
        .unwrap();
        assert!(Config::load_or_default(&path).await.is_err());

        reset(&path).await.unwrap();
        assert!(!path.exists());
        assert_eq!(
            Config::load_or_default(&path).await.unwrap(),
            Config::default()
        );
    }

    #[test(tokio::test)]
    async fn test_set_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let res = handle_command(
            ConfigCommands::Set {
                url: Some("ftp://camps".to_string()),
                author: None,
            },
            Config::default(),
            &path,
        )
        .await;
        assert!(res.is_err());
        let res = handle_command(
            ConfigCommands::Set {
                url: None,
                author: Some("camper".to_string()),
            },
            Config::default(),
            &path,
        )
        .await;
        assert!(res.is_err());
        assert!(!path.exists());
    }
}
