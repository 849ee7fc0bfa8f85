//! ConfigStore - Local Configuration Storage
//!
//! Platform-specific locations:
//! - **Linux**: `~/.config/contact-table/config.toml`
//! - **macOS**: `~/Library/Application Support/com.contact-table.contact-table/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\contact-table\contact-table\config\config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "contact-table", "contact-table").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Path of the config file in the configuration directory
pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
}

/// Get or create the application's local data directory
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Load the config from the default location, writing defaults on first run
pub fn load_or_init() -> Result<AppConfig> {
    load_or_init_at(&config_path()?)
}

/// Load `path`, or write and return the defaults when it doesn't exist
pub fn load_or_init_at(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        return load_from(path);
    }

    let config = AppConfig::default();
    save_to(path, &config)?;
    tracing::info!(path = %path.display(), "Wrote default config");
    Ok(config)
}

/// Load a TOML config file, falling back to defaults when it doesn't exist
pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file, creating parent directories as needed
pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_from(&dir.path().join(CONFIG_FILE)).expect("load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.window.title, "Contacts");
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = AppConfig::default();
        config.window.width = 1024.0;
        config.feed.path = Some(PathBuf::from("/tmp/contacts.jsonl"));
        config.log.file = true;

        save_to(&path, &config).expect("save");
        assert_eq!(load_from(&path).expect("load"), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[feed]\nstdin = true\n").expect("write");

        let config = load_from(&path).expect("load");
        assert!(config.feed.stdin);
        assert_eq!(config.feed.path, None);
        assert_eq!(config.window.height, 600.0);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("contact-table").join(CONFIG_FILE);

        let config = load_or_init_at(&path).expect("init");
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).expect("reload"), config);
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[log]\nlevel = \"debug\"\n").expect("write");

        let config = load_or_init_at(&path).expect("load");
        assert_eq!(config.log.level, "debug");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(content, "[log]\nlevel = \"debug\"\n");
    }

    #[test]
    fn test_config_path_names_config_file() {
        // Sandboxes without a home directory have no project dirs
        match config_path() {
            Ok(path) => assert!(path.ends_with(CONFIG_FILE)),
            Err(err) => assert!(matches!(err, Error::Invalid { .. })),
        }
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[window\n").expect("write");

        assert!(matches!(load_from(&path), Err(Error::TomlDe { .. })));
    }
}
