//! 配置服务
//!
//! 配置目录（`<config_dir>/portfolio-nav/`）下有两个可选文件：
//!     settings.json   { "theme": "dark" | "light" }
//!     catalog.json    { "sections": [ { "id", "label", "items": [ { "id", "title" } ] } ] }
//!
//! 文件缺失时使用默认值；文件损坏时记录日志并回退到默认值，不会阻止启动。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use portfolio_nav_core::Catalog;
use serde::Deserialize;

use crate::view::theme::Theme;

const SETTINGS_FILE: &str = "settings.json";
const CATALOG_FILE: &str = "catalog.json";

/// 应用配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub theme: Theme,
    pub catalog: Catalog,
}

/// settings.json 的内容
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Settings {
    theme: Theme,
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    dir: PathBuf,
}

impl LocalConfigService {
    /// 使用系统配置目录
    pub fn new() -> Self {
        Self::with_dir(
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("portfolio-nav"),
        )
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read_optional(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn load_settings(&self) -> Result<Settings> {
        let path = self.dir.join(SETTINGS_FILE);
        match Self::read_optional(&path)? {
            Some(content) => match serde_json::from_str(&content) {
                Ok(settings) => Ok(settings),
                Err(err) => {
                    warn!("Ignoring {}: {err}", path.display());
                    Ok(Settings::default())
                }
            },
            None => Ok(Settings::default()),
        }
    }

    fn load_catalog(&self) -> Result<Catalog> {
        let path = self.dir.join(CATALOG_FILE);
        let Some(content) = Self::read_optional(&path)? else {
            return Ok(Catalog::builtin());
        };

        match Catalog::from_json(&content) {
            Ok(catalog) => {
                info!("Loaded catalog from {}", path.display());
                Ok(catalog)
            }
            Err(err) => {
                warn!("Falling back to builtin catalog, {}: {err}", path.display());
                Ok(Catalog::builtin())
            }
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let settings = self.load_settings()?;
        let catalog = self.load_catalog()?;
        Ok(AppConfig {
            theme: settings.theme,
            catalog,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = LocalConfigService::with_dir(dir.path()).load().unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.catalog, Catalog::builtin());
    }

    #[test]
    fn reads_theme_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{ "theme": "light" }"#).unwrap();
        fs::write(
            dir.path().join(CATALOG_FILE),
            r#"{ "sections": [
                { "id": "foto", "label": "Foto", "items": [ { "id": 1, "title": "Tatry" } ] }
            ] }"#,
        )
        .unwrap();

        let config = LocalConfigService::with_dir(dir.path()).load().unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.catalog.sections().len(), 1);
        assert_eq!(config.catalog.label("foto"), "Foto");
    }

    #[test]
    fn broken_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{ theme").unwrap();
        fs::write(
            dir.path().join(CATALOG_FILE),
            r#"{ "sections": [
                { "id": "a", "label": "A", "items": [ { "id": 0, "title": "x" } ] }
            ] }"#,
        )
        .unwrap();

        let config = LocalConfigService::with_dir(dir.path()).load().unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.catalog, Catalog::builtin());
    }
}
