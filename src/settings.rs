use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::i18n::Translator;
use crate::theme::DialogTheme;
use dirs_next::config_dir;

pub const APP_NAME: &str = "export-dialog";
const SETTINGS_FILE: &str = "settings.json";
const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    /// Directory holding `<locale>.json` catalogs. When set, `en` is read
    /// from here too and the bundled catalog is only used if `en.json` is
    /// missing.
    pub locale_dir: Option<PathBuf>,
    pub theme: DialogTheme,
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            locale_dir: None,
            theme: DialogTheme::default(),
            config_path: None,
        }
    }
}

impl Settings {
    pub fn new(config_path: PathBuf) -> Self {
        Self {
            config_path: Some(config_path),
            ..Self::default()
        }
    }

    pub async fn save(&self) -> std::io::Result<()> {
        if let Some(path) = &self.config_path {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let json = serde_json::to_string_pretty(self)?;
            tokio::fs::write(path, json).await?;
        }
        Ok(())
    }

    pub async fn load(path: &PathBuf) -> std::io::Result<Self> {
        if path.exists() {
            let json = tokio::fs::read_to_string(path).await?;
            let mut settings: Self = serde_json::from_str(&json)?;
            settings.config_path = Some(path.clone());
            Ok(settings)
        } else {
            Ok(Self::new(path.clone()))
        }
    }

    /// The translator for the configured locale. The bundled English catalog
    /// is used when no catalog directory is set.
    pub async fn translator(&self) -> std::io::Result<Translator> {
        let Some(dir) = &self.locale_dir else {
            return Ok(Translator::english());
        };

        let path = dir.join(format!("{}.json", self.locale));
        if self.locale == DEFAULT_LOCALE && !path.exists() {
            return Ok(Translator::english());
        }
        Translator::load(&self.locale, &path).await
    }

    pub fn config_dir() -> PathBuf {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join(SETTINGS_FILE)
    }
}
