use anyhow::{Context, Result};
use fitplan_ai::GeminiClient;
use fitplan_core::{FoodCatalog, RuleEngine, WorkoutTemplates};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::Store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiSection,
    #[serde(default)]
    pub data: DataSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSection {
    /// Only "gemini" is supported; anything else disables the AI path.
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Inline key; takes precedence over `api_key_env`.
    pub api_key: Option<String>,
}

impl fmt::Debug for AiSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiSection")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Optional replacements for the built-in food catalog and workout templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub food_catalog: Option<PathBuf>,
    pub workout_templates: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
}

impl Default for AiSection {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            temperature: 0.4,
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn api_key(&self) -> Option<String> {
        self.ai
            .api_key
            .clone()
            .or_else(|| std::env::var(&self.ai.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Client for the configured provider, or `None` when the AI path is unavailable.
    pub fn ai_client(&self) -> Option<GeminiClient> {
        if self.ai.provider != "gemini" {
            tracing::warn!(provider = %self.ai.provider, "unsupported AI provider; AI path disabled");
            return None;
        }
        let key = self.api_key()?;
        Some(GeminiClient::new(
            self.ai.base_url.clone(),
            self.ai.model.clone(),
            self.ai.temperature,
            key,
        ))
    }

    pub fn rule_engine(&self) -> Result<RuleEngine> {
        let catalog = match &self.data.food_catalog {
            Some(p) => FoodCatalog::from_json(&read(p)?)
                .with_context(|| format!("load food catalog {}", p.display()))?,
            None => FoodCatalog::default(),
        };
        let templates = match &self.data.workout_templates {
            Some(p) => WorkoutTemplates::from_json(&read(p)?)
                .with_context(|| format!("load workout templates {}", p.display()))?,
            None => WorkoutTemplates::default(),
        };
        Ok(RuleEngine::new(catalog, templates))
    }
}

fn read(p: &Path) -> Result<String> {
    fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
}

pub fn config_path(store: &Store) -> PathBuf {
    store.home().join("config.toml")
}

pub fn load_config(store: &Store) -> Result<Config> {
    let p = config_path(store);
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = read(&p)?;
    toml::from_str(&s).context("parse config.toml")
}

pub fn save_config(store: &Store, cfg: &Config) -> Result<()> {
    let p = config_path(store);
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Write a default config plus editable copies of the built-in data files.
pub fn init_config(store: &Store) -> Result<Vec<PathBuf>> {
    let p = config_path(store);
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(Vec::new());
    }

    let foods = store.home().join("foods.json");
    let workouts = store.home().join("workouts.json");
    fs::write(&foods, FoodCatalog::default().to_json_pretty()?)
        .with_context(|| format!("write {}", foods.display()))?;
    fs::write(&workouts, WorkoutTemplates::default().to_json_pretty()?)
        .with_context(|| format!("write {}", workouts.display()))?;

    let cfg = Config {
        data: DataSection {
            food_catalog: Some(foods.clone()),
            workout_templates: Some(workouts.clone()),
        },
        ..Config::default()
    };
    save_config(store, &cfg)?;
    Ok(vec![p, foods, workouts])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let cfg: Config = toml::from_str("[ai]\nmodel = \"gemini-2.0-flash\"\n").unwrap();
        assert_eq!(cfg.ai.model, "gemini-2.0-flash");
        assert_eq!(cfg.ai.provider, "gemini");
        assert_eq!(cfg.logging.level, "warn");
        assert!(cfg.data.food_catalog.is_none());
    }

    #[test]
    fn test_inline_key_and_unsupported_provider() {
        let mut cfg = Config::default();
        cfg.ai.api_key = Some("secret".into());
        assert!(cfg.ai_client().is_some());

        cfg.ai.provider = "openai".into();
        assert!(cfg.ai_client().is_none());

        cfg.ai.provider = "gemini".into();
        cfg.ai.api_key = Some("  ".into());
        cfg.ai.api_key_env = "FITPLAN_TEST_KEY_THAT_IS_NOT_SET".into();
        assert!(cfg.ai_client().is_none());
    }

    #[test]
    fn test_debug_hides_inline_key() {
        let mut cfg = Config::default();
        cfg.ai.api_key = Some("sk-very-secret".into());
        let dbg = format!("{cfg:?}");
        assert!(!dbg.contains("sk-very-secret"));
        assert!(dbg.contains("<redacted>"));
        assert!(dbg.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_init_writes_loadable_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path()).unwrap();
        let written = init_config(&store).unwrap();
        assert_eq!(written.len(), 3);

        let cfg = load_config(&store).unwrap();
        let engine = cfg.rule_engine().unwrap();
        assert_eq!(engine.catalog, FoodCatalog::default());
        assert_eq!(engine.templates, WorkoutTemplates::default());

        // Second run leaves files alone.
        assert!(init_config(&store).unwrap().is_empty());
    }

    #[test]
    fn test_bad_catalog_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let foods = dir.path().join("foods.json");
        fs::write(&foods, "{}").unwrap();
        let cfg = Config {
            data: DataSection {
                food_catalog: Some(foods),
                workout_templates: None,
            },
            ..Config::default()
        };
        let err = cfg.rule_engine().unwrap_err();
        assert!(format!("{err:#}").contains("default region"));
    }
}
