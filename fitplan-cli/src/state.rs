use anyhow::{Context, Result};
use fitplan_core::{Plan, ProgressEntry, ProgressLog, UserProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Local replacement for the remote profile and progress stores.
///
/// Layout under the home dir (`$FITPLAN_HOME`, else `~/.fitplan`):
/// - `config.toml`
/// - `profile.json`: latest `{profile, plan}`
/// - `progress.json`: progress entries ordered by date
#[derive(Debug, Clone)]
pub struct Store {
    home: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub profile: UserProfile,
    pub plan: Plan,
    /// "ai" or "rule-engine".
    pub source: String,
    pub updated_at_utc: String,
}

pub fn default_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("FITPLAN_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".fitplan"))
}

impl Store {
    pub fn open() -> Result<Self> {
        Self::at(default_home()?)
    }

    pub fn at(home: impl Into<PathBuf>) -> Result<Self> {
        let home = home.into();
        fs::create_dir_all(&home).with_context(|| format!("create {}", home.display()))?;
        Ok(Self { home })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn plan_path(&self) -> PathBuf {
        self.home.join("profile.json")
    }

    pub fn progress_path(&self) -> PathBuf {
        self.home.join("progress.json")
    }

    pub fn write_plan(&self, saved: &SavedPlan) -> Result<()> {
        let p = self.plan_path();
        let json = serde_json::to_string_pretty(saved)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    pub fn read_plan(&self) -> Result<Option<SavedPlan>> {
        let p = self.plan_path();
        if !p.exists() {
            return Ok(None);
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        let saved = serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
        Ok(Some(saved))
    }

    pub fn read_progress(&self) -> Result<ProgressLog> {
        let p = self.progress_path();
        if !p.exists() {
            return Ok(ProgressLog::default());
        }
        let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
        let entries: Vec<ProgressEntry> =
            serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
        Ok(ProgressLog::from_entries(entries))
    }

    pub fn write_progress(&self, log: &ProgressLog) -> Result<()> {
        let p = self.progress_path();
        let json = serde_json::to_string_pretty(log)?;
        fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
        Ok(())
    }

    /// Upsert one entry and persist the log.
    pub fn log_progress(&self, entry: ProgressEntry) -> Result<ProgressLog> {
        let mut log = self.read_progress()?;
        log.upsert(entry);
        self.write_progress(&log)?;
        Ok(log)
    }
}

pub fn read_profile_file(path: &Path) -> Result<UserProfile> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse profile {}", path.display()))
}
