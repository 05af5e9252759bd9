// SPDX-License-Identifier: MPL-2.0
//! This module handles the shell's persisted preferences, including loading
//! and saving them to a `prefs.toml` file in the platform config directory.

use crate::error::Result;
use crate::language::LANGUAGE_KEY;
use crate::theme::THEME_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILE: &str = "prefs.toml";
const APP_NAME: &str = "appshell";

/// The on-disk preference record. `language` and `theme` back the two fixed
/// storage keys; anything else a host writes lands in `extra` untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Option<String>,
    pub theme: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Preferences {
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            LANGUAGE_KEY => self.language.as_deref(),
            THEME_KEY => self.theme.as_deref(),
            other => self.extra.get(other).map(String::as_str),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            LANGUAGE_KEY => self.language = Some(value.to_string()),
            THEME_KEY => self.theme = Some(value.to_string()),
            other => {
                self.extra.insert(other.to_string(), value.to_string());
            }
        }
    }
}

fn get_default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFS_FILE);
        path
    })
}

pub fn load() -> Result<Preferences> {
    if let Some(path) = get_default_prefs_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Preferences::default())
}

pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = get_default_prefs_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_keys() {
        let mut prefs = Preferences::default();
        prefs.set(LANGUAGE_KEY, "en");
        prefs.set(THEME_KEY, "dark");
        prefs.set("sidebar", "collapsed");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join("nested").join("prefs.toml");

        save_to_path(&prefs, &prefs_path).expect("failed to save preferences");
        let loaded = load_from_path(&prefs_path).expect("failed to load preferences");

        assert_eq!(loaded.get(LANGUAGE_KEY), Some("en"));
        assert_eq!(loaded.get(THEME_KEY), Some("dark"));
        assert_eq!(loaded.get("sidebar"), Some("collapsed"));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join("prefs.toml");
        fs::write(&prefs_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&prefs_path).expect("load should not error");
        assert!(loaded.language.is_none());
        assert!(loaded.theme.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let prefs_path = nested_dir.join("prefs.toml");
        let mut prefs = Preferences::default();
        prefs.set(LANGUAGE_KEY, "fa");

        save_to_path(&prefs, &prefs_path).expect("save should create directories");
        assert!(prefs_path.exists());
    }

    #[test]
    fn unknown_keys_are_kept_but_do_not_shadow_fixed_ones() {
        let mut prefs = Preferences::default();
        prefs.set("app-language", "fa");
        prefs.set("accent", "teal");

        assert_eq!(prefs.language.as_deref(), Some("fa"));
        assert!(prefs.extra.get("app-language").is_none());
        assert_eq!(prefs.extra.get("accent").map(String::as_str), Some("teal"));
    }
}
