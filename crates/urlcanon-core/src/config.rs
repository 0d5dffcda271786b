use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Query parameters dropped during canonicalization (optional section in config.toml).
///
/// Matching is case-sensitive: `PHPSESSID` does not contain `session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Keys starting with any of these are removed (e.g. `utm_source`).
    pub prefixes: Vec<String>,
    /// Keys containing any of these anywhere are removed (e.g. `jsessionid`).
    pub substrings: Vec<String>,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            prefixes: vec!["utm_".to_string()],
            substrings: vec!["session".to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/urlcanon/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonConfig {
    /// Strip trailing `/` from paths longer than `/`.
    pub strip_trailing_slash: bool,
    /// Port elided from the output when it matches the scheme's entry (lower-case scheme).
    pub default_ports: BTreeMap<String, u16>,
    /// Optional tracking-parameter rules; if missing, built-in defaults are used.
    pub tracking: Option<TrackingConfig>,
}

impl Default for CanonConfig {
    fn default() -> Self {
        let default_ports = [("ftp", 21), ("http", 80), ("https", 443), ("ws", 80), ("wss", 443)]
            .into_iter()
            .map(|(scheme, port)| (scheme.to_string(), port))
            .collect();
        Self {
            strip_trailing_slash: true,
            default_ports,
            tracking: None,
        }
    }
}

impl CanonConfig {
    /// Tracking rules in effect: the configured section or the defaults.
    pub fn tracking_rules(&self) -> TrackingConfig {
        self.tracking.clone().unwrap_or_default()
    }

    /// Pretty TOML, as written to config.toml.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlcanon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CanonConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<CanonConfig> {
    if !path.exists() {
        let default_cfg = CanonConfig::default();
        let toml = default_cfg.to_toml_string()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CanonConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = CanonConfig::default();
        assert!(cfg.strip_trailing_slash);
        assert_eq!(cfg.default_ports.get("http"), Some(&80));
        assert_eq!(cfg.default_ports.get("https"), Some(&443));
        assert!(cfg.tracking.is_none());
        assert_eq!(cfg.tracking_rules(), TrackingConfig::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CanonConfig {
            tracking: Some(TrackingConfig::default()),
            ..CanonConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CanonConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            strip_trailing_slash = false
        "#;
        let cfg: CanonConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.strip_trailing_slash);
        assert_eq!(cfg.default_ports, CanonConfig::default().default_ports);
        assert!(cfg.tracking.is_none());
    }

    #[test]
    fn config_toml_custom_tracking_and_ports() {
        let toml = r#"
            [default_ports]
            http = 80
            gopher = 70

            [tracking]
            prefixes = ["utm_", "mc_"]
            substrings = ["session", "fbclid"]
        "#;
        let cfg: CanonConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_ports.len(), 2);
        assert_eq!(cfg.default_ports.get("gopher"), Some(&70));
        let rules = cfg.tracking_rules();
        assert_eq!(rules.prefixes, ["utm_", "mc_"]);
        assert_eq!(rules.substrings, ["session", "fbclid"]);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, CanonConfig::default());

        fs::write(&path, "strip_trailing_slash = false\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(!loaded.strip_trailing_slash);
    }

    #[test]
    fn load_or_init_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "strip_trailing_slash = \"yes\"\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
