//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DOGO_<SECTION>__<KEY>`, e.g.
//!    `DOGO_TOOLCHAIN__PROGRAM=go1.22`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

/// Keys understood by `dogo config get/set`.
pub const KNOWN_KEYS: &[&str] = &[
    "defaults.type",
    "defaults.output_dir",
    "output.no_color",
    "output.format",
    "toolchain.program",
    "toolchain.skip_mod",
];

const BOOL_KEYS: &[&str] = &["output.no_color", "toolchain.skip_mod"];

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for `dogo gen`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// External module tool.
    pub toolchain: ToolchainConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Service type used when `--type` is omitted.
    #[serde(rename = "type")]
    pub kind: String,
    /// Parent directory used when `--output` is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Program invoked as `<program> mod init` / `<program> mod tidy`.
    pub program: String,
    /// Never run the module tool.
    pub skip_mod: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            kind: "rest".into(),
            output_dir: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: dogo_core::domain::toolchain::DEFAULT_PROGRAM.into(),
            skip_mod: false,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `DOGO_*`
    /// environment variables.
    ///
    /// The default location is optional. An explicitly passed `config_file`
    /// must exist when `require_explicit` is set; commands that create the
    /// file pass `false`.
    pub fn load(config_file: Option<&PathBuf>, require_explicit: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to seed configuration defaults")?;

        let file = match config_file {
            Some(path) => {
                if require_explicit && !path.is_file() {
                    bail!("config file '{}' does not exist", path.display());
                }
                config::File::from(path.as_path()).required(require_explicit)
            }
            None => config::File::from(Self::config_path()).required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("DOGO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.dogo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "dogo", "dogo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".dogo.toml"))
    }

    /// The file `config set` and `init` operate on.
    pub fn active_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.type" => self.defaults.kind.clone(),
            "defaults.output_dir" => self
                .defaults
                .output_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            "toolchain.program" => self.toolchain.program.clone(),
            "toolchain.skip_mod" => self.toolchain.skip_mod.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Set `key` to `value` in the TOML file at `path`, creating the file if
    /// needed, and return the resulting configuration.
    pub fn set_in_file(path: &Path, key: &str, value: &str) -> anyhow::Result<Self> {
        if !KNOWN_KEYS.contains(&key) {
            bail!("unknown config key '{key}'");
        }
        let Some((section, field)) = key.split_once('.') else {
            bail!("config key '{key}' must be of the form section.key");
        };

        let mut table: toml::Table = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            raw.parse()
                .with_context(|| format!("'{}' is not valid TOML", path.display()))?
        } else {
            toml::Table::new()
        };

        let new_value = if BOOL_KEYS.contains(&key) {
            let parsed: bool = value
                .parse()
                .with_context(|| format!("'{key}' expects true or false, got '{value}'"))?;
            toml::Value::Boolean(parsed)
        } else {
            toml::Value::String(value.to_string())
        };

        let section_table = table
            .entry(section)
            .or_insert_with(|| toml::Value::Table(toml::Table::new()));
        let Some(section_table) = section_table.as_table_mut() else {
            bail!("'{section}' in '{}' is not a table", path.display());
        };
        section_table.insert(field.to_string(), new_value);

        let updated: AppConfig = toml::Value::Table(table.clone())
            .try_into()
            .context("Resulting configuration is invalid")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, toml::to_string_pretty(&table)?)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_type_is_rest() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.kind, "rest");
        assert_eq!(cfg.toolchain.program, "go");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("dogo.toml");
        std::fs::write(
            &path,
            "[defaults]\ntype = \"grpc\"\n\n[toolchain]\nprogram = \"go1.22\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path), true).unwrap();
        assert_eq!(cfg.defaults.kind, "grpc");
        assert_eq!(cfg.toolchain.program, "go1.22");
        // untouched sections keep their defaults
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path), true).is_err());
    }

    #[test]
    fn missing_explicit_file_tolerated_when_not_required() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.toml");
        let cfg = AppConfig::load(Some(&path), false).unwrap();
        assert_eq!(cfg.defaults.kind, "rest");
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.type").as_deref(), Some("rest"));
        assert_eq!(cfg.get("toolchain.skip_mod").as_deref(), Some("false"));
        assert_eq!(cfg.get("does.not.exist"), None);
    }

    #[test]
    fn every_known_key_is_gettable() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(cfg.get(key).is_some(), "{key}");
        }
    }

    #[test]
    fn set_creates_and_updates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.toml");

        let cfg = AppConfig::set_in_file(&path, "toolchain.program", "go1.22").unwrap();
        assert_eq!(cfg.toolchain.program, "go1.22");

        let cfg = AppConfig::set_in_file(&path, "toolchain.skip_mod", "true").unwrap();
        assert!(cfg.toolchain.skip_mod);
        assert_eq!(cfg.toolchain.program, "go1.22");

        let reloaded = AppConfig::load(Some(&path), true).unwrap();
        assert!(reloaded.toolchain.skip_mod);
    }

    #[test]
    fn set_rejects_bad_input() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        assert!(AppConfig::set_in_file(&path, "nope.key", "x").is_err());
        assert!(AppConfig::set_in_file(&path, "output.no_color", "maybe").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn serialises_to_toml() {
        let s = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(s.contains("[toolchain]"));
        assert!(s.contains("type = \"rest\""));
    }
}
