//! Layered configuration for phonecmp.
//!
//! Sources, lowest priority first:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. A config file: an explicit path, or `config.toml` in the platform
//!    config directory. TOML, YAML and JSON are picked by extension.
//! 3. `PHONECMP_*` environment variables (`PHONECMP_LIVE_PREVIEW=true`)

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PHONECMP_";
const DEFAULT_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CMS entry export to load phones from.
    pub catalog: Option<PathBuf>,
    /// Text shown for a specification a phone has no value for.
    pub placeholder: String,
    /// Keep live-preview edit tags from the CMS export.
    pub live_preview: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            live_preview: false,
        }
    }
}
impl Config {
    /// Loads configuration from defaults, a config file, and the environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|p| p.is_file()),
        };
        if let Some(file) = &file {
            tracing::debug!(path = %file.display(), "Loading config file");
        }
        Self::from_figment(Self::figment(file.as_deref()).merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Defaults merged with a config file, without the environment layer.
    pub fn figment(file: Option<&Path>) -> Figment {
        let figment = Figment::from(Serialized::defaults(Config::default()));
        match file {
            None => figment,
            Some(file) => match file.extension().and_then(|e| e.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
                Some("json") => figment.merge(Json::file(file)),
                _ => figment.merge(Toml::file(file)),
            },
        }
    }

    /// Extracts and validates a config from any figment.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()
    }

    /// `config.toml` in the platform config directory, e.g.
    /// `~/.config/phonecmp/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "phonecmp").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn validate(self) -> Result<Self> {
        if self.placeholder.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("placeholder must not be empty"));
        }
        if self.catalog.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            exn::bail!(ErrorKind::Invalid("catalog path must not be empty"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn write_config(ext: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(ext).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_figment(Config::figment(None)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.placeholder, "N/A");
    }

    #[rstest]
    #[case(".toml", "catalog = \"phones.json\"\nlive_preview = true\n")]
    #[case(".yaml", "catalog: phones.json\nlive_preview: true\n")]
    #[case(".json", r#"{"catalog": "phones.json", "live_preview": true}"#)]
    fn test_file_formats(#[case] ext: &str, #[case] contents: &str) {
        let file = write_config(ext, contents);
        let config = Config::from_figment(Config::figment(Some(file.path()))).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("phones.json")));
        assert!(config.live_preview);
        assert_eq!(config.placeholder, "N/A");
    }

    #[test]
    fn test_later_layers_win() {
        let file = write_config(".toml", "placeholder = \"-\"\n");
        let figment = Config::figment(Some(file.path())).merge(Serialized::default("placeholder", "n/a"));
        assert_eq!(Config::from_figment(figment).unwrap().placeholder, "n/a");
    }

    #[rstest]
    #[case("placeholder = \"  \"\n", "placeholder must not be empty")]
    #[case("catalog = \"\"\n", "catalog path must not be empty")]
    fn test_invalid(#[case] contents: &str, #[case] reason: &'static str) {
        let file = write_config(".toml", contents);
        let err = Config::from_figment(Config::figment(Some(file.path()))).unwrap_err();
        assert_eq!(*err, ErrorKind::Invalid(reason));
    }

    #[test]
    fn test_wrong_type() {
        let file = write_config(".toml", "live_preview = \"sometimes\"\n");
        let err = Config::from_figment(Config::figment(Some(file.path()))).unwrap_err();
        assert_eq!(*err, ErrorKind::Load);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert_eq!(*Config::load(Some(&path)).unwrap_err(), ErrorKind::NotFound(path.clone()));
    }
}
