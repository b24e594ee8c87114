//! Registry settings

use crate::base::PluginFamily;
use adjutor_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings controlling plugin discovery.
///
/// Layered from the embedded defaults, an optional `adjutor.toml` in the
/// working directory, and `ADJUTOR_*` environment variables
/// (e.g. `ADJUTOR_PLUGINS_DIR`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Root directory holding one sub-directory of manifests per plugin family
    pub plugins_dir: PathBuf,
}

impl RegistrySettings {
    /// Load settings from defaults, `adjutor.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::build(config::File::with_name("adjutor").required(false))
    }

    /// Load settings from defaults, the given file and the environment
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build(file: impl config::Source + Send + Sync + 'static) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("defaults.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(file)
            .add_source(config::Environment::with_prefix("ADJUTOR").separator("__"))
            .build()
            .map_err(|e| Error::config(format!("failed to load registry settings: {}", e)))?;

        settings
            .try_deserialize()
            .map_err(|e| Error::config(format!("invalid registry settings: {}", e)))
    }

    /// Directory scanned for plugin family `F`
    pub fn dir_for<F: PluginFamily + ?Sized>(&self) -> PathBuf {
        self.plugins_dir.join(F::DIR)
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            plugins_dir: PathBuf::from("./plugins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassifierPlugin, ImputerPlugin};
    use std::io::Write;

    #[test]
    fn test_default_dirs() {
        let settings = RegistrySettings::default();

        assert_eq!(
            settings.dir_for::<dyn ImputerPlugin>(),
            PathBuf::from("./plugins/imputers")
        );
        assert_eq!(
            settings.dir_for::<dyn ClassifierPlugin>(),
            PathBuf::from("./plugins/classifiers")
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "plugins_dir = \"/opt/adjutor/plugins\"").unwrap();

        let settings = RegistrySettings::from_file(file.path()).unwrap();
        assert_eq!(settings.plugins_dir, PathBuf::from("/opt/adjutor/plugins"));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = RegistrySettings::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let settings: RegistrySettings = toml_defaults();
        assert_eq!(settings, RegistrySettings::default());
    }

    fn toml_defaults() -> RegistrySettings {
        config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("defaults.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
