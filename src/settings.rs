use invoicer_source::LocatorConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings of the CLI driver.
///
/// Loaded from an optional TOML file; every key has a default, and command
/// line flags override what the file sets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub open_viewer: bool,
    pub locator: LocatorConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            open_viewer: true,
            locator: LocatorConfig::default(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`, or returns the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings: Settings = builder.build()?.try_deserialize()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Creates the data and output directories if they are missing.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.locator.primary, "invoice_id");
    }

    #[test]
    fn file_overrides_selected_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invoicer.toml");
        fs::write(
            &path,
            "output_dir = \"pdfs\"\nopen_viewer = false\n\n[locator]\ncollection_field = \"bills\"\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("pdfs"));
        assert_eq!(settings.data_dir, PathBuf::from("data"));
        assert!(!settings.open_viewer);
        assert_eq!(settings.locator.collection_field, "bills");
        assert_eq!(settings.locator.fallback, "id");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }

    #[test]
    fn creates_directories() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            data_dir: dir.path().join("in"),
            output_dir: dir.path().join("out/nested"),
            ..Settings::default()
        };
        settings.ensure_directories().unwrap();
        assert!(settings.data_dir.is_dir());
        assert!(settings.output_dir.is_dir());
    }
}
