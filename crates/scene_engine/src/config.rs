//! Configuration system

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Scene renderer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Directory the scene's texture images are loaded from
    pub texture_root: PathBuf,

    /// Fail scene preparation on the first texture that cannot load.
    /// When false, failed textures are reported and the scene renders
    /// the affected surfaces with flat colors.
    pub abort_on_texture_failure: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            texture_root: PathBuf::from("textures"),
            abort_on_texture_failure: false,
        }
    }
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Full path of a texture file under the configured root
    pub fn texture_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.texture_root).join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = SceneConfig::default();
        assert_eq!(config.texture_root, PathBuf::from("textures"));
        assert!(!config.abort_on_texture_failure);
        assert_eq!(
            config.texture_path("wood.jpg"),
            PathBuf::from("textures/wood.jpg")
        );
    }

    #[test]
    fn toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.toml");
        let path = path.to_str().unwrap();

        let mut config = SceneConfig::default();
        config.texture_root = PathBuf::from("assets/tex");
        config.abort_on_texture_failure = true;
        config.save_to_file(path).unwrap();

        let loaded = SceneConfig::load_from_file(path).unwrap();
        assert_eq!(loaded.texture_root, config.texture_root);
        assert_eq!(
            loaded.abort_on_texture_failure,
            config.abort_on_texture_failure
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        // Extension is checked before any file access, so even a path that
        // doesn't exist reports the format, not a missing file.
        let err = SceneConfig::load_from_file("scene.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));

        // Same outcome for a file that does exist.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "texture_root: assets\n").unwrap();
        let err = SceneConfig::load_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_toml_file_is_an_io_error() {
        let err = SceneConfig::load_from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "abort_on_texture_failure = true\n").unwrap();

        let loaded = SceneConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert!(loaded.abort_on_texture_failure);
        assert_eq!(loaded.texture_root, PathBuf::from("textures"));
    }
}
