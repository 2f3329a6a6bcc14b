use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Structure representing the application configuration. Contains the input readings
/// files (in stage order) and the output schedule path.
/// Configs are seralizable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input_paths: Vec<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Get the path to the output schedule, checking that its directory exists
    pub fn get_output_path(&self) -> Result<&Path, ConfigError> {
        let path = self.output_path.as_deref().ok_or(ConfigError::NoOutputPath)?;
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                Err(ConfigError::BadFilePath(parent.to_path_buf()))
            }
            _ => Ok(path),
        }
    }

    /// Stage names are the input file names without extension
    pub fn get_stage_names(&self) -> Vec<String> {
        self.input_paths
            .iter()
            .map(|path| match path.file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => path.to_string_lossy().to_string(),
            })
            .collect()
    }

    pub fn has_inputs(&self) -> bool {
        !self.input_paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "input_paths:\n- /data/stage_b.txt\n- /data/stage_a.txt\noutput_path: /data/out.xml\n",
        )
        .unwrap();

        let config = Config::read_config_file(&path).unwrap();
        assert_eq!(
            config.input_paths,
            vec![
                PathBuf::from("/data/stage_b.txt"),
                PathBuf::from("/data/stage_a.txt")
            ]
        );
        assert_eq!(config.output_path, Some(PathBuf::from("/data/out.xml")));
        assert_eq!(config.get_stage_names(), vec!["stage_b", "stage_a"]);
        assert!(config.has_inputs());
    }

    #[test]
    fn test_template_round_trip() {
        let config = Config::default();
        let yaml_str = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml_str).unwrap();
        assert_eq!(parsed, config);
        assert!(!parsed.has_inputs());
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::read_config_file(&dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::BadFilePath(_))));
    }

    #[test]
    fn test_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        assert!(matches!(
            config.get_output_path(),
            Err(ConfigError::NoOutputPath)
        ));

        config.output_path = Some(dir.path().join("schedule.xml"));
        assert_eq!(config.get_output_path().unwrap(), dir.path().join("schedule.xml"));

        config.output_path = Some(dir.path().join("missing").join("schedule.xml"));
        assert!(matches!(
            config.get_output_path(),
            Err(ConfigError::BadFilePath(_))
        ));

        config.output_path = Some(PathBuf::from("schedule.xml"));
        assert!(config.get_output_path().is_ok());
    }
}
