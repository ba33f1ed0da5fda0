use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Base namespace of the cinema ontology the tool was written for.
pub const DEFAULT_NAMESPACE: &str =
    "http://www.semanticweb.org/asus/ontologies/2025/10/bioskop-sumut/";

/// Run configuration: where the ontology lives, where the catalog goes,
/// and which namespace the predicates are bound against. Loadable from a
/// YAML or JSON file; individual values can be overridden on the command
/// line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("TubesWS.ttl")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            namespace: default_namespace(),
        }
    }
}

impl Configuration {
    /// Load configuration from a YAML or JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            anyhow::bail!("No namespace defined");
        }

        if !self.namespace.ends_with('/') && !self.namespace.ends_with('#') {
            anyhow::bail!(
                "Namespace must end with '/' or '#' so local names resolve: {}",
                self.namespace
            );
        }

        if self.input_path.as_os_str().is_empty() {
            anyhow::bail!("No input path defined");
        }

        if self.output_path.as_os_str().is_empty() {
            anyhow::bail!("No output path defined");
        }

        Ok(())
    }

    /// Create an example configuration
    pub fn example() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Configuration::default().validate().unwrap();
    }

    #[test]
    fn namespace_without_delimiter_is_rejected() {
        let config = Configuration {
            namespace: "http://example.org/cinema".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "input_path: onto.ttl\noutput_path: out.json\nnamespace: \"http://example.org/cinema#\"\n",
        )
        .unwrap();

        let config = Configuration::from_file(&path).unwrap();
        assert_eq!(config.input_path, PathBuf::from("onto.ttl"));
        assert_eq!(config.output_path, PathBuf::from("out.json"));
        assert_eq!(config.namespace, "http://example.org/cinema#");
        config.validate().unwrap();
    }

    #[test]
    fn load_json_config_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "input_path": "onto.ttl" }"#).unwrap();

        let config = Configuration::from_file(&path).unwrap();
        assert_eq!(config.input_path, PathBuf::from("onto.ttl"));
        assert_eq!(config.output_path, default_output_path());
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }
}
