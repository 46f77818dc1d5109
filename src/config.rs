use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the three catalog artifacts
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Reference table artifact file name
    #[serde(default = "default_reference_file")]
    pub reference_file: String,

    /// Display table artifact file name
    #[serde(default = "default_display_file")]
    pub display_file: String,

    /// Similarity matrix artifact file name
    #[serde(default = "default_similarity_file")]
    pub similarity_file: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_reference_file() -> String {
    "reference.json".to_string()
}

fn default_display_file() -> String {
    "display.json".to_string()
}

fn default_similarity_file() -> String {
    "similarity.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn reference_path(&self) -> PathBuf {
        self.data_dir.join(&self.reference_file)
    }

    pub fn display_path(&self) -> PathBuf {
        self.data_dir.join(&self.display_file)
    }

    pub fn similarity_path(&self) -> PathBuf {
        self.data_dir.join(&self.similarity_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_join_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/var/lib/manhwise"),
            reference_file: default_reference_file(),
            display_file: default_display_file(),
            similarity_file: default_similarity_file(),
        };

        assert_eq!(
            config.reference_path(),
            PathBuf::from("/var/lib/manhwise/reference.json")
        );
        assert_eq!(
            config.similarity_path(),
            PathBuf::from("/var/lib/manhwise/similarity.json")
        );
    }
}
