//! Configuration handling for the SeqPrep CLI
//!
//! Supports loading configuration from seqprep.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use seqprep_core::chunk::DEFAULT_FILE_PREFIX;
use seqprep_core::{ChunkConfig, EncoderConfig, DEFAULT_THRESHOLD, FASTA_LINE_WIDTH};

pub const DEFAULT_CONFIG_FILE: &str = "seqprep.toml";

/// Classifier input width, also used as the default chunk length.
const DEFAULT_SEQUENCE_LENGTH: NonZeroUsize = match NonZeroUsize::new(4242) {
    Some(length) => length,
    None => unreachable!(),
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub encoder: EncoderSection,
    #[serde(default)]
    pub chunker: ChunkerSection,
    #[serde(default)]
    pub classifier: ClassifierSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default number of threads to use for chunk writing
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSection {
    /// Fixed classifier input length
    #[serde(default = "default_target_length")]
    pub target_length: NonZeroUsize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerSection {
    /// Bases per chunk file
    #[serde(default = "default_chunk_length")]
    pub chunk_length: NonZeroUsize,

    /// Number of chunk files; derived from the input length when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_files: Option<NonZeroUsize>,

    /// Bases per line in chunk files
    #[serde(default = "default_line_width")]
    pub line_width: NonZeroUsize,

    /// Chunk file name prefix
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSection {
    /// Probability above which a sample is labelled positive
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Model artifact (JSON logistic model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,
}

// Default value functions
fn default_threads() -> usize { num_cpus::get() }
fn default_target_length() -> NonZeroUsize { DEFAULT_SEQUENCE_LENGTH }
fn default_chunk_length() -> NonZeroUsize { DEFAULT_SEQUENCE_LENGTH }
fn default_line_width() -> NonZeroUsize { FASTA_LINE_WIDTH }
fn default_file_prefix() -> String { DEFAULT_FILE_PREFIX.to_string() }
fn default_threshold() -> f64 { DEFAULT_THRESHOLD }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { threads: default_threads() }
    }
}

impl Default for EncoderSection {
    fn default() -> Self {
        Self { target_length: default_target_length() }
    }
}

impl Default for ChunkerSection {
    fn default() -> Self {
        Self {
            chunk_length: default_chunk_length(),
            num_files: None,
            line_width: default_line_width(),
            file_prefix: default_file_prefix(),
        }
    }
}

impl Default for ClassifierSection {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            model: None,
        }
    }
}

impl EncoderSection {
    pub fn to_encoder_config(&self, target_length: Option<NonZeroUsize>) -> EncoderConfig {
        EncoderConfig::new(target_length.unwrap_or(self.target_length))
    }
}

impl ChunkerSection {
    /// Build the chunker configuration, letting command-line values win.
    pub fn to_chunk_config(
        &self,
        chunk_length: Option<NonZeroUsize>,
        num_files: Option<NonZeroUsize>,
        line_width: Option<NonZeroUsize>,
        prefix: Option<String>,
    ) -> ChunkConfig {
        ChunkConfig::new(chunk_length.unwrap_or(self.chunk_length), num_files.or(self.num_files))
            .with_line_width(line_width.unwrap_or(self.line_width))
            .with_file_prefix(prefix.unwrap_or_else(|| self.file_prefix.clone()))
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        Self::default().to_toml()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.encoder.target_length.get(), 4242);
        assert_eq!(config.chunker.chunk_length.get(), 4242);
        assert_eq!(config.chunker.line_width.get(), 60);
        assert_eq!(config.chunker.num_files, None);
        assert_eq!(config.classifier.threshold, 0.5);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.chunker.num_files = NonZeroUsize::new(168);
        let temp_file = NamedTempFile::new()?;

        config.save_to_file(temp_file.path())?;
        let loaded_config = Config::load_from_file(temp_file.path())?;

        assert_eq!(loaded_config.chunker.num_files, NonZeroUsize::new(168));
        assert_eq!(loaded_config.encoder.target_length, config.encoder.target_length);
        assert_eq!(loaded_config.chunker.file_prefix, "chunk");

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[chunker]\nnum_files = 168\n").unwrap();
        assert_eq!(config.chunker.num_files, NonZeroUsize::new(168));
        assert_eq!(config.chunker.chunk_length.get(), 4242);
        assert_eq!(config.encoder.target_length.get(), 4242);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[encoder]\ntarget_length = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let section = ChunkerSection {
            num_files: NonZeroUsize::new(10),
            ..ChunkerSection::default()
        };
        let chunk = section.to_chunk_config(NonZeroUsize::new(100), None, NonZeroUsize::new(80), Some("part".into()));
        assert_eq!(chunk.chunk_length.get(), 100);
        assert_eq!(chunk.num_files, NonZeroUsize::new(10));
        assert_eq!(chunk.line_width.get(), 80);
        assert_eq!(chunk.file_prefix, "part");
    }

    #[test]
    fn test_example_toml_generation() {
        let example = Config::example_toml().unwrap();
        assert!(example.contains("[encoder]"));
        assert!(example.contains("[chunker]"));
        assert!(example.contains("[classifier]"));
    }
}
