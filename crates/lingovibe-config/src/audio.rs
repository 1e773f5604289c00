use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_sample_rate() -> u32 {
    24000
}

fn default_channels() -> u16 {
    1
}

fn default_output_dir() -> PathBuf {
    std::env::temp_dir().join("lingovibe-audio")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Sample rate of the synthesized PCM stream
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Where played clips are written as WAV files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            sample_rate: default_sample_rate(),
            channels: default_channels(),
            output_dir: default_output_dir(),
        }
    }
}
