// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{CompatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "termcompat";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProbeConfig {
    #[serde(default)]
    pub probe: ProbeSamples,
}

/// Inputs exercised by the diagnostic probe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeSamples {
    #[serde(default = "default_strings")]
    pub strings: Vec<String>,

    #[serde(default = "default_codepoints")]
    pub codepoints: Vec<u32>,

    #[serde(default = "default_values")]
    pub values: Vec<u32>,
}

impl Default for ProbeSamples {
    fn default() -> Self {
        Self {
            strings: default_strings(),
            codepoints: default_codepoints(),
            values: default_values(),
        }
    }
}

fn default_strings() -> Vec<String> {
    vec![
        "hello".to_string(),
        "e\u{301}".to_string(),
        "中文".to_string(),
    ]
}

fn default_codepoints() -> Vec<u32> {
    // BEL, 'A', combining acute accent, CJK ideograph
    vec![0x07, 0x41, 0x301, 0x4E2D]
}

fn default_values() -> Vec<u32> {
    vec![0x0102_0304, 0xDEAD_BEEF]
}

impl ProbeConfig {
    /// `termcompat/config.toml` under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No configuration directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(config_path)?;
        let config: ProbeConfig = toml::from_str(&contents).map_err(|e| {
            CompatError::ConfigFile(format!("Failed to parse {}: {e}", config_path.display()))
        })?;
        config.validate()?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self
            .probe
            .codepoints
            .iter()
            .find(|&&cp| char::from_u32(cp).is_none())
        {
            return Err(CompatError::InvalidConfig(format!(
                "probe.codepoints contains {bad:#x}, which is not a Unicode scalar value"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ProbeConfig::default();
        assert_eq!(config.probe.codepoints, vec![0x07, 0x41, 0x301, 0x4E2D]);
        assert_eq!(config.probe.strings.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ProbeConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.probe, ProbeSamples::default());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &path,
            r#"
[probe]
strings = ["abc"]
values = [7]
"#,
        )
        .unwrap();

        let loaded = ProbeConfig::load(&path).unwrap();
        assert_eq!(loaded.probe.values, vec![7]);
        assert_eq!(loaded.probe.strings, vec!["abc".to_string()]);
        assert_eq!(loaded.probe.codepoints, default_codepoints());
    }

    #[test]
    fn test_default_path_is_under_config_dir() {
        if let Some(dir) = dirs::config_dir() {
            let path = ProbeConfig::default_path().unwrap();
            assert!(path.starts_with(dir));
            assert!(path.ends_with(Path::new(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
        }
    }

    #[test]
    fn test_partial_config_with_hex_codepoints() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &path,
            r#"
[probe]
codepoints = [0x41, 0xFF21]
"#,
        )
        .unwrap();

        let loaded = ProbeConfig::load(&path).unwrap();
        assert_eq!(loaded.probe.codepoints, vec![0x41, 0xFF21]);
        assert_eq!(loaded.probe.values, default_values());
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[probe\ncodepoints = ").unwrap();

        let result = ProbeConfig::load(&path);
        assert!(matches!(result, Err(CompatError::ConfigFile(_))));
    }

    #[test]
    fn test_surrogate_codepoint_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[probe]\ncodepoints = [0xD800]\n").unwrap();

        let result = ProbeConfig::load(&path);
        assert!(matches!(result, Err(CompatError::InvalidConfig(_))));
    }
}
