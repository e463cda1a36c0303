use crate::report::uuid::UuidStyle;
use crate::vk::ApplicationInfo;
use anyhow::Context;
use ash::vk;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Default for Version {
    fn default() -> Self {
        Self {
            major: 1,
            minor: 0,
            patch: 0,
        }
    }
}

impl Version {
    pub fn packed(self) -> u32 {
        vk::make_api_version(0, self.major, self.minor, self.patch)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub application_name: String,
    pub application_version: Version,
    pub engine_name: String,
    pub engine_version: Version,
    pub uuid_style: UuidStyle,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            application_name: "vkinfovulkan".to_string(),
            application_version: Version::default(),
            engine_name: "vkinfovulkan".to_string(),
            engine_version: Version::default(),
            uuid_style: UuidStyle::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Application info for instance creation, targeting `api_version`.
    pub fn application_info(&self, api_version: u32) -> ApplicationInfo {
        ApplicationInfo {
            application_name: self.application_name.clone(),
            application_version: self.application_version.packed(),
            engine_name: self.engine_name.clone(),
            engine_version: self.engine_version.packed(),
            api_version,
        }
    }
}
