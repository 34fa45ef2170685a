use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::preset::MeshSize;

pub const CONFIG_FILE: &str = ".presetrc.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Mesh width presets are built against
    #[serde(default = "default_mesh_width")]
    pub mesh_width: u32,

    /// Mesh height presets are built against
    #[serde(default = "default_mesh_height")]
    pub mesh_height: u32,

    /// Directory `scan` walks when no path is given
    #[serde(default)]
    pub preset_dir: Option<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            mesh_width: default_mesh_width(),
            mesh_height: default_mesh_height(),
            preset_dir: None,
        }
    }
}

impl LoaderConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: LoaderConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn mesh_size(&self) -> MeshSize {
        MeshSize::new(self.mesh_width, self.mesh_height)
    }
}

fn default_mesh_width() -> u32 {
    32
}

fn default_mesh_height() -> u32 {
    24
}
