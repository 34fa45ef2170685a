use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use std::io::Read;

use super::PresetFactory;
use crate::preset::{MeshSize, Preset};

const UNNAMED_PRESET: &str = "untitled";

/// Milkdrop preset as read from a `.milk` / `.prjm` file: a flat,
/// order-preserving list of `key=value` parameters.
#[derive(Debug, Clone)]
pub struct MilkdropPreset {
    name: String,
    mesh: MeshSize,
    parameters: IndexMap<String, String>,
}

impl MilkdropPreset {
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Preset for MilkdropPreset {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh_size(&self) -> MeshSize {
        self.mesh
    }

    fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

pub struct MilkdropPresetFactory {
    mesh: MeshSize,
}

impl MilkdropPresetFactory {
    pub fn new(mesh: MeshSize) -> Self {
        Self { mesh }
    }

    fn parse(&self, source: &str) -> Result<MilkdropPreset> {
        let mut name = None;
        let mut parameters = IndexMap::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with("//") || line.starts_with(';') {
                continue;
            }

            if let Some(section) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                if name.is_none() {
                    name = Some(section.trim().to_string());
                }
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                bail!("line {}: expected key=value, found \"{}\"", idx + 1, line);
            };
            let key = key.trim();
            if key.is_empty() {
                bail!("line {}: empty parameter name", idx + 1);
            }
            parameters.insert(key.to_string(), value.trim().to_string());
        }

        Ok(MilkdropPreset {
            name: name.unwrap_or_else(|| UNNAMED_PRESET.to_string()),
            mesh: self.mesh,
            parameters,
        })
    }
}

impl PresetFactory for MilkdropPresetFactory {
    fn supported_extensions(&self) -> &[&'static str] {
        &["milk", "prjm"]
    }

    fn mesh_size(&self) -> MeshSize {
        self.mesh
    }

    fn load_from_stream(&self, data: &mut dyn Read) -> Result<Box<dyn Preset>> {
        let mut bytes = Vec::new();
        data.read_to_end(&mut bytes)
            .context("failed to read preset data")?;
        let source =
            String::from_utf8(bytes).context("preset data is not valid UTF-8 text")?;
        Ok(Box::new(self.parse(&source)?))
    }
}
