use std::fmt;

/// Mesh resolution presets are compiled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshSize {
    pub width: u32,
    pub height: u32,
}

impl MeshSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for MeshSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A loaded, ready-to-render preset. Its internals belong to the factory
/// that produced it.
pub trait Preset: fmt::Debug {
    fn name(&self) -> &str;

    fn mesh_size(&self) -> MeshSize;

    /// Number of parameters the preset defines. Zero for content-free presets.
    fn parameter_count(&self) -> usize {
        0
    }
}

pub const IDLE_PRESET_NAME: &str = "idle";

/// Built-in fallback shown when nothing else is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlePreset {
    mesh: MeshSize,
}

impl IdlePreset {
    pub fn new(mesh: MeshSize) -> Self {
        Self { mesh }
    }
}

impl Preset for IdlePreset {
    fn name(&self) -> &str {
        IDLE_PRESET_NAME
    }

    fn mesh_size(&self) -> MeshSize {
        self.mesh
    }
}
