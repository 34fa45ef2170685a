pub mod milkdrop;

pub use milkdrop::{MilkdropPreset, MilkdropPresetFactory};

use anyhow::Result;
use std::io::Read;

use crate::preset::{MeshSize, Preset};

/// A format-specific preset parser.
///
/// Factories are built for one mesh size. When the mesh changes the manager
/// drops every factory and builds new ones through their [`FactoryConstructor`].
pub trait PresetFactory {
    /// Extension tags this factory answers to. The first entry is the
    /// primary tag, the rest are aliases.
    fn supported_extensions(&self) -> &[&'static str];

    fn mesh_size(&self) -> MeshSize;

    /// Parse a preset from `data`. The stream stays owned by the caller.
    fn load_from_stream(&self, data: &mut dyn Read) -> Result<Box<dyn Preset>>;
}

pub type FactoryConstructor = fn(MeshSize) -> Box<dyn PresetFactory>;

/// The factory set installed by [`crate::PresetFactoryManager::new`].
pub fn builtin_constructors() -> Vec<FactoryConstructor> {
    vec![milkdrop_factory as FactoryConstructor]
}

fn milkdrop_factory(mesh: MeshSize) -> Box<dyn PresetFactory> {
    Box::new(MilkdropPresetFactory::new(mesh))
}
