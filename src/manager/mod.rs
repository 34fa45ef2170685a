//! Extension-keyed registry of preset factories.
//!
//! Factory instances live once in `factories`; the extension map only stores
//! indices into it, so an instance registered under several aliases is still
//! dropped exactly once.

mod dispatch;

use indexmap::IndexMap;

use crate::error::{LoadError, Result};
use crate::factory::{builtin_constructors, FactoryConstructor, PresetFactory};
use crate::preset::MeshSize;
use crate::url::normalize_extension;

/// Index of a factory inside the manager's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FactoryId(usize);

pub struct PresetFactoryManager {
    constructors: Vec<FactoryConstructor>,
    mesh: Option<MeshSize>,
    factories: Vec<Box<dyn PresetFactory>>,
    extensions: IndexMap<String, FactoryId>,
}

impl PresetFactoryManager {
    /// Manager that installs the built-in factory set on `initialize`.
    pub fn new() -> Self {
        Self::with_constructors(builtin_constructors())
    }

    /// Manager that installs the given fixed factory set on `initialize`.
    pub fn with_constructors(constructors: Vec<FactoryConstructor>) -> Self {
        Self {
            constructors,
            mesh: None,
            factories: Vec::new(),
            extensions: IndexMap::new(),
        }
    }

    /// Build (or rebuild) every factory for the given mesh.
    ///
    /// Must be called before anything else and again whenever the mesh
    /// changes. Re-initializing with the current mesh does nothing.
    pub fn initialize(&mut self, mesh_width: u32, mesh_height: u32) {
        let mesh = MeshSize::new(mesh_width, mesh_height);
        if self.mesh == Some(mesh) {
            return;
        }

        self.clear_factories();
        for construct in self.constructors.clone() {
            let factory = construct(mesh);
            let id = FactoryId(self.factories.len());
            let tags = factory.supported_extensions().to_vec();
            self.factories.push(factory);
            for tag in tags {
                self.register_factory(tag, id);
            }
        }
        self.mesh = Some(mesh);
    }

    pub fn is_initialized(&self) -> bool {
        self.mesh.is_some()
    }

    pub fn mesh_size(&self) -> Result<MeshSize> {
        self.mesh.ok_or(LoadError::NotInitialized)
    }

    /// Factory registered for `extension`.
    pub fn factory(&self, extension: &str) -> Result<&dyn PresetFactory> {
        self.ensure_initialized()?;
        let extension = normalize_extension(extension);
        match self.extensions.get(&extension) {
            Some(id) => Ok(self.factories[id.0].as_ref()),
            None => Err(LoadError::UnknownExtension { extension }),
        }
    }

    /// Whether a factory is registered for `extension`. False before
    /// `initialize`.
    pub fn extension_handled(&self, extension: &str) -> bool {
        self.extensions.contains_key(&normalize_extension(extension))
    }

    /// Registered extension tags, aliases included, in registration order.
    pub fn extensions_handled(&self) -> Result<Vec<String>> {
        self.ensure_initialized()?;
        Ok(self.extensions.keys().cloned().collect())
    }

    fn register_factory(&mut self, extension: &str, id: FactoryId) {
        // Overwriting keeps the tag's original position.
        self.extensions.insert(normalize_extension(extension), id);
    }

    fn clear_factories(&mut self) {
        self.extensions.clear();
        self.factories.clear();
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(LoadError::NotInitialized)
        }
    }
}

impl Default for PresetFactoryManager {
    fn default() -> Self {
        Self::new()
    }
}
