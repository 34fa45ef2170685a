//! Extension-keyed preset loading.
//!
//! [`PresetFactoryManager`] owns one factory per preset format and routes
//! paths, `file://` / `idle://` URLs and raw streams to the right one.

pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod manager;
pub mod preset;
pub mod url;

pub use error::{LoadError, Result};
pub use factory::{FactoryConstructor, PresetFactory};
pub use manager::PresetFactoryManager;
pub use preset::{IdlePreset, MeshSize, Preset};
