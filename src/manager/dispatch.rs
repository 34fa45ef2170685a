use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use super::PresetFactoryManager;
use crate::error::{LoadError, Result};
use crate::preset::{IdlePreset, Preset};
use crate::url::{extension_of, normalize_extension, parse_extension, split_scheme};

const IDLE_SCHEME: &str = "idle";
const FILE_SCHEME: &str = "file";

impl PresetFactoryManager {
    /// Load a preset from a bare path, a `file://` URL or an `idle://` URL.
    pub fn create_preset_from_file(&self, filename: &str) -> Result<Box<dyn Preset>> {
        let mesh = self.mesh_size()?;

        let path = match split_scheme(filename) {
            (Some(scheme), _) if scheme == IDLE_SCHEME => {
                return Ok(Box::new(IdlePreset::new(mesh)));
            }
            (Some(scheme), rest) if scheme == FILE_SCHEME => rest,
            (None, path) => path,
            (Some(scheme), _) => {
                return Err(LoadError::UnsupportedScheme {
                    scheme,
                    url: filename.to_string(),
                });
            }
        };

        let extension = parse_extension(path).ok_or_else(|| LoadError::MissingExtension {
            path: path.to_string(),
        })?;
        self.load_path(Path::new(path), &extension)
    }

    /// Load a preset from a filesystem path. No URL parsing is applied, so
    /// non-UTF-8 paths and paths containing `://` load as-is.
    pub fn create_preset_from_path(&self, path: &Path) -> Result<Box<dyn Preset>> {
        self.ensure_initialized()?;
        let extension = extension_of(path).ok_or_else(|| LoadError::MissingExtension {
            path: path.display().to_string(),
        })?;
        self.load_path(path, &extension)
    }

    fn load_path(&self, path: &Path, extension: &str) -> Result<Box<dyn Preset>> {
        // Resolve before opening so unknown formats never touch the filesystem.
        self.factory(extension)?;
        let mut reader = open_preset_file(path)?;
        self.create_preset_from_stream(extension, &mut reader)
    }

    /// Load a preset of type `extension` from `data`.
    ///
    /// The stream is only read from; it is never closed, rewound or seeked.
    pub fn create_preset_from_stream(
        &self,
        extension: &str,
        data: &mut dyn Read,
    ) -> Result<Box<dyn Preset>> {
        let factory = self.factory(extension)?;
        factory
            .load_from_stream(data)
            .map_err(|e| LoadError::PresetParseFailure {
                extension: normalize_extension(extension),
                message: format!("{:#}", e),
            })
    }
}

/// Open `path` for reading. Anything that is not a regular file (a
/// directory named `x.milk`, for instance) is an open failure.
fn open_preset_file(path: &Path) -> Result<BufReader<File>> {
    let open_failure = |source: io::Error| LoadError::StreamOpenFailure {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_failure)?;
    let metadata = file.metadata().map_err(open_failure)?;
    if !metadata.is_file() {
        return Err(open_failure(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(BufReader::new(file))
}
