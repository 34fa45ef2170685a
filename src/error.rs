use std::path::PathBuf;
use thiserror::Error;

/// Every failure the loader reports to its caller.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("preset factory manager is not initialized; call initialize() first")]
    NotInitialized,

    #[error("no preset factory registered for extension \"{extension}\"")]
    UnknownExtension { extension: String },

    #[error("unsupported URL scheme \"{scheme}\" in \"{url}\"")]
    UnsupportedScheme { scheme: String, url: String },

    #[error("cannot determine preset type: \"{path}\" has no file extension")]
    MissingExtension { path: String },

    #[error("could not open preset file {}: {source}", .path.display())]
    StreamOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[{extension}] {message}")]
    PresetParseFailure { extension: String, message: String },
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scheme_names_scheme_and_url() {
        let err = LoadError::UnsupportedScheme {
            scheme: "ftp".to_string(),
            url: "ftp://host/a.milk".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ftp"));
        assert!(msg.contains("ftp://host/a.milk"));
    }

    #[test]
    fn parse_failure_is_prefixed_with_extension() {
        let err = LoadError::PresetParseFailure {
            extension: "milk".to_string(),
            message: "line 3: expected key=value".to_string(),
        };
        assert_eq!(err.to_string(), "[milk] line 3: expected key=value");
    }

    #[test]
    fn stream_open_failure_keeps_io_source() {
        let err = LoadError::StreamOpenFailure {
            path: PathBuf::from("/no/such/file.milk"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/no/such/file.milk"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "gone");
    }
}
