// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Specific problems found while reading a gallery manifest.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestError {
    /// The manifest is not valid TOML or does not match the expected layout.
    Parse(String),

    /// An `[[images]]` entry has an empty `source`.
    MissingSource { position: usize },

    /// The given path is neither a manifest file nor a directory.
    UnsupportedPath(String),
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Parse(_) => "error-manifest-parse",
            ManifestError::MissingSource { .. } => "error-manifest-missing-source",
            ManifestError::UnsupportedPath(_) => "error-gallery-unsupported-path",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Parse(msg) => write!(f, "Invalid manifest: {}", msg),
            ManifestError::MissingSource { position } => {
                write!(f, "Image entry #{} has no source", position + 1)
            }
            ManifestError::UnsupportedPath(path) => {
                write!(f, "Not a manifest or directory: {}", path)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
