// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Build error
    #[error(transparent)]
    Build(#[from] BuildError),

    /// Failed to write a container dump to its sink
    #[error("failed to write dump: {0}")]
    Dump(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Dump(e.to_string())
    }
}

/// Builder errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// The seeded pairs repeat a key and duplicates were rejected
    #[error("duplicate key in seeded pairs: {0}")]
    DuplicateKey(String),
}
