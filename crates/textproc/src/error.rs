use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type TextprocResult<T> = Result<T, TextprocError>;

#[derive(Debug, Error)]
pub enum TextprocError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read failure after the file was opened, including invalid UTF-8.
    #[error("failed reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TextprocError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            TextprocError::Open { path, .. } | TextprocError::Read { path, .. } => path,
        }
    }
}
