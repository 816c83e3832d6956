//! Reading input files into memory.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{Result, WordFreqError};

/// Read the entire file at `path` as UTF-8 text.
///
/// The file handle is dropped before returning, on success and on every
/// error path.
///
/// # Errors
///
/// Returns [`WordFreqError::FileNotFound`] if `path` does not exist and
/// [`WordFreqError::Io`] for any other open or read failure, including
/// content that is not valid UTF-8.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| match source.kind() {
        ErrorKind::NotFound => WordFreqError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => WordFreqError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    let mut file = File::open(path).map_err(io_error)?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(io_error)?;

    Ok(text)
}
