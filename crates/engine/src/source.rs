use crate::config::Config;
use crate::error::{EngineError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Bytes inspected for NUL when deciding whether input is binary.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Display name used in reports.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Reads the whole document.
    ///
    /// # Errors
    /// Returns an error if the input cannot be read or looks binary.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(EngineError::Stdin)?;
                decode(&bytes, Path::new("<stdin>"))
            }
            Self::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
                    path: path.clone(),
                    source: e,
                })?;
                decode(&bytes, path)
            }
        }
    }
}

/// Inputs named by the configuration, standard input when there are none.
#[must_use]
pub fn sources(config: &Config) -> Vec<Source> {
    if config.reads_stdin() {
        vec![Source::Stdin]
    } else {
        config.inputs.iter().cloned().map(Source::File).collect()
    }
}

/// Lossy UTF-8 decoding, refusing input with NUL bytes near the start.
///
/// # Errors
/// Returns [`EngineError::Binary`] for binary-looking input.
pub fn decode(bytes: &[u8], path: &Path) -> Result<String> {
    let len = bytes.len().min(BINARY_SNIFF_LEN);
    if bytes[..len].contains(&0) {
        return Err(EngineError::Binary(path.to_path_buf()));
    }
    Ok(String::from_utf8_lossy(bytes).into_owned())
}
