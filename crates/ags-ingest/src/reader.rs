//! Reading and writing AGS files on disk.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Read an AGS file as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected, so that binary or mis-encoded input still reaches the
/// validator and is reported by the encoding rule.
pub fn read_ags_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read AGS file");

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                path = %path.display(),
                valid_up_to = err.utf8_error().valid_up_to(),
                "file is not valid UTF-8; invalid bytes replaced"
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Write AGS text to disk.
pub fn write_ags_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
