// crates/city-picker-core/src/loader/common_io.rs
use crate::error::{PickerError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Whether `path` names a gzip-compressed dataset (`*.gz`).
pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a dataset file, buffers it, and unwraps gzip when the name says so.
/// Returns a generic reader so the caller doesn't care about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            PickerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
        }
        _ => PickerError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(PickerError::NotFound(format!(
                "{} is gzip-compressed; rebuild with the `compact` feature",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}
