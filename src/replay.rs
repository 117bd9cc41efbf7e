//! Recorded frame streams.
//!
//! A recording is a YAML sequence; each element is either a frame sample or
//! `null` for a frame without a tracked body:
//!
//! ```yaml
//! - right_hand: { x: 0.0, y: 0.0, z: 1.0 }
//!   right_state: Open
//!   left_state: Open
//! - null
//! ```

use crate::{sample::FrameSample, Error, Result};
use std::io::Read;
use std::path::Path;

/// Frames in delivery order, `None` meaning no tracked body
pub type Recording = Vec<Option<FrameSample>>;

/// Parse a recording from YAML text
pub fn parse_recording(content: &str) -> Result<Recording> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).map_err(|e| Error::ReplayError(format!("Failed to parse recording: {e}")))
}

/// Read a recording from any reader
pub fn read_recording<R: Read>(mut reader: R) -> Result<Recording> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| Error::IoError(e.to_string()))?;
    parse_recording(&content)
}

/// Read a recording from a file, or from stdin when `path` is `-`
pub fn load_recording<P: AsRef<Path>>(path: P) -> Result<Recording> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return read_recording(std::io::stdin().lock());
    }
    let file = std::fs::File::open(path).map_err(|e| Error::IoError(format!("{}: {e}", path.display())))?;
    read_recording(std::io::BufReader::new(file))
}
