//! Writing (and re-reading) the pipeline's output files.

use crate::output::error::OutputError;
use crate::output::response::{to_json_document, StatsResponse};
use crate::types::payload::StatsPayload;
use log::info;
use std::fs;
use std::path::Path;

/// Creates `dir` (and any missing parents).
pub fn ensure_output_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::DirCreation(dir.to_path_buf(), source))
}

/// Writes a fetched payload body to `path` exactly as received.
pub fn save_raw(path: &Path, body: &str) -> Result<(), OutputError> {
    fs::write(path, body).map_err(|source| OutputError::FileWrite(path.to_path_buf(), source))?;
    info!("Saved raw data to {}", path.display());
    Ok(())
}

/// Reads a previously saved raw payload back into its parsed form.
pub fn load_raw(path: &Path) -> Result<StatsPayload, OutputError> {
    let body = fs::read_to_string(path)
        .map_err(|source| OutputError::FileRead(path.to_path_buf(), source))?;
    serde_json::from_str(&body).map_err(|source| OutputError::RawParse(path.to_path_buf(), source))
}

/// Renders `response` and writes it to `path`.
pub fn save_processed(path: &Path, response: &StatsResponse) -> Result<(), OutputError> {
    let document = to_json_document(response)?;
    fs::write(path, document)
        .map_err(|source| OutputError::FileWrite(path.to_path_buf(), source))?;
    info!("Saved processed data to {}", path.display());
    Ok(())
}
