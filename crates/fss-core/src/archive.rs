//! Assembly of the downloadable scene archive.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::{RUNNER_ENTRY_NAME, SCENE_ENTRY_NAME};
use crate::error::Result;

/// Build the `export.zip` bytes: the runner script under `js/` plus the
/// exported scene wrapped as a CommonJS module.
pub fn build_scene_archive(runner: &[u8], scene_json: &str) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(RUNNER_ENTRY_NAME, options)?;
    zip.write_all(runner)?;

    zip.start_file(SCENE_ENTRY_NAME, options)?;
    zip.write_all(format!("module.exports = {scene_json};").as_bytes())?;

    Ok(zip.finish()?.into_inner())
}
