//! Document I/O for tiling
//!
//! Reading parses the container into the object graph this crate edits;
//! writing runs lopdf's stream compression and rebuilds the cross-reference
//! table, producing the compact final container.

use crate::{Result, TileCutError};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a PDF document from a file
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}

/// Load a PDF document from memory (stdin staging)
pub fn load_pdf_bytes(bytes: &[u8]) -> Result<Document> {
    Ok(Document::load_mem(bytes)?)
}

/// Serialize the document compressed, to memory (stdout staging)
pub fn save_pdf_bytes(mut doc: Document) -> Result<Vec<u8>> {
    doc.compress();
    let mut writer = Vec::new();
    doc.save_to(&mut writer)?;
    Ok(writer)
}

/// Save the tiled document, compressed
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || save_pdf_bytes(doc)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// Write the rewritten document uncompressed to a kept temp file and return
/// its path. Debug aid; regular runs stage nothing on disk.
pub fn save_debug_pdf(doc: &Document) -> Result<PathBuf> {
    let mut doc = doc.clone();
    let file = tempfile::Builder::new()
        .prefix("pdftc-")
        .suffix(".pdf")
        .tempfile()?;
    let (mut handle, path) = file.keep().map_err(|e| TileCutError::Io(e.error))?;
    doc.save_to(&mut handle)?;
    Ok(path)
}
