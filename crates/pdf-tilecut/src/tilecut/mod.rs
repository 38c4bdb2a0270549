//! PDF tile cutting - slicing pages into small printable tiles
//!
//! This module orchestrates the tiling pipeline:
//! 1. Locate the root page tree and extract the source pages
//! 2. Cut each page's trim area into a uniform grid of tiles
//! 3. Generate the registration-mark overlay for every tile
//! 4. Reassemble the document around the tile pages

mod io;

pub use io::{load_pdf, load_pdf_bytes, save_debug_pdf, save_pdf, save_pdf_bytes};

use crate::assemble::assemble;
use crate::options::TileOptions;
use crate::overlay::OverlayConfig;
use crate::page::{collect_pages, root_pages_id};
use crate::tiling::cut_page_into_tiles;
use crate::types::{BLEED_MARGIN_PT, TRIM_MARGIN_PT};
use crate::Result;
use lopdf::Document;

/// Main tiling function
pub async fn tile_document(document: &Document, options: &TileOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || tile_document_sync(document, &options)).await?
}

/// Synchronous tiling pipeline; [`tile_document`] is the async wrapper.
pub fn tile_document_sync(mut document: Document, options: &TileOptions) -> Result<Document> {
    options.validate()?;

    let pages_root = root_pages_id(&document)?;
    let (tile_w, tile_h) = options.content_size_pt();

    let pages = collect_pages(&document);
    let mut tiles = Vec::new();
    for page in &pages {
        tiles.extend(cut_page_into_tiles(
            page,
            tile_w,
            tile_h,
            BLEED_MARGIN_PT,
            TRIM_MARGIN_PT,
        ));
    }
    log::debug!("cut {} pages into {} tiles", pages.len(), tiles.len());

    let config = OverlayConfig {
        title: options.title.clone().unwrap_or_default(),
        long_trim_marks: options.long_trim_marks,
        hide_logo: options.hide_logo,
    };
    assemble(&mut document, &mut tiles, pages_root, &config)?;

    Ok(document)
}
