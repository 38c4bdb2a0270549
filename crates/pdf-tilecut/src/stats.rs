use crate::options::TileOptions;
use crate::page::collect_pages;
use crate::tiling::grid_for_page;
use crate::types::TilingStatistics;
use crate::Result;
use lopdf::Document;

/// Calculate statistics for a tiling run without mutating the document.
pub fn calculate_statistics(document: &Document, options: &TileOptions) -> Result<TilingStatistics> {
    options.validate()?;
    let (tile_w, tile_h) = options.content_size_pt();

    let source_pages = document.get_pages().len();
    let pages = collect_pages(document);
    let grids: Vec<(u32, u32)> = pages
        .iter()
        .map(|page| grid_for_page(page, tile_w, tile_h))
        .collect();
    let output_tiles = grids.iter().map(|(cols, rows)| (cols * rows) as usize).sum();

    Ok(TilingStatistics {
        source_pages,
        skipped_pages: source_pages - pages.len(),
        grids,
        output_tiles,
    })
}
