//! Tile geometry engine
//!
//! Partitions a page's trim area into a row-major grid of equal-sized tile
//! pages. The requested tile size is a maximum: the grid is sized by
//! ceiling division and the cell size is then redistributed so every tile in
//! the grid has exactly the same dimensions, never a ragged partial tile at
//! the edge.

use crate::geometry::Rect;
use crate::page::TilePage;

/// Grid dimensions (columns, rows) for a page and a target content size in pt.
pub fn grid_for_page(page: &TilePage, tile_w: f32, tile_h: f32) -> (u32, u32) {
    let h_tiles = ((page.trim_box.width() / tile_w).ceil() as u32).max(1);
    let v_tiles = ((page.trim_box.height() / tile_h).ceil() as u32).max(1);
    (h_tiles, v_tiles)
}

/// Slice `page` into tiles of at most `tile_w` x `tile_h` points of content,
/// with the given bleed and trim margins applied outside each tile's trim box.
///
/// Tiles are produced in row-major order (all columns of row 0 at the bottom,
/// then row 1, ...) and inherit the source page's number, content references
/// and residue; only the geometry and tile coordinates are fresh.
pub fn cut_page_into_tiles(
    page: &TilePage,
    tile_w: f32,
    tile_h: f32,
    bleed_margin: f32,
    trim_margin: f32,
) -> Vec<TilePage> {
    let (h_tiles, v_tiles) = grid_for_page(page, tile_w, tile_h);

    // Redistribute so all tiles end up with the same dimensions.
    let tile_w = page.trim_box.width() / h_tiles as f32;
    let tile_h = page.trim_box.height() / v_tiles as f32;

    let mut tiles = Vec::with_capacity((h_tiles * v_tiles) as usize);
    for y in 0..v_tiles {
        let lly = page.trim_box.lly + y as f32 * tile_h;
        for x in 0..h_tiles {
            let llx = page.trim_box.llx + x as f32 * tile_w;
            let trim_box = Rect::new(llx, lly, llx + tile_w, lly + tile_h);
            let bleed_box = trim_box.expand(trim_margin);
            let media_box = bleed_box.expand(bleed_margin);
            tiles.push(TilePage {
                id: None,
                number: page.number,
                tile_x: x,
                tile_y: y,
                media_box,
                crop_box: media_box,
                bleed_box,
                trim_box,
                content_ids: page.content_ids.clone(),
                residue: page.residue.clone(),
            });
        }
    }
    tiles
}
