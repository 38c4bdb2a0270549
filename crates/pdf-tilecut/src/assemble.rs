//! Document reassembly
//!
//! Commits the derived objects into the document's object arena and repoints
//! the root page tree at the tile pages. Ids are handed out sequentially by
//! the document in insertion order: first the two shared graphics-state
//! wrappers, then one overlay stream per tile, then one page object per tile,
//! so every back-reference resolves to an already-inserted object.

use crate::overlay::{OverlayConfig, build_overlay};
use crate::page::TilePage;
use crate::{Result, TileCutError};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Splice the tile pages into `doc` and rewrite the page tree rooted at
/// `pages_root` to list exactly the tiles, in tiling order.
///
/// Any pre-existing page-tree structure below the root is discarded: the
/// tree is flattened to a single level.
pub(crate) fn assemble(
    doc: &mut Document,
    tiles: &mut [TilePage],
    pages_root: ObjectId,
    config: &OverlayConfig,
) -> Result<()> {
    // Shared graphics-state wrappers, two objects for the whole document.
    // Original content runs bracketed by them so leftover graphics state
    // cannot affect the overlay drawn afterwards.
    let push_id = doc.add_object(Stream::new(Dictionary::new(), b"q".to_vec()));
    let pop_id = doc.add_object(Stream::new(Dictionary::new(), b"Q".to_vec()));
    for tile in tiles.iter_mut() {
        tile.content_ids.insert(0, push_id);
        tile.content_ids.push(pop_id);
    }

    // One overlay stream per tile, appended after the restore so it renders
    // above the original content.
    for tile in tiles.iter_mut() {
        let ops = build_overlay(tile, config)?;
        let overlay_id = doc.add_object(Stream::new(Dictionary::new(), ops.into_bytes()));
        tile.content_ids.push(overlay_id);
    }

    // Tile page objects, in tiling order.
    let mut kids = Vec::with_capacity(tiles.len());
    for tile in tiles.iter_mut() {
        let id = doc.add_object(tile.to_dict(pages_root));
        tile.id = Some(id);
        kids.push(Object::Reference(id));
    }

    // Repoint the root page tree at the tiles.
    let count = kids.len() as i64;
    let root = doc
        .get_object_mut(pages_root)
        .and_then(Object::as_dict_mut)
        .map_err(|_| TileCutError::MissingAnchor("root page tree object"))?;
    root.set("Kids", Object::Array(kids));
    root.set("Count", Object::Integer(count));
    Ok(())
}
