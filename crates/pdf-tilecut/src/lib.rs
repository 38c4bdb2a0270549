pub mod tilecut;
mod assemble;
mod geometry;
mod options;
mod overlay;
mod page;
mod stats;
mod tiling;
mod types;
mod vecfont;

pub use geometry::Rect;
pub use options::*;
pub use overlay::{OverlayConfig, build_overlay};
pub use page::{TilePage, collect_pages, root_pages_id};
pub use stats::calculate_statistics;
pub use tilecut::{
    load_pdf, load_pdf_bytes, save_debug_pdf, save_pdf, save_pdf_bytes, tile_document,
    tile_document_sync,
};
pub use tiling::{cut_page_into_tiles, grid_for_page};
pub use types::*;
pub use vecfont::{CHAR_HEIGHT, index_to_alpha, render_string};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileCutError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Malformed page: {0}")]
    MalformedPage(String),
    #[error("Document structure anchor not found: {0}")]
    MissingAnchor(&'static str),
    #[error("No vector glyph for character {0:?}")]
    UnsupportedGlyph(char),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, TileCutError>;
