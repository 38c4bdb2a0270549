//! Page object model
//!
//! Maps between a page's `lopdf::Dictionary` and the structured [`TilePage`],
//! preserving every entry it does not understand as residue so that fonts,
//! resources and annotations survive the rewrite unmodified.

use crate::geometry::Rect;
use crate::{Result, TileCutError};
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Dictionary entries lifted into [`TilePage`] fields. `ArtBox` is stripped
/// but never re-emitted: an art box computed for the source page would be
/// wrong for every tile.
const EXTRACTED_KEYS: [&[u8]; 7] = [
    b"MediaBox", b"CropBox", b"BleedBox", b"TrimBox", b"ArtBox", b"Contents", b"Parent",
];

/// One source page or derived tile page
#[derive(Debug, Clone, PartialEq)]
pub struct TilePage {
    /// Object id in the rewritten document, assigned by the reassembler
    pub id: Option<ObjectId>,
    /// 1-based original page ordinal, stable across tiling
    pub number: u32,
    /// Zero-based grid column, meaningful only for derived tiles
    pub tile_x: u32,
    /// Zero-based grid row (row 0 at the bottom), meaningful only for derived tiles
    pub tile_y: u32,
    pub media_box: Rect,
    pub crop_box: Rect,
    pub bleed_box: Rect,
    pub trim_box: Rect,
    /// Content stream references, in rendering order
    pub content_ids: Vec<ObjectId>,
    /// Unrecognized dictionary entries, re-attached verbatim on serialization
    pub residue: Dictionary,
}

impl TilePage {
    /// Extract a page from its object dictionary.
    ///
    /// The box defaulting chain follows the page-box semantics: a missing
    /// crop box falls back to the media box, missing bleed and trim boxes
    /// fall back to the crop box. Every box must be rectangle-valid after
    /// defaulting.
    pub fn from_dict(number: u32, dict: &Dictionary) -> Result<TilePage> {
        let content_ids = content_references(number, dict)?;

        let media_box = box_entry(number, dict, b"MediaBox")?
            .ok_or_else(|| TileCutError::MalformedPage(format!("page {number} has no /MediaBox")))?;
        let crop_box = box_entry(number, dict, b"CropBox")?.unwrap_or(media_box);
        let bleed_box = box_entry(number, dict, b"BleedBox")?.unwrap_or(crop_box);
        let trim_box = box_entry(number, dict, b"TrimBox")?.unwrap_or(crop_box);

        let mut residue = dict.clone();
        for key in EXTRACTED_KEYS {
            residue.remove(key);
        }

        Ok(TilePage {
            id: None,
            number,
            tile_x: 0,
            tile_y: 0,
            media_box,
            crop_box,
            bleed_box,
            trim_box,
            content_ids,
            residue,
        })
    }

    /// Serialize back to a page dictionary under the given page-tree parent.
    ///
    /// All four boxes are emitted explicitly, even when they defaulted to
    /// identical values, followed by the preserved residue entries.
    pub fn to_dict(&self, parent: ObjectId) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("MediaBox", box_array(self.media_box));
        dict.set("CropBox", box_array(self.crop_box));
        dict.set("BleedBox", box_array(self.bleed_box));
        dict.set("TrimBox", box_array(self.trim_box));
        dict.set(
            "Contents",
            Object::Array(
                self.content_ids
                    .iter()
                    .map(|id| Object::Reference(*id))
                    .collect(),
            ),
        );
        dict.set("Parent", Object::Reference(parent));
        for (key, value) in self.residue.iter() {
            dict.set(key.clone(), value.clone());
        }
        dict
    }
}

/// Find the root page-tree node: trailer `/Root` → catalog `/Pages`.
pub fn root_pages_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| TileCutError::MissingAnchor("trailer /Root reference"))?;
    let catalog = doc
        .get_object(catalog_id)
        .and_then(Object::as_dict)
        .map_err(|_| TileCutError::MissingAnchor("document catalog"))?;
    catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|_| TileCutError::MissingAnchor("catalog /Pages reference"))
}

/// Extract all pages in page-number order, best-effort.
///
/// A page that fails extraction is logged and skipped; one bad page never
/// aborts the run.
pub fn collect_pages(doc: &Document) -> Vec<TilePage> {
    let mut pages = Vec::new();
    for (number, object_id) in doc.get_pages() {
        let dict = match doc.get_object(object_id).and_then(Object::as_dict) {
            Ok(dict) => dict,
            Err(err) => {
                log::warn!("skipping page {number}: {err}");
                continue;
            }
        };
        match TilePage::from_dict(number, dict) {
            Ok(page) => pages.push(page),
            Err(err) => log::warn!("skipping {err}"),
        }
    }
    pages
}

fn content_references(number: u32, dict: &Dictionary) -> Result<Vec<ObjectId>> {
    let ids = match dict.get(b"Contents") {
        Ok(Object::Reference(id)) => vec![*id],
        Ok(Object::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_reference().ok())
            .collect(),
        _ => Vec::new(),
    };
    if ids.is_empty() {
        return Err(TileCutError::MalformedPage(format!(
            "page {number} has no /Contents reference"
        )));
    }
    Ok(ids)
}

fn box_entry(number: u32, dict: &Dictionary, key: &[u8]) -> Result<Option<Rect>> {
    let Ok(value) = dict.get(key) else {
        return Ok(None);
    };
    let name = String::from_utf8_lossy(key).into_owned();
    let malformed =
        |why: &str| TileCutError::MalformedPage(format!("page {number} has {why} /{name}"));

    let items = value.as_array().map_err(|_| malformed("a non-array"))?;
    if items.len() != 4 {
        return Err(malformed("a wrong-sized"));
    }
    let mut corners = [0.0f32; 4];
    for (slot, item) in corners.iter_mut().zip(items) {
        *slot = as_number(item).ok_or_else(|| malformed("a non-numeric"))?;
    }
    let rect = Rect::new(corners[0], corners[1], corners[2], corners[3]);
    if !rect.is_valid() {
        return Err(malformed("an invalid"));
    }
    Ok(Some(rect))
}

fn as_number(object: &Object) -> Option<f32> {
    match object {
        Object::Integer(value) => Some(*value as f32),
        Object::Real(value) => Some(*value),
        _ => None,
    }
}

fn box_array(rect: Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.llx),
        Object::Real(rect.lly),
        Object::Real(rect.urx),
        Object::Real(rect.ury),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_dict(entries: Vec<(&str, Object)>) -> Dictionary {
        let mut dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Contents", Object::Reference((7, 0))),
        ]);
        for (key, value) in entries {
            dict.set(key, value);
        }
        dict
    }

    fn box_object(llx: f32, lly: f32, urx: f32, ury: f32) -> Object {
        box_array(Rect::new(llx, lly, urx, ury))
    }

    #[test]
    fn media_box_only_defaults_every_box() {
        let dict = page_dict(vec![("MediaBox", box_object(0.0, 0.0, 612.0, 792.0))]);
        let page = TilePage::from_dict(1, &dict).unwrap();
        let media = Rect::new(0.0, 0.0, 612.0, 792.0);
        assert_eq!(page.media_box, media);
        assert_eq!(page.crop_box, media);
        assert_eq!(page.bleed_box, media);
        assert_eq!(page.trim_box, media);
    }

    #[test]
    fn bleed_and_trim_default_to_crop() {
        let dict = page_dict(vec![
            ("MediaBox", box_object(0.0, 0.0, 612.0, 792.0)),
            ("CropBox", box_object(10.0, 10.0, 600.0, 780.0)),
        ]);
        let page = TilePage::from_dict(1, &dict).unwrap();
        let crop = Rect::new(10.0, 10.0, 600.0, 780.0);
        assert_eq!(page.crop_box, crop);
        assert_eq!(page.bleed_box, crop);
        assert_eq!(page.trim_box, crop);
    }

    #[test]
    fn missing_media_box_is_malformed() {
        let dict = page_dict(vec![]);
        let err = TilePage::from_dict(3, &dict).unwrap_err();
        assert!(matches!(err, TileCutError::MalformedPage(_)));
        assert!(err.to_string().contains("page 3"));
    }

    #[test]
    fn missing_contents_is_malformed() {
        let mut dict = page_dict(vec![("MediaBox", box_object(0.0, 0.0, 612.0, 792.0))]);
        dict.remove(b"Contents");
        assert!(matches!(
            TilePage::from_dict(1, &dict),
            Err(TileCutError::MalformedPage(_))
        ));
    }

    #[test]
    fn swapped_corners_are_malformed() {
        let dict = page_dict(vec![("MediaBox", box_object(612.0, 0.0, 0.0, 792.0))]);
        assert!(matches!(
            TilePage::from_dict(1, &dict),
            Err(TileCutError::MalformedPage(_))
        ));
    }

    #[test]
    fn contents_array_collects_every_reference() {
        let dict = page_dict(vec![
            ("MediaBox", box_object(0.0, 0.0, 612.0, 792.0)),
            (
                "Contents",
                Object::Array(vec![
                    Object::Reference((7, 0)),
                    Object::Reference((9, 0)),
                ]),
            ),
        ]);
        let page = TilePage::from_dict(1, &dict).unwrap();
        assert_eq!(page.content_ids, vec![(7, 0), (9, 0)]);
    }

    #[test]
    fn residue_survives_a_round_trip() {
        let dict = page_dict(vec![
            ("MediaBox", box_object(0.0, 0.0, 612.0, 792.0)),
            ("ArtBox", box_object(0.0, 0.0, 612.0, 792.0)),
            ("Rotate", Object::Integer(90)),
            ("Parent", Object::Reference((2, 0))),
        ]);
        let page = TilePage::from_dict(1, &dict).unwrap();
        assert!(page.residue.has(b"Rotate"));
        assert!(page.residue.has(b"Type"));
        assert!(!page.residue.has(b"ArtBox"));
        assert!(!page.residue.has(b"Parent"));

        let out = page.to_dict((42, 0));
        assert_eq!(out.get(b"Rotate").unwrap(), &Object::Integer(90));
        assert_eq!(out.get(b"Parent").unwrap(), &Object::Reference((42, 0)));
        assert!(out.has(b"MediaBox"));
        assert!(out.has(b"CropBox"));
        assert!(out.has(b"BleedBox"));
        assert!(out.has(b"TrimBox"));
        assert!(!out.has(b"ArtBox"));
    }

    #[test]
    fn integer_box_coordinates_are_accepted() {
        let dict = page_dict(vec![(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ]),
        )]);
        let page = TilePage::from_dict(1, &dict).unwrap();
        assert_eq!(page.media_box, Rect::new(0.0, 0.0, 612.0, 792.0));
    }
}
