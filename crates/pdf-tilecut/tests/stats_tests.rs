use lopdf::{Dictionary, Document, Object, Stream};
use pdf_tilecut::*;

fn create_test_pdf(page_sizes: &[(f32, f32)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (width, height) in page_sizes {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Real(0.0),
                    Object::Real(0.0),
                    Object::Real(*width),
                    Object::Real(*height),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

#[test]
fn statistics_report_grid_per_page() {
    // One 2x2 page and one page that fits a single tile under A4.
    let doc = create_test_pdf(&[(600.0, 900.0), (200.0, 200.0)]);
    let stats = calculate_statistics(&doc, &TileOptions::default()).unwrap();

    assert_eq!(stats.source_pages, 2);
    assert_eq!(stats.skipped_pages, 0);
    assert_eq!(stats.grids, vec![(2, 2), (1, 1)]);
    assert_eq!(stats.output_tiles, 5);
}

#[test]
fn statistics_count_skipped_pages() {
    let mut doc = create_test_pdf(&[(600.0, 900.0)]);

    // Break the page by removing its MediaBox.
    let page_id = *doc.get_pages().get(&1).unwrap();
    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .unwrap();
    page.remove(b"MediaBox");

    let stats = calculate_statistics(&doc, &TileOptions::default()).unwrap();
    assert_eq!(stats.source_pages, 1);
    assert_eq!(stats.skipped_pages, 1);
    assert_eq!(stats.output_tiles, 0);
}

#[test]
fn statistics_validate_configuration_first() {
    let doc = create_test_pdf(&[(600.0, 900.0)]);
    let options = TileOptions {
        tile_size: TileSize::Custom {
            width_mm: 10.0,
            height_mm: 10.0,
        },
        ..Default::default()
    };
    assert!(matches!(
        calculate_statistics(&doc, &options),
        Err(TileCutError::Config(_))
    ));
}
