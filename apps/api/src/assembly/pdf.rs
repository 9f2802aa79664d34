//! PDF serialization of laid-out pages via `lopdf`.
//!
//! Fonts are the base-14 Times faces with WinAnsiEncoding, so nothing is
//! embedded. The output carries no timestamps or document IDs: identical
//! layouts serialize to identical bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::assembly::encoding::encode_win_ansi;
use crate::assembly::font_metrics::{FontFace, PageConfig};
use crate::assembly::layout::PageLayout;
use crate::assembly::RenderError;

const PRODUCER: &str = concat!("coverletter ", env!("CARGO_PKG_VERSION"));

/// Serializes pages into a complete PDF document.
pub fn render_pdf(
    pages: &[PageLayout],
    config: &PageConfig,
    title: &str,
) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_ids: Vec<(FontFace, lopdf::ObjectId)> = [FontFace::TimesRoman, FontFace::TimesBold]
        .into_iter()
        .map(|face| {
            let id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            (face, id)
        })
        .collect();

    let mut font_dict = lopdf::Dictionary::new();
    for (face, id) in &font_ids {
        font_dict.set(face.resource_name(), Object::Reference(*id));
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => font_dict,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page_operations(page),
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::Pdf(format!("content stream encoding failed: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(config.width_pt),
                Object::Real(config.height_pt),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(output)
}

/// One text object per page; `Tf` is only re-issued when the face changes.
fn page_operations(page: &PageLayout) -> Vec<Operation> {
    let mut operations = vec![Operation::new("BT", vec![])];
    let mut active: Option<(FontFace, f32)> = None;

    for run in &page.runs {
        if active != Some((run.face, run.font_size_pt)) {
            operations.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(run.face.resource_name().as_bytes().to_vec()),
                    Object::Real(run.font_size_pt),
                ],
            ));
            active = Some((run.face, run.font_size_pt));
        }
        operations.push(Operation::new(
            "Tm",
            vec![
                Object::Integer(1),
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(1),
                Object::Real(run.x),
                Object::Real(run.y),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(run.bytes.clone(), StringFormat::Literal)],
        ));
    }

    operations.push(Operation::new("ET", vec![]));
    operations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::font_metrics::letter_page_config;
    use crate::assembly::layout::PlacedRun;

    fn run(face: FontFace, text: &str) -> PlacedRun {
        PlacedRun {
            x: 56.0,
            y: 700.0,
            face,
            font_size_pt: 11.4,
            bytes: text.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_tf_only_on_face_change() {
        let page = PageLayout {
            runs: vec![
                run(FontFace::TimesRoman, "a"),
                run(FontFace::TimesRoman, "b"),
                run(FontFace::TimesBold, "c"),
                run(FontFace::TimesRoman, "d"),
            ],
        };
        let ops = page_operations(&page);
        let tf = ops.iter().filter(|op| op.operator == "Tf").count();
        let tj = ops.iter().filter(|op| op.operator == "Tj").count();
        assert_eq!(tf, 3);
        assert_eq!(tj, 4);
        assert_eq!(ops.first().unwrap().operator, "BT");
        assert_eq!(ops.last().unwrap().operator, "ET");
    }

    #[test]
    fn test_render_pdf_loads_back_with_page_count_and_fonts() {
        let config = letter_page_config();
        let pages = vec![
            PageLayout {
                runs: vec![run(FontFace::TimesRoman, "Hello")],
            },
            PageLayout {
                runs: vec![run(FontFace::TimesBold, "World")],
            },
        ];
        let bytes = render_pdf(&pages, &config, "Test Letter").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);

        let base_fonts: Vec<Vec<u8>> = doc
            .objects
            .values()
            .filter_map(|o| o.as_dict().ok())
            .filter(|d| d.get(b"Type").and_then(Object::as_name).ok() == Some(b"Font".as_slice()))
            .filter_map(|d| d.get(b"BaseFont").ok())
            .filter_map(|o| o.as_name().ok().map(<[u8]>::to_vec))
            .collect();
        assert!(base_fonts.contains(&b"Times-Roman".to_vec()));
        assert!(base_fonts.contains(&b"Times-Bold".to_vec()));
    }

    #[test]
    fn test_render_pdf_is_deterministic() {
        let config = letter_page_config();
        let pages = vec![PageLayout {
            runs: vec![run(FontFace::TimesRoman, "Same")],
        }];
        let first = render_pdf(&pages, &config, "T").unwrap();
        let second = render_pdf(&pages, &config, "T").unwrap();
        assert_eq!(first, second);
    }
}
