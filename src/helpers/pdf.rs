use lopdf::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfParseError {
    #[error("could not read PDF document: {0}")]
    Load(lopdf::Error),
    #[error("could not extract text from PDF: {0}")]
    Text(lopdf::Error),
}

#[derive(Debug, Clone)]
pub struct ParsedPdf {
    pub text: String,
    pub page_count: i32,
    pub word_count: i32,
}

// Parses the whole document in memory; uploads are capped well below
// anything that would make this a problem.
pub fn parse(bytes: &[u8]) -> Result<ParsedPdf, PdfParseError> {
    let document = Document::load_mem(bytes).map_err(PdfParseError::Load)?;
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    let text = document.extract_text(&pages).map_err(PdfParseError::Text)?;
    let word_count = text.split_whitespace().count() as i32;

    Ok(ParsedPdf {
        text,
        page_count: pages.len() as i32,
        word_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    fn sample_pdf(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("failed to encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("failed to serialize PDF");
        bytes
    }

    #[test]
    fn extracts_text_and_counts() {
        let bytes = sample_pdf("Hello exam revision notes");
        let parsed = parse(&bytes).unwrap();

        assert_eq!(parsed.page_count, 1);
        assert_eq!(parsed.word_count, 4);
        assert!(parsed.text.contains("Hello exam revision notes"));
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!(parse(b"definitely not a pdf").is_err());
    }
}
