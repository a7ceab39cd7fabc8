//! PDF text extraction adapter
//!
//! Converts an uploaded PDF into plain text for the simplification
//! flow. Pages are walked in ascending order; text runs on a page are
//! joined with a single space, and pages are joined with a newline.
//!
//! Uses lopdf content-stream decoding with UTF-8, UTF-16BE and Latin-1
//! fallback. Every failure is a recoverable [`ExtractionError`] so the
//! caller can offer the manual paste path instead.

use lopdf::{Document, Object, ObjectId};

use crate::error::ExtractionError;

/// Explicit upload ceiling; the UI advertises the same limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The only MIME type accepted at the upload boundary.
pub const PDF_MIME: &str = "application/pdf";

/// Cheap magic-byte check, used before attempting a full parse.
pub fn is_pdf(data: &[u8]) -> bool {
    data.len() >= 5 && &data[0..5] == b"%PDF-"
}

/// Extract page-ordered text from a PDF.
///
/// Output is one line per page (trailing newline included). Empty
/// extracted text is an error: scanned-image PDFs with no text layer
/// must not silently produce an empty prompt downstream.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(ExtractionError::TooLarge(MAX_UPLOAD_BYTES / (1024 * 1024)));
    }
    if !is_pdf(data) {
        return Err(ExtractionError::NotPdf);
    }

    let doc = Document::load_mem(data).map_err(|e| ExtractionError::Parse(e.to_string()))?;
    if doc.trailer.get(b"Encrypt").is_ok() {
        return Err(ExtractionError::Encrypted);
    }

    let mut out = String::new();
    // get_pages returns a BTreeMap keyed by page number, so iteration
    // is already in ascending page order starting at 1.
    for (_, &page_id) in doc.get_pages().iter() {
        out.push_str(&page_text(&doc, page_id));
        out.push('\n');
    }

    if out.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(out)
}

/// Collect the text runs of one page, joined with single spaces.
fn page_text(doc: &Document, page_id: ObjectId) -> String {
    let mut runs: Vec<String> = Vec::new();

    if let Ok(content) = doc.get_page_content(page_id) {
        if let Ok(operations) = lopdf::content::Content::decode(&content) {
            for op in operations.operations {
                match op.operator.as_str() {
                    // Text showing operators
                    "Tj" | "TJ" | "'" | "\"" => {
                        for operand in &op.operands {
                            if let Some(text) = operand_text(operand) {
                                if !text.is_empty() {
                                    runs.push(text);
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    runs.join(" ")
}

fn operand_text(operand: &Object) -> Option<String> {
    match operand {
        Object::String(bytes, _) => Some(decode_string(bytes)),
        Object::Array(items) => {
            let mut text = String::new();
            for item in items {
                match item {
                    Object::String(bytes, _) => text.push_str(&decode_string(bytes)),
                    // Large negative TJ adjustments are word gaps
                    Object::Integer(n) if *n < -100 => text.push(' '),
                    Object::Real(n) if *n < -100.0 => text.push(' '),
                    _ => {}
                }
            }
            Some(text)
        }
        _ => None,
    }
}

/// Decode a PDF string: UTF-8 first, then UTF-16BE (BOM-prefixed),
/// then Latin-1 as the last resort.
fn decode_string(bytes: &[u8]) -> String {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        if let Ok(s) = String::from_utf16(&units) {
            return s;
        }
    }
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Dictionary, Stream};
    use pretty_assertions::assert_eq;

    /// Build an in-memory PDF whose page N shows the Nth entry of
    /// `page_texts` as a single text run.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let mut page_ids = Vec::new();

        for text in page_texts {
            let content = format!("BT /F1 12 Tf 50 700 Td ({}) Tj ET", text);
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            );
            let page_id = doc.add_object(page_dict);
            page_ids.push(Object::Reference(page_id));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(page_texts.len() as i64));
        pages_dict.set("Kids", Object::Array(page_ids));
        doc.objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog_dict = Dictionary::new();
        catalog_dict.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog_dict.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(catalog_dict);

        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_pages_join_with_newlines_in_order() {
        let pdf = build_pdf(&["P1", "P2", "P3"]);
        assert_eq!(extract_text(&pdf).unwrap(), "P1\nP2\nP3\n");
    }

    #[test]
    fn test_single_page_keeps_trailing_newline() {
        let pdf = build_pdf(&["Agreement text"]);
        assert_eq!(extract_text(&pdf).unwrap(), "Agreement text\n");
    }

    #[test]
    fn test_non_pdf_bytes_rejected() {
        assert_eq!(
            extract_text(b"hello, not a pdf"),
            Err(ExtractionError::NotPdf)
        );
    }

    #[test]
    fn test_truncated_pdf_is_a_parse_error() {
        let mut pdf = build_pdf(&["P1"]);
        pdf.truncate(40);
        assert!(matches!(
            extract_text(&pdf),
            Err(ExtractionError::Parse(_))
        ));
    }

    #[test]
    fn test_oversized_input_rejected_before_parsing() {
        let mut data = vec![0u8; MAX_UPLOAD_BYTES + 1];
        data[..5].copy_from_slice(b"%PDF-");
        assert_eq!(extract_text(&data), Err(ExtractionError::TooLarge(10)));
    }

    #[test]
    fn test_textless_pdf_is_an_error() {
        let pdf = build_pdf(&[""]);
        assert_eq!(extract_text(&pdf), Err(ExtractionError::NoText));
    }

    #[test]
    fn test_utf16be_strings_decode() {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in "Señor".encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        assert_eq!(decode_string(&bytes), "Señor");
    }

    #[test]
    fn test_tj_array_kerning_becomes_space() {
        let operand = Object::Array(vec![
            Object::String(b"Hello".to_vec(), lopdf::StringFormat::Literal),
            Object::Integer(-250),
            Object::String(b"World".to_vec(), lopdf::StringFormat::Literal),
        ]);
        assert_eq!(operand_text(&operand), Some("Hello World".to_string()));
    }

    #[test]
    fn test_is_pdf_magic_bytes() {
        assert!(is_pdf(b"%PDF-1.7 trailing"));
        assert!(!is_pdf(b"%PDX-1.7"));
        assert!(!is_pdf(b""));
    }
}
