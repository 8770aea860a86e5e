use pdf_template_server::generate::composer::{
    render, ComposedDocument, ComposedLine, ComposedSection,
};
use pdf_template_server::template::models::Alignment;

fn line(label: &str, value: &str, alignment: Alignment) -> ComposedLine {
    ComposedLine {
        label: label.to_string(),
        value: value.to_string(),
        alignment,
    }
}

fn salary_slip() -> ComposedDocument {
    ComposedDocument {
        sections: vec![
            ComposedSection {
                title: "Header".to_string(),
                lines: vec![
                    line("Company Name", "ABC Corporation", Alignment::Center),
                    line("Employee Name", "Alice Johnson", Alignment::Left),
                    line("Pay Period", "January 2025", Alignment::Right),
                ],
            },
            ComposedSection {
                title: "Body".to_string(),
                lines: vec![line("Basic Pay", "5000 USD", Alignment::Left)],
            },
            ComposedSection {
                title: "Footer".to_string(),
                lines: vec![line("Note", "This is a computer-generated document.", Alignment::Center)],
            },
        ],
    }
}

#[test]
fn test_render_produces_pdf_bytes() {
    let bytes = render(&salary_slip()).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-1.5"));
}

#[test]
fn test_render_is_deterministic() {
    let first = render(&salary_slip()).unwrap();
    let second = render(&salary_slip()).unwrap();
    assert_eq!(first, second, "identical input must give identical bytes");
}

#[test]
fn test_different_values_produce_different_documents() {
    let first = render(&salary_slip()).unwrap();

    let mut changed = salary_slip();
    changed.sections[1].lines[0].value = "6000 USD".to_string();
    let second = render(&changed).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_empty_document_renders_placeholder_page() {
    let bytes = render(&ComposedDocument::default()).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);

    // The placeholder text lands in the page content stream
    let page_id = *doc.get_pages().get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let decoded = lopdf::content::Content::decode(&content).unwrap();
    let text: Vec<u8> = decoded
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .flat_map(|op| match &op.operands[0] {
            lopdf::Object::String(bytes, _) => bytes.clone(),
            _ => Vec::new(),
        })
        .collect();
    assert_eq!(text, b"No content to display");
}

#[test]
fn test_sections_with_no_lines_are_skipped() {
    let document = ComposedDocument {
        sections: vec![
            ComposedSection {
                title: "Header".to_string(),
                lines: vec![],
            },
            ComposedSection {
                title: "Body".to_string(),
                lines: vec![line("Amount", "99 USD", Alignment::Right)],
            },
        ],
    };
    let bytes = render(&document).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    let page_id = *doc.get_pages().get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let decoded = lopdf::content::Content::decode(&content).unwrap();
    let headings: Vec<Vec<u8>> = decoded
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match &op.operands[0] {
            lopdf::Object::String(bytes, _) => Some(bytes.clone()),
            _ => None,
        })
        .collect();

    assert!(headings.contains(&b"Body".to_vec()));
    assert!(!headings.contains(&b"Header".to_vec()));
}

#[test]
fn test_long_document_flows_onto_multiple_pages() {
    let lines: Vec<ComposedLine> = (0..120)
        .map(|i| line(&format!("Field {}", i), "some value", Alignment::Left))
        .collect();
    let document = ComposedDocument {
        sections: vec![ComposedSection {
            title: "Body".to_string(),
            lines,
        }],
    };

    let bytes = render(&document).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().len() > 1);
}

#[test]
fn test_long_value_wraps_instead_of_overflowing() {
    let long_value = "word ".repeat(200);
    let document = ComposedDocument {
        sections: vec![ComposedSection {
            title: "Body".to_string(),
            lines: vec![line("Description", long_value.trim(), Alignment::Left)],
        }],
    };

    let bytes = render(&document).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    let page_id = *doc.get_pages().get(&1).unwrap();
    let content = doc.get_page_content(page_id).unwrap();
    let decoded = lopdf::content::Content::decode(&content).unwrap();

    // More than one text line means the value wrapped
    let line_count = decoded
        .operations
        .iter()
        .filter(|op| op.operator == "BT")
        .count();
    assert!(line_count > 2);
}

#[test]
fn test_non_latin_text_is_replaced_not_fatal() {
    let document = ComposedDocument {
        sections: vec![ComposedSection {
            title: "Body".to_string(),
            lines: vec![line("Name", "Алиса 你好", Alignment::Left)],
        }],
    };
    let bytes = render(&document).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
