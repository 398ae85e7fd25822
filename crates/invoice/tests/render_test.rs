//! Integration tests for the invoice renderer
//!
//! Rendered bytes are reloaded with lopdf and the page content stream is
//! parsed back into text placements (font, size, position, string) so the
//! layout contract can be checked against real output.

use chrono::NaiveDate;
use invoice::{
    Company, Customer, Invoice, InvoiceDocument, InvoiceRenderer, InvoiceStatus, LineItem,
    RenderOptions,
};
use lopdf::Document;
use pdf_core::BuiltinFont;
use pretty_assertions::assert_eq;

/// One drawn string, reconstructed from the content stream
#[derive(Debug, Clone)]
struct Placement {
    font_resource: String,
    font_size: f64,
    x: f64,
    y: f64,
    text: String,
}

/// Parse every text object out of the first page's content stream
fn placements(bytes: &[u8]) -> Vec<Placement> {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let content = doc.get_page_content(pages[&1]).unwrap();
    let content = String::from_utf8_lossy(&content);

    let mut out = Vec::new();
    let mut font_resource = String::new();
    let mut font_size = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for line in content.lines() {
        if let Some(rest) = line.strip_suffix(" Tf") {
            let mut parts = rest.split_whitespace();
            font_resource = parts
                .next()
                .unwrap()
                .trim_start_matches('/')
                .to_string();
            font_size = parts.next().unwrap().parse().unwrap();
        } else if let Some(rest) = line.strip_suffix(" Td") {
            let mut parts = rest.split_whitespace();
            x = parts.next().unwrap().parse().unwrap();
            y = parts.next().unwrap().parse().unwrap();
        } else if let Some(rest) = line.strip_suffix(" Tj") {
            let text = rest
                .trim_start_matches('(')
                .trim_end_matches(')')
                .to_string();
            out.push(Placement {
                font_resource: font_resource.clone(),
                font_size,
                x,
                y,
                text,
            });
        }
    }
    out
}

/// Map font resource names (F1, F2) to their BaseFont names
fn font_map(bytes: &[u8]) -> std::collections::HashMap<String, String> {
    let doc = Document::load_mem(bytes).unwrap();
    let pages = doc.get_pages();
    let page_dict = doc.get_dictionary(pages[&1]).unwrap();
    let resources = page_dict.get(b"Resources").unwrap().as_dict().unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();

    fonts
        .iter()
        .map(|(name, obj)| {
            let font_dict = doc.get_dictionary(obj.as_reference().unwrap()).unwrap();
            let base = font_dict.get(b"BaseFont").unwrap().as_name().unwrap();
            (
                String::from_utf8_lossy(name).to_string(),
                String::from_utf8_lossy(base).to_string(),
            )
        })
        .collect()
}

fn find<'a>(placements: &'a [Placement], text: &str) -> &'a Placement {
    placements
        .iter()
        .find(|p| p.text == text)
        .unwrap_or_else(|| panic!("no placement for {text:?}"))
}

fn consulting_invoice() -> InvoiceDocument {
    InvoiceDocument {
        invoice: Invoice {
            invoice_number: "INV-0007".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
            status: InvoiceStatus::Sent,
            subtotal: 300.0,
            tax: 30.0,
            total: 330.0,
            notes: None,
        },
        company: Company {
            name: "Northwind Consulting".to_string(),
            address: Some("1 Main St".to_string()),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            postal_code: Some("62701".to_string()),
            phone: Some("555-0100".to_string()),
            ..Company::default()
        },
        customer: Customer {
            name: "Jane Doe".to_string(),
            address: Some("9 Elm Ave".to_string()),
            city: Some("Shelbyville".to_string()),
            email: Some("jane@example.com".to_string()),
            ..Customer::default()
        },
        items: vec![LineItem {
            description: "Consulting".to_string(),
            quantity: 2.0,
            unit_price: 150.0,
            amount: 300.0,
        }],
    }
}

// Right edge of the content area; amounts right-align here
const AMOUNT_RIGHT: f64 = 562.0;
const QUANTITY_CENTER: f64 = 327.0;

#[test]
fn test_round_trip_scenario() {
    let bytes = InvoiceRenderer::default().render(&consulting_invoice()).unwrap();
    let placed = placements(&bytes);
    let fonts = font_map(&bytes);

    // Invoice number in the header region, near the top
    let number = find(&placed, "INV-0007");
    assert_eq!(fonts[&number.font_resource], "Helvetica-Bold");
    assert!(number.y > 680.0, "header should sit near the page top");

    // Item amount right-aligned at the amount column edge
    let amount = find(&placed, "$300.00");
    let width = BuiltinFont::Helvetica.text_width_points("$300.00", amount.font_size);
    assert!((amount.x + width - AMOUNT_RIGHT).abs() < 0.5);

    // Bold final total
    let total_value = placed
        .iter()
        .find(|p| p.text == "$330.00")
        .expect("total figure should be drawn");
    assert_eq!(fonts[&total_value.font_resource], "Helvetica-Bold");
    assert_eq!(total_value.font_size, 12.0);

    // Bill To and Due Date never overlap: Due Date starts right of the
    // capped left column
    let bill_to = find(&placed, "Bill To");
    let due_date = find(&placed, "Due Date");
    let bill_to_right =
        bill_to.x + BuiltinFont::HelveticaBold.text_width_points("Bill To", bill_to.font_size);
    assert!(due_date.x > bill_to_right);
}

#[test]
fn test_right_alignment_independent_of_length() {
    let mut short = consulting_invoice();
    short.items[0].amount = 1.0;
    let mut long = consulting_invoice();
    long.items[0].amount = 1000000.0;

    for (document, text) in [(short, "$1.00"), (long, "$1000000.00")] {
        let bytes = InvoiceRenderer::default().render(&document).unwrap();
        let placed = placements(&bytes);
        let p = find(&placed, text);
        let width = BuiltinFont::Helvetica.text_width_points(text, p.font_size);
        assert!(
            (p.x + width - AMOUNT_RIGHT).abs() < 0.5,
            "{text} should end at the column edge"
        );
    }
}

#[test]
fn test_center_alignment_symmetric() {
    for quantity in [2.0, 10.0, 175.0] {
        let mut document = consulting_invoice();
        document.items[0].quantity = quantity;
        let text = format!("{}", quantity as i64);

        let bytes = InvoiceRenderer::default().render(&document).unwrap();
        let placed = placements(&bytes);
        let p = find(&placed, &text);
        let width = BuiltinFont::Helvetica.text_width_points(&text, p.font_size);
        let midpoint = p.x + width / 2.0;
        assert!(
            (midpoint - QUANTITY_CENTER).abs() < 0.5,
            "quantity {text} should straddle the column center"
        );
    }
}

#[test]
fn test_zero_items_still_renders_all_sections() {
    let mut document = consulting_invoice();
    document.items.clear();
    document.invoice.subtotal = 0.0;
    document.invoice.tax = 0.0;
    document.invoice.total = 0.0;

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);

    for text in ["Bill To", "Description", "Quantity", "Unit Price", "Amount", "Subtotal", "Total"] {
        find(&placed, text);
    }
    // Empty table body: header row label is the only Description column text
    assert_eq!(placed.iter().filter(|p| p.text == "Description").count(), 1);
}

#[test]
fn test_empty_optional_fields_emit_no_blank_lines() {
    let mut document = consulting_invoice();
    document.company = Company {
        name: "Acme Corp".to_string(),
        ..Company::default()
    };
    document.customer = Customer {
        name: "Jane Doe".to_string(),
        ..Customer::default()
    };

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);

    assert!(placed.iter().all(|p| !p.text.trim().is_empty()));
    // Customer block is exactly the label and the name
    let bill_to = find(&placed, "Bill To");
    let below_label = placed
        .iter()
        .filter(|p| p.x == 50.0 && p.y < bill_to.y && p.y >= bill_to.y - 30.0)
        .count();
    assert_eq!(below_label, 1);
}

#[test]
fn test_table_cell_cap() {
    let mut document = consulting_invoice();
    document.items[0].description = "x".repeat(120);

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);
    let longest = placed.iter().map(|p| p.text.chars().count()).max().unwrap();
    assert!(longest <= 45);

    let cell = placed
        .iter()
        .find(|p| p.text.starts_with("xxx"))
        .expect("truncated description should still be drawn");
    assert_eq!(cell.text.chars().count(), 45);
}

#[test]
fn test_note_lines_capped() {
    let mut document = consulting_invoice();
    document.invoice.notes = Some(format!("{}\n{}", "n".repeat(200), "thanks"));

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);

    find(&placed, "Notes");
    find(&placed, "thanks");
    let long_line = placed
        .iter()
        .find(|p| p.text.starts_with("nnn"))
        .expect("note line should be drawn");
    assert_eq!(long_line.text.chars().count(), 85);
}

#[test]
fn test_long_left_column_text_stays_clear_of_right_column() {
    let mut document = consulting_invoice();
    document.customer.address = Some("Unit 4400, Building C, Industrial Estate, Far Western Approach Road".to_string());

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);
    let due_date = find(&placed, "Due Date");

    // Everything drawn at the left margin must end before the date column
    for p in placed.iter().filter(|p| p.x == 50.0) {
        let font = if p.font_size >= 12.0 {
            BuiltinFont::HelveticaBold
        } else {
            BuiltinFont::Helvetica
        };
        let right_edge = p.x + font.text_width_points(&p.text, p.font_size);
        assert!(
            right_edge <= due_date.x,
            "left column text {:?} reaches into the right column",
            p.text
        );
    }
}

#[test]
fn test_custom_currency_symbol() {
    let renderer = InvoiceRenderer::new(RenderOptions {
        currency_symbol: "USD ".to_string(),
    });
    let bytes = renderer.render(&consulting_invoice()).unwrap();
    let placed = placements(&bytes);
    find(&placed, "USD 330.00");
}

#[test]
fn test_degenerate_values_render_faithfully() {
    let mut document = consulting_invoice();
    document.items = vec![LineItem {
        description: "Placeholder".to_string(),
        quantity: 0.0,
        unit_price: 0.0,
        amount: 0.0,
    }];

    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);
    find(&placed, "0");
    find(&placed, "$0.00");
}

#[test]
fn test_aggregate_renders_from_json() {
    let json = r#"{
        "invoice": {
            "invoice_number": "INV-0042",
            "issue_date": "2026-05-01",
            "due_date": "2026-05-31",
            "status": "draft",
            "subtotal": 50.0,
            "tax": 5.0,
            "total": 55.0
        },
        "company": { "name": "Acme Corp" },
        "customer": { "name": "Jane Doe" },
        "items": [
            { "description": "Widget", "quantity": 1, "unit_price": 50.0, "amount": 50.0 }
        ]
    }"#;
    let document: InvoiceDocument = serde_json::from_str(json).unwrap();
    let bytes = InvoiceRenderer::default().render(&document).unwrap();
    let placed = placements(&bytes);
    find(&placed, "INV-0042");
    find(&placed, "Widget");
}
