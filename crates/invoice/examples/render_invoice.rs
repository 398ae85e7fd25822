//! Render a sample invoice to output/invoice-INV-0007.pdf
//!
//! Run with: cargo run --example render_invoice

use chrono::NaiveDate;
use invoice::{
    Company, Customer, Invoice, InvoiceDocument, InvoiceRenderer, InvoiceStatus, LineItem,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("output")?;

    let document = InvoiceDocument {
        invoice: Invoice {
            invoice_number: "INV-0007".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2026, 3, 1).ok_or("bad date")?,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 31).ok_or("bad date")?,
            status: InvoiceStatus::Sent,
            subtotal: 300.0,
            tax: 30.0,
            total: 330.0,
            notes: Some("Payment due within 30 days.\nThank you for your business!".to_string()),
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
        items: vec![
            LineItem {
                description: "Consulting".to_string(),
                quantity: 2.0,
                unit_price: 150.0,
                amount: 300.0,
            },
        ],
    };

    let renderer = InvoiceRenderer::default();
    let bytes = renderer.render(&document)?;

    let filename = format!("output/{}", InvoiceRenderer::suggested_filename(&document));
    std::fs::write(&filename, &bytes)?;
    println!("Wrote {} ({} bytes)", filename, bytes.len());

    Ok(())
}
