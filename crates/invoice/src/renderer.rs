//! Fixed-coordinate invoice renderer
//!
//! Draws the aggregate onto a single US Letter page with a running vertical
//! cursor: header (company + invoice number), bill-to (customer + dates),
//! item table, then notes and totals side by side.

use crate::format::{format_currency, format_date, format_quantity, truncate};
use crate::layout::*;
use crate::model::InvoiceDocument;
use crate::{RenderError, Result};
use log::debug;
use pdf_core::{Align, BuiltinFont, Color, ImageScaleMode, PdfDocument};

/// Rendering options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Currency glyph prefixed to every amount
    pub currency_symbol: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

/// Renders an invoice aggregate to PDF bytes
///
/// Stateless between calls; each render builds and drops its own document.
#[derive(Debug, Clone, Default)]
pub struct InvoiceRenderer {
    options: RenderOptions,
}

impl InvoiceRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Suggested download filename for the rendered bytes
    pub fn suggested_filename(document: &InvoiceDocument) -> String {
        format!("invoice-{}.pdf", document.invoice.invoice_number)
    }

    /// Render the aggregate to PDF bytes
    ///
    /// Fails when the invoice number is blank or the logo bytes are not a
    /// decodable JPEG/PNG. Every other empty optional field is omitted from
    /// the output. Content past the bottom margin clips silently.
    pub fn render(&self, document: &InvoiceDocument) -> Result<Vec<u8>> {
        let invoice = &document.invoice;
        if invoice.invoice_number.trim().is_empty() {
            return Err(RenderError::MissingInvoiceNumber);
        }
        debug!(
            "rendering invoice {} ({} items)",
            invoice.invoice_number,
            document.items.len()
        );

        let mut pdf = PdfDocument::new(PAGE_WIDTH, PAGE_HEIGHT);
        let currency = self.options.currency_symbol.as_str();

        let mut y = self.draw_header(&mut pdf, document)?;
        y = self.draw_bill_to(&mut pdf, document, y);
        y = self.draw_item_table(&mut pdf, document, y, currency);
        self.draw_footer(&mut pdf, document, y, currency);

        Ok(pdf.to_bytes()?)
    }

    /// Company identity on the left (logo, name, address), invoice number on
    /// the right. Returns the cursor position below the header rule.
    fn draw_header(&self, pdf: &mut PdfDocument, document: &InvoiceDocument) -> Result<f64> {
        let company = &document.company;
        let invoice = &document.invoice;

        let mut left_x = MARGIN;
        let mut logo_bottom = MARGIN;
        if let Some(logo) = &company.logo {
            let (logo_width, logo_height) = pdf
                .insert_image(logo, MARGIN, MARGIN, LOGO_BOX, LOGO_BOX, ImageScaleMode::FitBox)
                .map_err(|e| RenderError::Logo(e.to_string()))?;
            left_x = MARGIN + logo_width + LOGO_GAP;
            logo_bottom = MARGIN + logo_height;
        }

        // Left column: company name, then address lines in gray
        let mut left_y = MARGIN + 20.0;
        pdf.set_font(BuiltinFont::HelveticaBold, COMPANY_NAME_SIZE);
        pdf.set_text_color(Color::black());
        let name = truncate(&company.name, MAX_TEXT_CHARS);
        pdf.insert_text(fit_width(pdf, name, LEFT_COLUMN_RIGHT - left_x), left_x, left_y, Align::Left);
        left_y += 20.0;

        pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
        pdf.set_text_color(Color::gray());
        for line in company.address_lines() {
            let line = truncate(&line, MAX_TEXT_CHARS);
            pdf.insert_text(fit_width(pdf, line, LEFT_COLUMN_RIGHT - left_x), left_x, left_y, Align::Left);
            left_y += LINE_HEIGHT;
        }

        // Right column: invoice number under its label
        let mut right_y = MARGIN + 14.0;
        pdf.insert_text("Invoice Number", CONTENT_RIGHT, right_y, Align::Right);
        right_y += 18.0;
        pdf.set_font(BuiltinFont::HelveticaBold, INVOICE_NUMBER_SIZE);
        pdf.set_text_color(Color::black());
        let number = truncate(&invoice.invoice_number, MAX_TEXT_CHARS);
        pdf.insert_text(number, CONTENT_RIGHT, right_y, Align::Right);
        right_y += LINE_HEIGHT;

        let y = left_y.max(right_y).max(logo_bottom) + 10.0;
        pdf.draw_rule(MARGIN, CONTENT_RIGHT, y, RULE_THICKNESS);
        Ok(y + 24.0)
    }

    /// Customer block on the left, issue/due dates on the right
    fn draw_bill_to(&self, pdf: &mut PdfDocument, document: &InvoiceDocument, top: f64) -> f64 {
        let customer = &document.customer;
        let invoice = &document.invoice;
        let left_width = LEFT_COLUMN_RIGHT - MARGIN;

        let mut left_y = top;
        pdf.set_font(BuiltinFont::HelveticaBold, BODY_SIZE);
        pdf.set_text_color(Color::gray());
        pdf.insert_text("Bill To", MARGIN, left_y, Align::Left);
        left_y += LINE_HEIGHT;

        pdf.set_text_color(Color::black());
        let name = truncate(&customer.name, MAX_TEXT_CHARS);
        pdf.insert_text(fit_width(pdf, name, left_width), MARGIN, left_y, Align::Left);
        left_y += LINE_HEIGHT;

        pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
        pdf.set_text_color(Color::gray());
        for line in customer.address_lines() {
            let line = truncate(&line, MAX_TEXT_CHARS);
            pdf.insert_text(fit_width(pdf, line, left_width), MARGIN, left_y, Align::Left);
            left_y += LINE_HEIGHT;
        }

        let mut right_y = top;
        for (label, date) in [
            ("Issue Date", invoice.issue_date),
            ("Due Date", invoice.due_date),
        ] {
            pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
            pdf.set_text_color(Color::gray());
            pdf.insert_text(label, CONTENT_RIGHT, right_y, Align::Right);
            right_y += LINE_HEIGHT;
            pdf.set_font(BuiltinFont::HelveticaBold, BODY_SIZE);
            pdf.set_text_color(Color::black());
            pdf.insert_text(&format_date(date), CONTENT_RIGHT, right_y, Align::Right);
            right_y += LINE_HEIGHT + 4.0;
        }

        let y = left_y.max(right_y) + 6.0;
        pdf.draw_rule(MARGIN, CONTENT_RIGHT, y, RULE_THICKNESS);
        y + 24.0
    }

    /// Four-column item table; a zero-item invoice renders header and footer
    /// rules with nothing between them
    fn draw_item_table(
        &self,
        pdf: &mut PdfDocument,
        document: &InvoiceDocument,
        top: f64,
        currency: &str,
    ) -> f64 {
        let mut y = top;

        pdf.set_font(BuiltinFont::HelveticaBold, BODY_SIZE);
        pdf.set_text_color(Color::black());
        pdf.insert_text("Description", COL_DESCRIPTION_X, y, Align::Left);
        pdf.insert_text("Quantity", COL_QUANTITY_CENTER, y, Align::Center);
        pdf.insert_text("Unit Price", COL_UNIT_PRICE_RIGHT, y, Align::Right);
        pdf.insert_text("Amount", COL_AMOUNT_RIGHT, y, Align::Right);
        pdf.draw_rule(MARGIN, CONTENT_RIGHT, y + 6.0, HEAVY_RULE_THICKNESS);
        y += ROW_HEIGHT;

        pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
        for item in &document.items {
            pdf.insert_text(
                truncate(&item.description, MAX_CELL_CHARS),
                COL_DESCRIPTION_X,
                y,
                Align::Left,
            );
            pdf.insert_text(
                truncate(&format_quantity(item.quantity), MAX_CELL_CHARS),
                COL_QUANTITY_CENTER,
                y,
                Align::Center,
            );
            pdf.insert_text(
                truncate(&format_currency(currency, item.unit_price), MAX_CELL_CHARS),
                COL_UNIT_PRICE_RIGHT,
                y,
                Align::Right,
            );
            pdf.insert_text(
                truncate(&format_currency(currency, item.amount), MAX_CELL_CHARS),
                COL_AMOUNT_RIGHT,
                y,
                Align::Right,
            );
            pdf.draw_rule(MARGIN, CONTENT_RIGHT, y + 6.0, RULE_THICKNESS);
            y += ROW_HEIGHT;
        }

        y + 10.0
    }

    /// Notes on the left, totals stack on the right, side by side
    fn draw_footer(
        &self,
        pdf: &mut PdfDocument,
        document: &InvoiceDocument,
        top: f64,
        currency: &str,
    ) {
        let invoice = &document.invoice;

        // Totals: Subtotal and Tax rows, a rule, then the bold Total
        let mut y = top;
        pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
        pdf.set_text_color(Color::black());
        for (label, amount) in [("Subtotal", invoice.subtotal), ("Tax", invoice.tax)] {
            pdf.insert_text(label, TOTALS_LABEL_X, y, Align::Left);
            pdf.insert_text(
                &format_currency(currency, amount),
                CONTENT_RIGHT,
                y,
                Align::Right,
            );
            y += LINE_HEIGHT;
        }
        pdf.draw_rule(TOTALS_LABEL_X, CONTENT_RIGHT, y - 6.0, RULE_THICKNESS);
        y += 4.0;
        pdf.set_font(BuiltinFont::HelveticaBold, TOTAL_SIZE);
        pdf.insert_text("Total", TOTALS_LABEL_X, y, Align::Left);
        pdf.insert_text(
            &format_currency(currency, invoice.total),
            CONTENT_RIGHT,
            y,
            Align::Right,
        );

        // Notes, when present, occupy the left column of the same region
        let notes = match &invoice.notes {
            Some(notes) if !notes.trim().is_empty() => notes,
            _ => return,
        };
        let mut y = top;
        pdf.set_font(BuiltinFont::HelveticaBold, BODY_SIZE);
        pdf.insert_text("Notes", MARGIN, y, Align::Left);
        y += LINE_HEIGHT;

        pdf.set_font(BuiltinFont::Helvetica, BODY_SIZE);
        pdf.set_text_color(Color::gray());
        for line in notes.lines() {
            pdf.insert_text(truncate(line, MAX_NOTE_CHARS), MARGIN, y, Align::Left);
            y += LINE_HEIGHT;
        }
    }
}

/// Trim trailing chars until the text fits within max_width at the current
/// font and size
fn fit_width<'a>(pdf: &PdfDocument, text: &'a str, max_width: f64) -> &'a str {
    let mut end = text.len();
    while end > 0 && pdf.text_width(&text[..end]) > max_width {
        end = text[..end]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
    }
    &text[..end]
}
