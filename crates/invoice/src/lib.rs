//! Invoice Document Renderer
//!
//! This crate turns a fully-joined invoice aggregate (invoice header,
//! issuing company, customer, ordered line items) into single-page PDF
//! bytes with a fixed coordinate layout.
//!
//! # Example
//!
//! ```ignore
//! use invoice::{InvoiceDocument, InvoiceRenderer};
//!
//! let document: InvoiceDocument = serde_json::from_str(aggregate_json)?;
//! let renderer = InvoiceRenderer::default();
//! let pdf_bytes = renderer.render(&document)?;
//! ```

pub mod format;
pub mod layout;
mod model;
mod renderer;

pub use model::{Company, Customer, Invoice, InvoiceDocument, InvoiceStatus, LineItem};
pub use renderer::{InvoiceRenderer, RenderOptions};

use thiserror::Error;

/// Errors that can occur while rendering an invoice
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invoice number is missing")]
    MissingInvoiceNumber,

    #[error("Logo image error: {0}")]
    Logo(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),
}

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;
