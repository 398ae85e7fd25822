//! PDF Core - Low-level PDF generation
//!
//! This crate provides functionality for:
//! - Creating single-page PDF documents from scratch
//! - Placing text with the built-in (base-14) Helvetica fonts
//! - Measuring text via embedded AFM glyph-advance tables
//! - Drawing horizontal rules
//! - Embedding images (JPEG, PNG)
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, BuiltinFont, PdfDocument};
//!
//! let mut doc = PdfDocument::new(612.0, 792.0);
//! doc.set_font(BuiltinFont::Helvetica, 12.0);
//! doc.insert_text("Hello, World!", 50.0, 50.0, Align::Left);
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod image;
mod text;

pub use document::{Color, PdfDocument};
pub use font::{encode_text_literal, BuiltinFont};
pub use image::ImageScaleMode;
pub use text::{generate_line_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("PDF structure error: {0}")]
    StructureError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
///
/// The x coordinate passed to `insert_text` is interpreted relative to the
/// alignment: the left edge for `Left`, the midpoint for `Center`, and the
/// right edge for `Right`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
