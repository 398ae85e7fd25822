//! Content-stream operator generation

use crate::document::Color;
use crate::Align;

/// Context for rendering a single run of text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Calculate the X offset to apply for an alignment
///
/// The anchor x is the left edge for `Left`, the midpoint for `Center` and
/// the right edge for `Right`.
pub fn calculate_x_offset(text_width: f64, align: Align) -> f64 {
    match align {
        Align::Left => 0.0,
        Align::Center => -text_width / 2.0,
        Align::Right => -text_width,
    }
}

/// Generate PDF operators for text insertion
///
/// Emits the text object (BT, rg, Tf, Td, Tj, ET) that renders an encoded
/// literal string at a position, shifted left per the alignment.
///
/// # Arguments
/// * `text_literal` - Escaped literal string including parentheses, e.g. `(Total)`
/// * `x` - Anchor X coordinate in points
/// * `y` - Baseline Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment relative to the anchor
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text_literal: &[u8],
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let final_x = x + calculate_x_offset(ctx.text_width, align);

    let mut ops = Vec::new();
    ops.extend_from_slice(b"BT\n");
    ops.extend_from_slice(
        format!("{} {} {} rg\n", ctx.color.r, ctx.color.g, ctx.color.b).as_bytes(),
    );
    ops.extend_from_slice(format!("/{} {} Tf\n", ctx.font_name, ctx.font_size).as_bytes());
    ops.extend_from_slice(format!("{final_x} {y} Td\n").as_bytes());
    ops.extend_from_slice(text_literal);
    ops.extend_from_slice(b" Tj\nET\n");
    ops
}

/// Generate PDF operators for a stroked line
///
/// # Arguments
/// * `x1`, `y1` - Start point (PDF coordinates, from bottom)
/// * `x2`, `y2` - End point
/// * `thickness` - Stroke width in points
pub fn generate_line_operators(x1: f64, y1: f64, x2: f64, y2: f64, thickness: f64) -> Vec<u8> {
    format!("q\n{thickness} w\n{x1} {y1} m\n{x2} {y2} l\nS\nQ\n").into_bytes()
}
