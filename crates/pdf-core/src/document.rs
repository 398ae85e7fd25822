//! PDF Document wrapper

use crate::font::{encode_text_literal, BuiltinFont};
use crate::image::{calculate_scaled_dimensions, generate_image_operators, ImageScaleMode, ImageXObject};
use crate::text::{generate_line_operators, generate_text_operators, TextRenderContext};
use crate::{Align, PdfError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Medium gray, used for secondary text
    pub fn gray() -> Self {
        Self::rgb(0.44, 0.44, 0.48)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Single-page PDF document built from scratch
///
/// Coordinates given to the drawing methods are in points with the origin at
/// the TOP-left of the page; they are converted to PDF's bottom-origin space
/// when operators are emitted. Content is buffered and flushed into the page
/// stream once, at save time.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// The single page object
    page_id: ObjectId,
    /// Page width in points
    page_width: f64,
    /// Page height in points
    page_height: f64,
    /// Current font
    current_font: BuiltinFont,
    /// Current font size in points
    current_font_size: f64,
    /// Current text color
    current_text_color: Color,
    /// Buffered content operators, flushed at save
    content: Vec<u8>,
    /// Font resource names assigned so far (font -> "F1")
    font_resources: HashMap<BuiltinFont, String>,
    /// Embedded images (data hash -> object id and pixel dimensions)
    embedded_images: HashMap<u64, (ObjectId, u32, u32)>,
    /// Image resource names in use (name, object id)
    image_resources: Vec<(String, ObjectId)>,
    /// Next image resource number
    next_image_resource: u32,
}

impl PdfDocument {
    /// Create a new blank single-page document
    ///
    /// # Arguments
    /// * `width` - Page width in points
    /// * `height` - Page height in points
    pub fn new(width: f64, height: f64) -> Self {
        let mut inner = Document::with_version("1.5");

        let pages_id = inner.new_object_id();

        let mut page_dict = Dictionary::new();
        page_dict.set(b"Type", Object::Name(b"Page".to_vec()));
        page_dict.set(b"Parent", Object::Reference(pages_id));
        page_dict.set(
            b"MediaBox",
            Object::Array(vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(width as f32),
                Object::Real(height as f32),
            ]),
        );
        let page_id = inner.add_object(Object::Dictionary(page_dict));

        let mut pages_dict = Dictionary::new();
        pages_dict.set(b"Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set(b"Count", Object::Integer(1));
        pages_dict.set(b"Kids", Object::Array(vec![Object::Reference(page_id)]));
        inner.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set(b"Type", Object::Name(b"Catalog".to_vec()));
        catalog.set(b"Pages", Object::Reference(pages_id));
        let catalog_id = inner.add_object(Object::Dictionary(catalog));
        inner.trailer.set(b"Root", Object::Reference(catalog_id));

        Self {
            inner,
            page_id,
            page_width: width,
            page_height: height,
            current_font: BuiltinFont::default(),
            current_font_size: 12.0,
            current_text_color: Color::default(),
            content: Vec::new(),
            font_resources: HashMap::new(),
            embedded_images: HashMap::new(),
            image_resources: Vec::new(),
            next_image_resource: 1,
        }
    }

    /// Page width in points
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Page height in points
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: BuiltinFont, size: f64) {
        self.current_font = font;
        self.current_font_size = size;
    }

    /// Set only the font size (keeps current font)
    pub fn set_font_size(&mut self, size: f64) {
        self.current_font_size = size;
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Measure a string with the current font and size, in points
    pub fn text_width(&self, text: &str) -> f64 {
        self.current_font
            .text_width_points(text, self.current_font_size)
    }

    /// Insert text at a position
    ///
    /// # Arguments
    /// * `text` - Text to insert; empty text is a no-op
    /// * `x` - Anchor X coordinate in points (meaning depends on `align`)
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment relative to the anchor
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let font_resource_name = self.font_resource_name(self.current_font);
        let text_width = self.text_width(text);
        let pdf_y = self.page_height - y;

        let ctx = TextRenderContext {
            font_name: font_resource_name,
            font_size: self.current_font_size,
            text_width,
            color: self.current_text_color,
        };

        let literal = encode_text_literal(text);
        let operators = generate_text_operators(&literal, x, pdf_y, align, &ctx);
        self.content.extend_from_slice(&operators);
    }

    /// Draw a horizontal rule
    ///
    /// # Arguments
    /// * `x1`, `x2` - Horizontal extent in points
    /// * `y` - Y coordinate in points (from top)
    /// * `thickness` - Stroke width in points
    pub fn draw_rule(&mut self, x1: f64, x2: f64, y: f64, thickness: f64) {
        let pdf_y = self.page_height - y;
        let operators = generate_line_operators(x1, pdf_y, x2, pdf_y, thickness);
        self.content.extend_from_slice(&operators);
    }

    /// Insert an image scaled into a bounding box
    ///
    /// Images are deduplicated by content hash, so inserting the same bytes
    /// twice embeds a single XObject.
    ///
    /// # Arguments
    /// * `data` - Image file bytes (JPEG or PNG)
    /// * `x` - Left edge in points
    /// * `y` - Top edge in points (from top)
    /// * `width`, `height` - Target box in points
    /// * `mode` - Scaling mode
    ///
    /// # Returns
    /// The dimensions actually drawn, in points
    pub fn insert_image(
        &mut self,
        data: &[u8],
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        mode: ImageScaleMode,
    ) -> Result<(f64, f64)> {
        let (resource_name, orig_width, orig_height) = self.image_resource(data)?;

        let (actual_width, actual_height) =
            calculate_scaled_dimensions(orig_width, orig_height, width, height, mode);

        // The cm matrix places the image by its bottom-left corner.
        let pdf_y = self.page_height - y - actual_height;
        let operators =
            generate_image_operators(&resource_name, x, pdf_y, actual_width, actual_height);
        self.content.extend_from_slice(&operators);

        Ok((actual_width, actual_height))
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.flush()?;
        self.inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        self.flush()?;
        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(buffer)
    }

    /// Get or assign the resource name for a built-in font
    fn font_resource_name(&mut self, font: BuiltinFont) -> String {
        if let Some(name) = self.font_resources.get(&font) {
            return name.clone();
        }
        let name = format!("F{}", self.font_resources.len() + 1);
        self.font_resources.insert(font, name.clone());
        name
    }

    /// Get or create the XObject for image data
    ///
    /// Returns the resource name and original pixel dimensions.
    fn image_resource(&mut self, data: &[u8]) -> Result<(String, u32, u32)> {
        let mut hasher = DefaultHasher::new();
        data.hash(&mut hasher);
        let data_hash = hasher.finish();

        if let Some(&(object_id, width, height)) = self.embedded_images.get(&data_hash) {
            if let Some((name, _)) = self.image_resources.iter().find(|(_, id)| *id == object_id) {
                return Ok((name.clone(), width, height));
            }
        }

        let xobject = ImageXObject::from_bytes(data)?;
        let (width, height) = (xobject.width, xobject.height);

        let object_id = self.inner.add_object(xobject.to_pdf_stream());
        self.embedded_images
            .insert(data_hash, (object_id, width, height));

        let resource_name = format!("Im{}", self.next_image_resource);
        self.next_image_resource += 1;
        self.image_resources.push((resource_name.clone(), object_id));

        Ok((resource_name, width, height))
    }

    /// Flush buffered content and resources into the page object
    fn flush(&mut self) -> Result<()> {
        let content = std::mem::take(&mut self.content);
        let stream_id = self
            .inner
            .add_object(Object::Stream(Stream::new(Dictionary::new(), content)));

        let mut font_dict = Dictionary::new();
        for (font, resource_name) in &self.font_resources {
            let font_id = self
                .inner
                .add_object(Object::Dictionary(font.to_font_dictionary()));
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }

        let mut xobject_dict = Dictionary::new();
        for (resource_name, object_id) in &self.image_resources {
            xobject_dict.set(resource_name.as_bytes(), Object::Reference(*object_id));
        }

        let mut resources = Dictionary::new();
        if !font_dict.is_empty() {
            resources.set("Font", Object::Dictionary(font_dict));
        }
        if !xobject_dict.is_empty() {
            resources.set("XObject", Object::Dictionary(xobject_dict));
        }

        let page_obj = self.inner.get_object_mut(self.page_id)?;
        let page_dict = page_obj.as_dict_mut().map_err(|_| {
            PdfError::StructureError("Page object is not a dictionary".to_string())
        })?;
        page_dict.set("Resources", Object::Dictionary(resources));
        page_dict.set("Contents", Object::Reference(stream_id));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_rgb() {
        let c = Color::from_rgb(255, 0, 0);
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_new_document_dimensions() {
        let doc = PdfDocument::new(612.0, 792.0);
        assert_eq!(doc.page_width(), 612.0);
        assert_eq!(doc.page_height(), 792.0);
    }

    #[test]
    fn test_empty_document_saves() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        let bytes = doc.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_insert_text_buffers_operators() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        doc.set_font(BuiltinFont::Helvetica, 12.0);
        doc.insert_text("Hello", 50.0, 60.0, Align::Left);

        let content = String::from_utf8(doc.content.clone()).unwrap();
        assert!(content.contains("/F1 12 Tf"));
        // y from top: 792 - 60 = 732
        assert!(content.contains("50 732 Td"));
        assert!(content.contains("(Hello) Tj"));
    }

    #[test]
    fn test_insert_empty_text_is_noop() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        doc.insert_text("", 50.0, 60.0, Align::Left);
        assert!(doc.content.is_empty());
    }

    #[test]
    fn test_font_resource_names_stable() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        let f1 = doc.font_resource_name(BuiltinFont::Helvetica);
        let f2 = doc.font_resource_name(BuiltinFont::HelveticaBold);
        let f1_again = doc.font_resource_name(BuiltinFont::Helvetica);
        assert_eq!(f1, f1_again);
        assert_ne!(f1, f2);
    }

    #[test]
    fn test_draw_rule_converts_y() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        doc.draw_rule(50.0, 562.0, 100.0, 0.75);

        let content = String::from_utf8(doc.content.clone()).unwrap();
        assert!(content.contains("50 692 m"));
        assert!(content.contains("562 692 l"));
    }

    #[test]
    fn test_text_width_uses_current_font() {
        let mut doc = PdfDocument::new(612.0, 792.0);
        doc.set_font(BuiltinFont::Helvetica, 10.0);
        let regular = doc.text_width("invoice");
        doc.set_font(BuiltinFont::HelveticaBold, 10.0);
        let bold = doc.text_width("invoice");
        assert!(bold > regular);
    }
}
