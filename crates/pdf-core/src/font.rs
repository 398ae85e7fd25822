//! Built-in font handling and metrics
//!
//! The base-14 fonts ship with every conforming PDF viewer, so nothing is
//! embedded in the file; only the font dictionary and the advance-width
//! tables (taken from the Adobe AFM files, expressed in 1/1000 em) live here.
//! Knowing every glyph advance is what makes exact right/center alignment
//! possible without a font parser.

use lopdf::{Dictionary, Object};

/// Built-in (base-14) fonts available to documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    HelveticaBold,
}

/// Helvetica advance widths for chars 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    //  sp    !     "     #     $     %     &     '     (     )
       278,  278,  355,  556,  556,  889,  667,  191,  333,  333,
    //  *     +     ,     -     .     /     0     1     2     3
       389,  584,  278,  333,  278,  278,  556,  556,  556,  556,
    //  4     5     6     7     8     9     :     ;     <     =
       556,  556,  556,  556,  556,  556,  278,  278,  584,  584,
    //  >     ?     @     A     B     C     D     E     F     G
       584,  556, 1015,  667,  667,  722,  722,  667,  611,  778,
    //  H     I     J     K     L     M     N     O     P     Q
       722,  278,  500,  667,  556,  833,  722,  778,  667,  778,
    //  R     S     T     U     V     W     X     Y     Z     [
       722,  667,  611,  722,  667,  944,  667,  667,  611,  278,
    //  \     ]     ^     _     `     a     b     c     d     e
       278,  278,  469,  556,  333,  556,  556,  500,  556,  556,
    //  f     g     h     i     j     k     l     m     n     o
       278,  556,  556,  222,  222,  500,  222,  833,  556,  556,
    //  p     q     r     s     t     u     v     w     x     y
       556,  556,  333,  500,  278,  556,  500,  722,  500,  500,
    //  z     {     |     }     ~
       500,  334,  260,  334,  584,
];

/// Helvetica-Bold advance widths for chars 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    //  sp    !     "     #     $     %     &     '     (     )
       278,  333,  474,  556,  556,  889,  722,  238,  333,  333,
    //  *     +     ,     -     .     /     0     1     2     3
       389,  584,  278,  333,  278,  278,  556,  556,  556,  556,
    //  4     5     6     7     8     9     :     ;     <     =
       556,  556,  556,  556,  556,  556,  333,  333,  584,  584,
    //  >     ?     @     A     B     C     D     E     F     G
       584,  611,  975,  722,  722,  722,  722,  667,  611,  778,
    //  H     I     J     K     L     M     N     O     P     Q
       722,  278,  556,  722,  611,  833,  722,  778,  667,  778,
    //  R     S     T     U     V     W     X     Y     Z     [
       722,  667,  611,  722,  667,  944,  667,  667,  611,  333,
    //  \     ]     ^     _     `     a     b     c     d     e
       278,  333,  584,  556,  333,  556,  611,  556,  611,  556,
    //  f     g     h     i     j     k     l     m     n     o
       333,  611,  611,  278,  278,  556,  278,  889,  611,  611,
    //  p     q     r     s     t     u     v     w     x     y
       611,  611,  389,  556,  333,  611,  556,  778,  556,  556,
    //  z     {     |     }     ~
       500,  389,  280,  389,  584,
];

/// Fallback advance for characters outside the tabulated ASCII range.
///
/// Accented Latin-1 text still renders via WinAnsiEncoding; its advances are
/// approximated with the width of the average lowercase glyph.
const DEFAULT_WIDTH: u16 = 556;

impl BuiltinFont {
    /// PostScript name used as the /BaseFont entry
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            BuiltinFont::Helvetica => &HELVETICA_WIDTHS,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Get the advance width of a character in 1/1000 em
    pub fn glyph_advance(&self, c: char) -> u16 {
        let code = c as u32;
        if (32..=126).contains(&code) {
            self.widths()[(code - 32) as usize]
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Calculate text width in 1/1000 em units
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().map(|c| self.glyph_advance(c) as u32).sum()
    }

    /// Calculate text width in points for a given font size
    pub fn text_width_points(&self, text: &str, font_size: f64) -> f64 {
        self.text_width(text) as f64 / 1000.0 * font_size
    }

    /// Build the PDF font dictionary for this font
    ///
    /// Base-14 fonts need no FontDescriptor or embedded program; viewers are
    /// required to supply them.
    pub fn to_font_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"Font".to_vec()));
        dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        dict.set(
            "BaseFont",
            Object::Name(self.base_name().as_bytes().to_vec()),
        );
        dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        dict
    }
}

/// Encode text as a PDF literal string for the Tj operator
///
/// ASCII passes through with backslash escapes for `(`, `)` and `\`.
/// Latin-1 characters map to their single-byte form (WinAnsiEncoding agrees
/// with Latin-1 over 0xA0..=0xFF); anything else degrades to `?`.
pub fn encode_text_literal(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'(');
    for c in text.chars() {
        match c {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(c as u8);
            }
            c if (c as u32) < 0x20 => out.push(b' '),
            c if (c as u32) <= 0x7E => out.push(c as u8),
            c if (0xA0..=0xFF).contains(&(c as u32)) => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out.push(b')');
    out
}
