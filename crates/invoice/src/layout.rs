//! Fixed-coordinate page geometry
//!
//! All values are in points (1/72 inch), X from the left page edge, Y from
//! the top. There is one page and no overflow handling: content past the
//! bottom margin clips silently.

/// Page width (US Letter portrait)
pub const PAGE_WIDTH: f64 = 612.0;
/// Page height (US Letter portrait)
pub const PAGE_HEIGHT: f64 = 792.0;
/// Uniform margin on all sides
pub const MARGIN: f64 = 50.0;
/// Width of the content area between the margins
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
/// Right edge of the content area
pub const CONTENT_RIGHT: f64 = PAGE_WIDTH - MARGIN;

/// Vertical advance per text line
pub const LINE_HEIGHT: f64 = 14.0;
/// Vertical advance per table row
pub const ROW_HEIGHT: f64 = 20.0;

/// Character cap for generic free-text fields
pub const MAX_TEXT_CHARS: usize = 200;
/// Character cap for table cells
pub const MAX_CELL_CHARS: usize = 45;
/// Character cap for each note line
pub const MAX_NOTE_CHARS: usize = 85;

/// Bounding box for the company logo
pub const LOGO_BOX: f64 = 72.0;
/// Gap between the logo and the company name
pub const LOGO_GAP: f64 = 12.0;

/// Width of the description column
pub const COL_DESCRIPTION_WIDTH: f64 = 242.0;
/// Width of the quantity column
pub const COL_QUANTITY_WIDTH: f64 = 70.0;
/// Width of the unit price column
pub const COL_UNIT_PRICE_WIDTH: f64 = 100.0;
/// Width of the amount column
pub const COL_AMOUNT_WIDTH: f64 = 100.0;

/// Left edge of the description column
pub const COL_DESCRIPTION_X: f64 = MARGIN;
/// Center of the quantity column
pub const COL_QUANTITY_CENTER: f64 =
    MARGIN + COL_DESCRIPTION_WIDTH + COL_QUANTITY_WIDTH / 2.0;
/// Right edge of the unit price column
pub const COL_UNIT_PRICE_RIGHT: f64 =
    MARGIN + COL_DESCRIPTION_WIDTH + COL_QUANTITY_WIDTH + COL_UNIT_PRICE_WIDTH;
/// Right edge of the amount column
pub const COL_AMOUNT_RIGHT: f64 = CONTENT_RIGHT;

/// Left edge of the totals block labels
pub const TOTALS_LABEL_X: f64 = CONTENT_RIGHT - 180.0;

/// The left header/bill-to column must stop short of the right-hand column
/// (invoice number, dates) so the two never overlap.
pub const LEFT_COLUMN_RIGHT: f64 = MARGIN + 280.0;

/// Stroke width for section separator rules
pub const RULE_THICKNESS: f64 = 0.75;
/// Stroke width for the rule under the table header
pub const HEAVY_RULE_THICKNESS: f64 = 1.5;

/// Font size for the company name
pub const COMPANY_NAME_SIZE: f64 = 20.0;
/// Font size for the invoice number
pub const INVOICE_NUMBER_SIZE: f64 = 16.0;
/// Font size for body text
pub const BODY_SIZE: f64 = 10.0;
/// Font size for the bold final total row
pub const TOTAL_SIZE: f64 = 12.0;
