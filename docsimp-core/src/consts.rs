/// Minimum horizontal-overlap fraction for assigning an annotation to an
/// open column during reading-order sorting.
///
/// The overlap between an annotation's horizontal extent and a column's
/// extent is measured as a fraction of the annotation's own width. Document
/// columns are rarely pixel-aligned, so a threshold-based test tolerates
/// margin and indentation noise while still separating genuinely distinct
/// columns:
/// - Lower values (0.2-0.4): merge more aggressively, may join side-by-side
///   columns with wide headings
/// - Higher values (0.6-0.8): stricter, may split a column at an indented
///   paragraph
pub const COLUMN_OVERLAP_THRESHOLD: f32 = 0.5;

/// Category name of the leaf annotations that carry a single recognized
/// text token. These are consumed by text aggregation and removed from the
/// simplified page.
pub const WORD_CATEGORY: &str = "word";

/// Separator inserted between word tokens when aggregating a structural
/// annotation's text from its children.
pub const TEXT_SEPARATOR: &str = " ";

/// Page extent assumed when the input page carries no `_bbox`.
///
/// Only relevant for pages with normalized annotation coordinates, where
/// the page extent is needed to scale boxes to pixels before ordering.
pub const FALLBACK_PAGE_EXTENT: f32 = 1000.0;

/// Suffix appended to an input file's stem to derive the default batch
/// output path (`page.json` -> `page_processed.json`).
pub const PROCESSED_SUFFIX: &str = "_processed";
