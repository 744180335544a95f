use std::collections::HashMap;

use tracing::debug;

use crate::consts::{COLUMN_OVERLAP_THRESHOLD, WORD_CATEGORY};
use crate::error::SimplifyError;
use crate::layout::annotation::Page;

pub mod aggregate;
pub mod batch;
pub mod order;
pub mod prune;

/// Tuning knobs for page simplification.
///
/// Reasonable document layouts vary, so the column heuristics are
/// parameters rather than hard-coded constants; the defaults in
/// [`crate::consts`] work well for the upstream model's output.
#[derive(Clone, Debug)]
pub struct SimplifyConfig {
    /// See [`crate::consts::COLUMN_OVERLAP_THRESHOLD`].
    pub column_overlap_threshold: f32,
    /// Category name denoting leaf word annotations.
    pub word_category: String,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            column_overlap_threshold: COLUMN_OVERLAP_THRESHOLD,
            word_category: WORD_CATEGORY.to_string(),
        }
    }
}

/// Simplifies one page in place: aggregates word text onto structural
/// annotations, drops the word annotations and `child` edges, and reorders
/// the survivors into natural reading order.
///
/// The page is untouched when an error is returned; all integrity checks
/// run before the first mutation.
pub fn simplify_page(page: &mut Page, config: &SimplifyConfig) -> Result<(), SimplifyError> {
    let children = validate(page, config)?;
    debug!(
        file_name = %page.file_name,
        annotations = page.annotations.len(),
        "page validated"
    );

    aggregate::aggregate_text(page, &children, config);
    prune::prune(page, config);
    order::sort_reading_order(page, config);

    debug!(
        file_name = %page.file_name,
        annotations = page.annotations.len(),
        "page simplified"
    );
    Ok(())
}

/// Resolves every `child` edge to an annotation index up front, so the
/// later stages cannot trip over a dangling reference mid-aggregation.
///
/// Returns, for each annotation, the indices of its direct children in
/// `relationships.child` order. Also checks that every structural
/// annotation carries a bounding box, which the sorter needs.
fn validate(page: &Page, config: &SimplifyConfig) -> Result<Vec<Vec<usize>>, SimplifyError> {
    let index: HashMap<&str, usize> = page
        .annotations
        .iter()
        .enumerate()
        .map(|(i, ann)| (ann.annotation_id.as_str(), i))
        .collect();

    let mut children = Vec::with_capacity(page.annotations.len());
    for ann in &page.annotations {
        if ann.category_name != config.word_category && ann.bounding_box.is_none() {
            return Err(SimplifyError::MalformedInput {
                annotation_id: ann.annotation_id.clone(),
                field: "bounding_box".to_string(),
            });
        }

        let mut resolved = Vec::with_capacity(ann.child_ids().len());
        for child_id in ann.child_ids() {
            let child = index
                .get(child_id.as_str())
                .ok_or_else(|| SimplifyError::DataIntegrity {
                    child_id: child_id.clone(),
                    parent_id: ann.annotation_id.clone(),
                })?;
            resolved.push(*child);
        }
        children.push(resolved);
    }

    Ok(children)
}
