use crate::layout::annotation::Page;
use crate::simplify::SimplifyConfig;

/// Drops every word annotation from the page and strips the `child` edge
/// from each survivor.
///
/// Pure filter plus field-strip: the surviving ids are exactly the ids
/// that were non-word, in unchanged order (reading order is fixed by the
/// sorter afterwards). A `relationships` object left empty once `child`
/// is gone is removed entirely, matching the upstream wire format.
pub(crate) fn prune(page: &mut Page, config: &SimplifyConfig) {
    page.annotations
        .retain(|ann| ann.category_name != config.word_category);

    for ann in &mut page.annotations {
        if let Some(mut rel) = ann.relationships.take() {
            rel.child = None;
            if !rel.is_empty() {
                ann.relationships = Some(rel);
            }
        }
    }
}
