use crate::consts::TEXT_SEPARATOR;
use crate::layout::annotation::Page;
use crate::simplify::SimplifyConfig;

/// Writes aggregated text onto every structural annotation.
///
/// For each non-word annotation the word-category children (resolved to
/// indices by the validation pass, in `relationships.child` order) are
/// joined with a single space. Empty tokens are skipped rather than
/// producing doubled separators. Structural annotations without word
/// children end up with an empty string, not a missing field, so every
/// simplified annotation exposes `text`. Child annotations are not
/// mutated.
pub(crate) fn aggregate_text(page: &mut Page, children: &[Vec<usize>], config: &SimplifyConfig) {
    let texts: Vec<Option<String>> = page
        .annotations
        .iter()
        .zip(children)
        .map(|(ann, child_indices)| {
            if ann.category_name == config.word_category {
                return None;
            }
            let tokens: Vec<&str> = child_indices
                .iter()
                .map(|&i| &page.annotations[i])
                .filter(|child| child.category_name == config.word_category)
                .filter_map(|child| child.word_text())
                .filter(|token| !token.is_empty())
                .collect();
            Some(tokens.join(TEXT_SEPARATOR))
        })
        .collect();

    for (ann, text) in page.annotations.iter_mut().zip(texts) {
        if text.is_some() {
            ann.text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::annotation::Annotation;
    use serde_json::json;

    fn annotation(value: serde_json::Value) -> Annotation {
        serde_json::from_value(value).unwrap()
    }

    fn page(annotations: Vec<Annotation>) -> Page {
        Page {
            file_name: "doc_p1.json".to_string(),
            bbox: None,
            annotations,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_space_joined_aggregation() {
        let mut pg = page(vec![
            annotation(json!({
                "_annotation_id": "a1",
                "category_name": "text",
                "relationships": {"child": ["w1", "w2", "w3"]}
            })),
            annotation(json!({
                "_annotation_id": "w1",
                "category_name": "word",
                "sub_categories": {"characters": {"value": "The"}}
            })),
            annotation(json!({
                "_annotation_id": "w2",
                "category_name": "word",
                "sub_categories": {"characters": {"value": "cat"}}
            })),
            annotation(json!({
                "_annotation_id": "w3",
                "category_name": "word",
                "value": "sat"
            })),
        ]);
        let children = vec![vec![1, 2, 3], vec![], vec![], vec![]];
        aggregate_text(&mut pg, &children, &SimplifyConfig::default());

        assert_eq!(pg.annotations[0].text.as_deref(), Some("The cat sat"));
        // Word annotations are left alone
        assert!(pg.annotations[1].text.is_none());
    }

    #[test]
    fn test_empty_child_list_yields_empty_string() {
        let mut pg = page(vec![annotation(json!({
            "_annotation_id": "a1",
            "category_name": "figure",
            "relationships": {"child": []}
        }))]);
        aggregate_text(&mut pg, &[vec![]], &SimplifyConfig::default());
        assert_eq!(pg.annotations[0].text.as_deref(), Some(""));
    }

    #[test]
    fn test_non_word_children_are_not_aggregated() {
        // A list block whose children are nested text blocks contributes no
        // text of its own; the nested blocks keep theirs.
        let mut pg = page(vec![
            annotation(json!({
                "_annotation_id": "list1",
                "category_name": "list",
                "relationships": {"child": ["t1"]}
            })),
            annotation(json!({
                "_annotation_id": "t1",
                "category_name": "text",
                "relationships": {"child": ["w1"]}
            })),
            annotation(json!({
                "_annotation_id": "w1",
                "category_name": "word",
                "value": "item"
            })),
        ]);
        let children = vec![vec![1], vec![2], vec![]];
        aggregate_text(&mut pg, &children, &SimplifyConfig::default());

        assert_eq!(pg.annotations[0].text.as_deref(), Some(""));
        assert_eq!(pg.annotations[1].text.as_deref(), Some("item"));
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let mut pg = page(vec![
            annotation(json!({
                "_annotation_id": "a1",
                "category_name": "text",
                "relationships": {"child": ["w1", "w2", "w3"]}
            })),
            annotation(json!({
                "_annotation_id": "w1",
                "category_name": "word",
                "value": "left"
            })),
            annotation(json!({
                "_annotation_id": "w2",
                "category_name": "word",
                "value": ""
            })),
            annotation(json!({
                "_annotation_id": "w3",
                "category_name": "word",
                "value": "right"
            })),
        ]);
        let children = vec![vec![1, 2, 3], vec![], vec![], vec![]];
        aggregate_text(&mut pg, &children, &SimplifyConfig::default());
        assert_eq!(pg.annotations[0].text.as_deref(), Some("left right"));
    }
}
