use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analysis::bbox::Bbox;
use crate::consts::FALLBACK_PAGE_EXTENT;

/// A bounding box as it appears on the wire, in the upper-left /
/// lower-right convention of the upstream layout model.
///
/// Coordinates may be absolute pixels (`absolute_coords == true`) or
/// normalized to the page extent; `to_bbox` resolves either form to
/// absolute pixels for geometry work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default = "default_absolute")]
    pub absolute_coords: bool,
    pub ulx: f64,
    pub uly: f64,
    pub lrx: f64,
    pub lry: f64,
}

fn default_absolute() -> bool {
    true
}

impl BoundingBox {
    /// Resolves this box to absolute pixel coordinates, scaling normalized
    /// coordinates by the page extent.
    pub fn to_bbox(&self, page_extent: Vec2) -> Bbox {
        if self.absolute_coords {
            Bbox::new(
                Vec2::new(self.ulx as f32, self.uly as f32),
                Vec2::new(self.lrx as f32, self.lry as f32),
            )
        } else {
            Bbox::new(
                Vec2::new(
                    self.ulx as f32 * page_extent.x,
                    self.uly as f32 * page_extent.y,
                ),
                Vec2::new(
                    self.lrx as f32 * page_extent.x,
                    self.lry as f32 * page_extent.y,
                ),
            )
        }
    }
}

/// Graph edges attached to an annotation. Only the ordered `child` list is
/// interpreted here; any other relationship keys pass through untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Relationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Vec<String>>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Relationships {
    pub fn is_empty(&self) -> bool {
        self.child.is_none() && self.other.is_empty()
    }
}

/// One node of the per-page layout graph.
///
/// Field names mirror the upstream model's JSON output exactly
/// (`_annotation_id`, `category_name`, ...) so that simplified pages stay
/// compatible with existing consumers. Keys this crate does not interpret
/// are preserved through `extra`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(rename = "_annotation_id")]
    pub annotation_id: String,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Relationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_categories: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Aggregated text, written during simplification. Never present on
    /// upstream input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Annotation {
    /// The ordered child-id list, empty when the annotation has no `child`
    /// relationship.
    pub fn child_ids(&self) -> &[String] {
        self.relationships
            .as_ref()
            .and_then(|r| r.child.as_deref())
            .unwrap_or(&[])
    }

    /// The recognized token of a word annotation.
    ///
    /// The upstream model stores it under `sub_categories.<name>.value`
    /// (first entry that carries a `value` wins), with a plain top-level
    /// `value` as fallback.
    pub fn word_text(&self) -> Option<&str> {
        if let Some(subs) = &self.sub_categories {
            for sub in subs.values() {
                if let Some(Value::String(text)) = sub.get("value") {
                    return Some(text);
                }
            }
        }
        self.value.as_deref()
    }
}

/// One page of layout output: an ordered annotation list plus the page
/// extent and source file name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub file_name: String,
    #[serde(rename = "_bbox", skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    /// Width and height of the page in pixels, falling back to a default
    /// extent when `_bbox` is missing. Both dimensions are clamped to at
    /// least one pixel so normalized coordinates always scale cleanly.
    pub fn extent(&self) -> Vec2 {
        match &self.bbox {
            Some(bbox) => Vec2::new(
                ((bbox.lrx - bbox.ulx) as f32).max(1.0),
                ((bbox.lry - bbox.uly) as f32).max(1.0),
            ),
            None => Vec2::new(FALLBACK_PAGE_EXTENT, FALLBACK_PAGE_EXTENT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_annotation_wire_field_names() {
        let raw = json!({
            "_annotation_id": "a1",
            "category_name": "text",
            "bounding_box": {
                "absolute_coords": true,
                "ulx": 10.0, "uly": 20.0, "lrx": 110.0, "lry": 60.0
            },
            "relationships": {"child": ["w1", "w2"]},
            "score": 0.93
        });
        let ann: Annotation = serde_json::from_value(raw).unwrap();
        assert_eq!(ann.annotation_id, "a1");
        assert_eq!(ann.category_name, "text");
        assert_eq!(ann.child_ids(), ["w1", "w2"]);
        // Uninterpreted keys survive the round trip
        assert_eq!(ann.extra.get("score"), Some(&json!(0.93)));

        let out = serde_json::to_value(&ann).unwrap();
        assert_eq!(out["_annotation_id"], "a1");
        assert_eq!(out["bounding_box"]["ulx"], 10.0);
        assert_eq!(out["score"], 0.93);
        // No text key until aggregation writes one
        assert!(out.get("text").is_none());
    }

    #[test]
    fn test_word_text_from_sub_categories() {
        let ann: Annotation = serde_json::from_value(json!({
            "_annotation_id": "w1",
            "category_name": "word",
            "sub_categories": {
                "characters": {"value": "cat", "score": 0.99}
            }
        }))
        .unwrap();
        assert_eq!(ann.word_text(), Some("cat"));
    }

    #[test]
    fn test_word_text_value_fallback() {
        let ann: Annotation = serde_json::from_value(json!({
            "_annotation_id": "w1",
            "category_name": "word",
            "value": "sat"
        }))
        .unwrap();
        assert_eq!(ann.word_text(), Some("sat"));

        let bare: Annotation = serde_json::from_value(json!({
            "_annotation_id": "w2",
            "category_name": "word"
        }))
        .unwrap();
        assert_eq!(bare.word_text(), None);
    }

    #[test]
    fn test_bounding_box_to_bbox_normalized() {
        let bbox = BoundingBox {
            absolute_coords: false,
            ulx: 0.1,
            uly: 0.2,
            lrx: 0.5,
            lry: 0.4,
        };
        let resolved = bbox.to_bbox(Vec2::new(1000.0, 500.0));
        assert_eq!(resolved.min, Vec2::new(100.0, 100.0));
        assert_eq!(resolved.max, Vec2::new(500.0, 200.0));

        // Absolute boxes pass through unscaled
        let abs = BoundingBox {
            absolute_coords: true,
            ulx: 10.0,
            uly: 20.0,
            lrx: 30.0,
            lry: 40.0,
        };
        let resolved = abs.to_bbox(Vec2::new(1000.0, 500.0));
        assert_eq!(resolved.min, Vec2::new(10.0, 20.0));
        assert_eq!(resolved.max, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_page_extent_fallback() {
        let page: Page = serde_json::from_value(json!({
            "file_name": "doc_p1.json",
            "annotations": []
        }))
        .unwrap();
        assert_eq!(page.extent(), Vec2::new(1000.0, 1000.0));

        let page: Page = serde_json::from_value(json!({
            "file_name": "doc_p1.json",
            "_bbox": {"ulx": 0.0, "uly": 0.0, "lrx": 612.0, "lry": 792.0},
            "annotations": []
        }))
        .unwrap();
        assert_eq!(page.extent(), Vec2::new(612.0, 792.0));
    }

    #[test]
    fn test_relationships_pass_through() {
        let ann: Annotation = serde_json::from_value(json!({
            "_annotation_id": "a1",
            "category_name": "table",
            "relationships": {"child": ["w1"], "reading_order": ["a2"]}
        }))
        .unwrap();
        let rel = ann.relationships.as_ref().unwrap();
        assert!(!rel.is_empty());
        assert!(rel.other.contains_key("reading_order"));

        // Dropping `child` alone does not make them empty
        let mut rel = rel.clone();
        rel.child = None;
        assert!(!rel.is_empty());
        rel.other.clear();
        assert!(rel.is_empty());
    }
}
