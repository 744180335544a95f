use std::cmp::Ordering;

use glam::Vec2;

use crate::analysis::bbox::Bbox;
use crate::layout::annotation::{Annotation, Page};
use crate::simplify::SimplifyConfig;

/// An annotation's position in the input list plus its resolved pixel
/// geometry. The input position doubles as the final tie-breaker so the
/// resulting order is fully deterministic.
struct Item {
    index: usize,
    bbox: Bbox,
}

/// A vertical column under construction: its current horizontal extent and
/// the items assigned to it so far.
struct Column {
    ulx: f32,
    lrx: f32,
    members: Vec<usize>,
}

impl Column {
    /// Horizontal overlap between the column extent and the box, as a
    /// fraction of the box's own width.
    ///
    /// A zero-width box degrades to containment of its left edge (1.0
    /// inside the extent, 0.0 outside); reading order is a best-effort
    /// heuristic and malformed geometry is never an error.
    fn overlap_fraction(&self, bbox: &Bbox) -> f32 {
        let width = bbox.width();
        if width <= 0.0 {
            return if self.ulx <= bbox.min.x && bbox.min.x <= self.lrx {
                1.0
            } else {
                0.0
            };
        }
        bbox.h_overlap(self.ulx, self.lrx) / width
    }

    /// Widens the extent to the union of the column's and the box's
    /// horizontal ranges.
    fn widen(&mut self, bbox: &Bbox) {
        self.ulx = self.ulx.min(bbox.min.x);
        self.lrx = self.lrx.max(bbox.max.x);
    }
}

/// Reorders the page's flattened annotations into natural reading order:
/// columns left-to-right, then top-to-bottom within each column.
///
/// Column assignment walks the annotations by `ulx` ascending, keeping an
/// accumulator of open columns. An annotation joins the open column whose
/// extent it overlaps horizontally by at least the configured fraction of
/// its own width (ties: largest fraction, then smallest `|ulx - col_ulx|`),
/// widening that column's extent; otherwise it opens a new column anchored
/// at its own extent. Within a column, members order by `uly`, then `ulx`,
/// then original input position.
pub(crate) fn sort_reading_order(page: &mut Page, config: &SimplifyConfig) {
    if page.annotations.len() < 2 {
        return;
    }

    let extent = page.extent();
    let mut items: Vec<Item> = page
        .annotations
        .iter()
        .enumerate()
        .map(|(index, ann)| {
            let bbox = ann
                .bounding_box
                .as_ref()
                .map(|b| b.to_bbox(extent))
                .unwrap_or_else(|| Bbox::new(Vec2::ZERO, Vec2::ZERO));
            Item { index, bbox }
        })
        .collect();

    // Walk left to right so columns are discovered in their natural order.
    items.sort_by(|a, b| {
        a.bbox
            .min
            .x
            .partial_cmp(&b.bbox.min.x)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    let mut columns: Vec<Column> = Vec::new();
    for (pos, item) in items.iter().enumerate() {
        let best = columns
            .iter_mut()
            .map(|col| {
                let fraction = col.overlap_fraction(&item.bbox);
                let distance = (item.bbox.min.x - col.ulx).abs();
                (col, fraction, distance)
            })
            .filter(|(_, fraction, _)| *fraction >= config.column_overlap_threshold)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(Ordering::Equal)
                    // Reversed: the max element is the closest qualifying column
                    .then_with(|| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal))
            });

        match best {
            Some((col, _, _)) => {
                col.widen(&item.bbox);
                col.members.push(pos);
            }
            None => columns.push(Column {
                ulx: item.bbox.min.x,
                lrx: item.bbox.max.x,
                members: vec![pos],
            }),
        }
    }

    // Columns left to right; widening can move col_ulx, so sort explicitly.
    columns.sort_by(|a, b| a.ulx.partial_cmp(&b.ulx).unwrap_or(Ordering::Equal));

    for column in &mut columns {
        column.members.sort_by(|&a, &b| {
            let (ia, ib) = (&items[a], &items[b]);
            ia.bbox
                .min
                .y
                .partial_cmp(&ib.bbox.min.y)
                .unwrap_or(Ordering::Equal)
                .then(
                    ia.bbox
                        .min
                        .x
                        .partial_cmp(&ib.bbox.min.x)
                        .unwrap_or(Ordering::Equal),
                )
                .then(ia.index.cmp(&ib.index))
        });
    }

    let order: Vec<usize> = columns
        .iter()
        .flat_map(|col| col.members.iter().map(|&pos| items[pos].index))
        .collect();

    let mut slots: Vec<Option<Annotation>> = std::mem::take(&mut page.annotations)
        .into_iter()
        .map(Some)
        .collect();
    page.annotations = order.into_iter().filter_map(|i| slots[i].take()).collect();
}
