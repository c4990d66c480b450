use crate::document::Element;
use crate::errors::Result;
use crate::geometry::{BoundingBox, BoundingBoxBuilder};
use crate::path::PathBounds;
use crate::shape::{local_bbox, ShapeKind};
use crate::transform::{parse_translate, Offset};

/// Aggregate bounds of all visual content below (and including) `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBounds {
    pub bbox: BoundingBox,
    /// Number of elements which contributed to `bbox`
    pub shape_count: usize,
}

/// Offset of `el` given its parent's accumulated offset.
fn element_offset(el: &Element, parent: Offset) -> Offset {
    match el.get_attr("transform") {
        None => parent,
        Some(transform) => {
            let own = parse_translate(transform).unwrap_or_else(|| {
                tracing::warn!(
                    element = el.name(),
                    transform,
                    "unsupported transform ignored; only a single translate() is applied"
                );
                Offset::ZERO
            });
            parent + own
        }
    }
}

/// Walk the tree pre-order, folding the translated bounds of every visual
/// element into a single bounding box.
///
/// Non-visual elements (`defs`, `title`, ...) are skipped along with their
/// whole subtree. Returns `None` if no element has any bounds.
pub fn content_bounds(root: &Element, path_policy: PathBounds) -> Result<Option<ContentBounds>> {
    let mut bounds = BoundingBoxBuilder::new();
    let mut shape_count = 0;

    let mut stack = vec![(root, Offset::ZERO)];
    while let Some((el, parent_offset)) = stack.pop() {
        if !ShapeKind::of(el).is_visual() {
            tracing::debug!(element = el.name(), "skipping non-visual element");
            continue;
        }
        let offset = element_offset(el, parent_offset);
        if let Some(bbox) = local_bbox(el, path_policy)? {
            let bbox = bbox.translated(offset.dx, offset.dy);
            tracing::debug!(element = el.name(), %bbox, "element bounds");
            bounds.extend(bbox);
            shape_count += 1;
        }
        // reversed so children are popped in document order
        for child in el.child_elements().rev() {
            stack.push((child, offset));
        }
    }

    Ok(bounds.build().map(|bbox| ContentBounds { bbox, shape_count }))
}
