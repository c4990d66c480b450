//! Bounds of SVG path data (`<path d="..."/>`).

mod bbox;
mod legacy;
mod syntax;

use crate::geometry::BoundingBox;

pub use bbox::command_aware_bbox;
pub use legacy::naive_pairs_bbox;
pub(crate) use syntax::PathTokens;

/// Policy used to derive bounds from path data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathBounds {
    /// Interpret each command by its operand count and absolute / relative
    /// semantics.
    #[default]
    CommandAware,
    /// Legacy behaviour: pair all numbers in order as (x, y), ignoring
    /// commands. Retained for compatibility with historical output only.
    NaivePairs,
}

/// Bounds of the given path data, or `None` if it yields no points.
pub fn path_bbox(data: &str, policy: PathBounds) -> Option<BoundingBox> {
    match policy {
        PathBounds::CommandAware => command_aware_bbox(data),
        PathBounds::NaivePairs => naive_pairs_bbox(data),
    }
}
