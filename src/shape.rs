use itertools::Itertools;

use crate::document::Element;
use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, BoundingBoxBuilder};
use crate::path::{path_bbox, PathBounds, PathTokens};
use crate::types::strp_attr;

/// Classification of an element for bounds purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Circle,
    Ellipse,
    Line,
    Polygon,
    Polyline,
    Path,
    Image,
    /// Never rendered in place; neither the element nor its descendants
    /// contribute to the bounds.
    NonVisual,
    /// No geometry of its own (e.g. `g`, `svg`, `a`), but children may have.
    Other,
}

impl From<&str> for ShapeKind {
    fn from(name: &str) -> Self {
        match name {
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "line" => Self::Line,
            "polygon" => Self::Polygon,
            "polyline" => Self::Polyline,
            "path" => Self::Path,
            "image" => Self::Image,
            "defs" | "metadata" | "title" | "desc" | "script" | "style" | "symbol" | "clipPath"
            | "mask" | "marker" | "pattern" | "linearGradient" | "radialGradient" | "filter" => {
                Self::NonVisual
            }
            _ => Self::Other,
        }
    }
}

impl ShapeKind {
    pub fn of(el: &Element) -> Self {
        Self::from(el.name())
    }

    pub fn is_visual(&self) -> bool {
        *self != Self::NonVisual
    }
}

/// Numeric attribute value, defaulting to 0 if absent.
fn num_attr(el: &Element, name: &str) -> Result<f32> {
    match el.get_attr(name) {
        Some(value) => strp_attr(name, value),
        None => Ok(0.),
    }
}

/// Bounds of a `points` attribute; numbers are taken pairwise and a
/// trailing unpaired number is ignored.
pub fn points_bbox(points: &str) -> Result<Option<BoundingBox>> {
    let mut tokens = PathTokens::new(points);
    let mut numbers = Vec::new();
    tokens.skip_whitespace();
    while !tokens.at_end() {
        numbers.push(
            tokens
                .read_number()
                .map_err(|_| Error::InvalidValue("points".into(), points.into()))?,
        );
    }

    let mut bounds = BoundingBoxBuilder::new();
    for (x, y) in numbers.into_iter().tuples() {
        bounds.add_point((x, y));
    }
    Ok(bounds.build())
}

/// Bounds of a box at `(x, y)`, or `None` for a negative extent.
///
/// Negative sizes (here and for radii) disable rendering of the element.
fn sized_bbox(x: f32, y: f32, width: f32, height: f32) -> Option<BoundingBox> {
    (width >= 0. && height >= 0.).then(|| BoundingBox::new(x, y, x + width, y + height))
}

/// Local (untransformed) bounds of a single element, or `None` if it has no
/// geometry of its own.
pub fn local_bbox(el: &Element, path_policy: PathBounds) -> Result<Option<BoundingBox>> {
    let bbox = match ShapeKind::of(el) {
        ShapeKind::Rect | ShapeKind::Image => {
            let x = num_attr(el, "x")?;
            let y = num_attr(el, "y")?;
            let width = num_attr(el, "width")?;
            let height = num_attr(el, "height")?;
            sized_bbox(x, y, width, height)
        }
        ShapeKind::Circle => {
            let cx = num_attr(el, "cx")?;
            let cy = num_attr(el, "cy")?;
            let r = num_attr(el, "r")?;
            (r >= 0.).then(|| BoundingBox::new(cx - r, cy - r, cx + r, cy + r))
        }
        ShapeKind::Ellipse => {
            let cx = num_attr(el, "cx")?;
            let cy = num_attr(el, "cy")?;
            let rx = num_attr(el, "rx")?;
            let ry = num_attr(el, "ry")?;
            (rx >= 0. && ry >= 0.)
                .then(|| BoundingBox::new(cx - rx, cy - ry, cx + rx, cy + ry))
        }
        ShapeKind::Line => {
            let start = (num_attr(el, "x1")?, num_attr(el, "y1")?);
            let end = (num_attr(el, "x2")?, num_attr(el, "y2")?);
            Some(BoundingBox::from_corners(start, end))
        }
        ShapeKind::Polygon | ShapeKind::Polyline => match el.get_attr("points") {
            Some(points) => points_bbox(points)?,
            None => None,
        },
        ShapeKind::Path => el.get_attr("d").and_then(|d| path_bbox(d, path_policy)),
        ShapeKind::NonVisual | ShapeKind::Other => None,
    };
    Ok(bbox)
}
