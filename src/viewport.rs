use std::fmt;
use std::str::FromStr;

use crate::document::Element;
use crate::errors::{Error, Result};
use crate::geometry::BoundingBox;
use crate::types::{attr_split, fstr, strp, strp_unit_prefix};

/// Size assumed for a root element lacking usable width / height.
const DEFAULT_SIZE: f32 = 100.;

/// The `viewBox` of an SVG document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The viewport enclosing `bbox` with `padding` on every side.
    pub fn padded(bbox: &BoundingBox, padding: f32) -> Self {
        let padded = bbox.expanded(padding, padding);
        Self::new(padded.x1, padded.y1, padded.width(), padded.height())
    }
}

impl FromStr for ViewBox {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parts = attr_split(value).map(strp).collect::<Result<Vec<_>>>()?;
        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(Error::InvalidValue("viewBox".into(), value.into())),
        }
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            fstr(self.x),
            fstr(self.y),
            fstr(self.width),
            fstr(self.height)
        )
    }
}

/// Current extent of the document root, for reporting only.
///
/// Uses `viewBox` if present and valid, otherwise `width` / `height`
/// (ignoring any units) at the origin, each defaulting to 100.
pub fn original_size(root: &Element) -> ViewBox {
    if let Some(vb) = root.get_attr("viewBox").and_then(|v| v.parse().ok()) {
        return vb;
    }
    let dim = |name: &str| {
        root.get_attr(name)
            .and_then(strp_unit_prefix)
            .unwrap_or(DEFAULT_SIZE)
    };
    ViewBox::new(0., 0., dim("width"), dim("height"))
}

/// Rewrite the root element's viewBox, width and height from `viewbox`.
///
/// Any prior units on width / height are discarded.
pub fn apply_viewbox(root: &mut Element, viewbox: &ViewBox) {
    root.set_attr("viewBox", &viewbox.to_string());
    root.set_attr("width", &fstr(viewbox.width));
    root.set_attr("height", &fstr(viewbox.height));
}
