use std::ops::Add;

use crate::errors::{Error, Result};
use crate::types::{attr_split, strp};

/// Translation offset accumulated from the root element down to a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Self = Self { dx: 0., dy: 0. };

    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.dx + other.dx, self.dy + other.dy)
    }
}

/// A single entry in a `transform` attribute list, e.g. `rotate(45, 10, 10)`.
#[derive(Clone, Debug, PartialEq)]
struct TransformItem {
    name: String,
    args: Vec<f32>,
}

/// Split a transform list such as `translate(10,20) scale(2)` into items.
fn parse_transform_list(value: &str) -> Result<Vec<TransformItem>> {
    value
        .split_inclusive(')')
        .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']).trim())
        .filter(|v| !v.is_empty())
        .map(|v| {
            let (name, rest) = v
                .split_once('(')
                .ok_or_else(|| Error::Parse(format!("No transform args: '{v}'")))?;
            let args = rest
                .strip_suffix(')')
                .ok_or_else(|| Error::Parse(format!("No closing bracket: '{v}'")))?;
            Ok(TransformItem {
                name: name.trim().to_string(),
                args: attr_split(args).map(strp).collect::<Result<Vec<_>>>()?,
            })
        })
        .collect()
}

/// Translation given by a `transform` attribute value.
///
/// Only a single `translate(tx [ty])` is understood (`ty` defaults to 0);
/// an empty value is no translation. Anything else (rotate, scale, skew,
/// matrix, lists of several transforms, invalid syntax) returns `None`.
pub fn parse_translate(value: &str) -> Option<Offset> {
    if value.trim().is_empty() {
        return Some(Offset::ZERO);
    }
    match parse_transform_list(value).ok()?.as_slice() {
        [TransformItem { name, args }] if name == "translate" => match args.as_slice() {
            [tx] => Some(Offset::new(*tx, 0.)),
            [tx, ty] => Some(Offset::new(*tx, *ty)),
            _ => None,
        },
        _ => None,
    }
}
