mod bbox;

pub use bbox::{BoundingBox, BoundingBoxBuilder};
