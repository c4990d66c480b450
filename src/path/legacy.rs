use itertools::Itertools;

use crate::geometry::{BoundingBox, BoundingBoxBuilder};

use super::syntax::PathTokens;

/// Historical path bounds: every number in the path data, in order, paired
/// up as (x, y) with no regard to commands.
///
/// Single-operand commands (`H`, `V`) and arc flags shift the pairing of
/// every following number, so results may be arbitrarily wrong for such
/// paths.
pub fn naive_pairs_bbox(data: &str) -> Option<BoundingBox> {
    let mut tokens = PathTokens::new(data);
    let mut numbers = Vec::new();
    while !tokens.at_end() {
        if tokens.at_number_start() {
            if let Ok(n) = tokens.read_number() {
                numbers.push(n);
            }
        } else {
            tokens.advance();
        }
    }

    let mut bounds = BoundingBoxBuilder::new();
    for (x, y) in numbers.into_iter().tuples() {
        bounds.add_point((x, y));
    }
    bounds.build()
}
