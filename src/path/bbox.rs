use crate::errors::Result;
use crate::geometry::{BoundingBox, BoundingBoxBuilder};

use super::syntax::PathTokens;

/// Number of operands consumed per repetition of each path command.
fn command_arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'C' => 6,
        'S' | 'Q' => 4,
        'A' => 7,
        _ => 0, // 'Z'
    }
}

/// Command-aware path walker.
///
/// Curve control points are included in the bounds, so curves yield a
/// superset of their true extent. Arcs contribute only their endpoint.
struct PathBoundsParser {
    tokens: PathTokens,
    // current position, updated as commands are processed
    cursor: (f32, f32),
    // location to return to for 'Z'/'z' commands
    subpath_start: (f32, f32),
    bounds: BoundingBoxBuilder,
}

impl PathBoundsParser {
    fn new(data: &str) -> Self {
        Self {
            tokens: PathTokens::new(data),
            cursor: (0., 0.),
            subpath_start: (0., 0.),
            bounds: BoundingBoxBuilder::new(),
        }
    }

    fn emit(&mut self, point: (f32, f32)) {
        self.bounds.add_point(point);
    }

    fn process(&mut self) -> Result<()> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            let command = self.tokens.read_command()?;
            let arity = command_arity(command);
            if arity == 0 {
                self.cursor = self.subpath_start;
                continue;
            }
            let mut first = true;
            while let Some(operands) = self.read_group(command, arity)? {
                self.apply(command, first, &operands);
                first = false;
            }
        }
        Ok(())
    }

    /// Read one operand group for `command`.
    ///
    /// Returns `None` if the data ends, or the next command starts, before
    /// the group is complete; any partial group is discarded.
    fn read_group(&mut self, command: char, arity: usize) -> Result<Option<Vec<f32>>> {
        let mut operands = Vec::with_capacity(arity);
        for idx in 0..arity {
            if self.tokens.at_end() || self.tokens.at_command() {
                return Ok(None);
            }
            let is_arc_flag = command.eq_ignore_ascii_case(&'a') && (idx == 3 || idx == 4);
            operands.push(if is_arc_flag {
                self.tokens.read_flag()?
            } else {
                self.tokens.read_number()?
            });
        }
        Ok(Some(operands))
    }

    fn apply(&mut self, command: char, first: bool, ops: &[f32]) {
        let (px, py) = self.cursor;
        // origin for relative coordinates; all points of a group are relative
        // to the position at the start of that group.
        let (bx, by) = if command.is_ascii_lowercase() {
            (px, py)
        } else {
            (0., 0.)
        };
        let point = |x: f32, y: f32| (bx + x, by + y);

        match command.to_ascii_uppercase() {
            'M' => {
                // "If a moveto is followed by multiple pairs of coordinates,
                // the subsequent pairs are treated as implicit lineto commands."
                let xy = point(ops[0], ops[1]);
                if first {
                    self.subpath_start = xy;
                }
                self.emit(xy);
                self.cursor = xy;
            }
            'L' | 'T' => {
                let xy = point(ops[0], ops[1]);
                self.emit(xy);
                self.cursor = xy;
            }
            'H' => {
                let xy = (bx + ops[0], py);
                self.emit(xy);
                self.cursor = xy;
            }
            'V' => {
                let xy = (px, by + ops[0]);
                self.emit(xy);
                self.cursor = xy;
            }
            'C' => {
                // (x1 y1 x2 y2 x y)+
                self.emit(point(ops[0], ops[1]));
                self.emit(point(ops[2], ops[3]));
                let end = point(ops[4], ops[5]);
                self.emit(end);
                self.cursor = end;
            }
            'S' | 'Q' => {
                // (x2 y2 x y)+ / (x1 y1 x y)+
                self.emit(point(ops[0], ops[1]));
                let end = point(ops[2], ops[3]);
                self.emit(end);
                self.cursor = end;
            }
            'A' => {
                // (rx ry x-axis-rotation large-arc-flag sweep-flag x y)+
                let end = point(ops[5], ops[6]);
                self.emit(end);
                self.cursor = end;
            }
            _ => {}
        }
    }
}

/// Bounds of path data, interpreting each command's operands by its arity
/// and absolute / relative semantics.
///
/// Path data which is invalid part-way through keeps the bounds of the
/// points read before the error.
pub fn command_aware_bbox(data: &str) -> Option<BoundingBox> {
    let mut parser = PathBoundsParser::new(data);
    if let Err(err) = parser.process() {
        tracing::warn!(%err, path = data, "invalid path data; using bounds up to the error");
    }
    parser.bounds.build()
}
