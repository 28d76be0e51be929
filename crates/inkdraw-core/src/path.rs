//! Path command buffer for drawn items.

use kurbo::{BezPath, Ellipse, Point, Rect, RoundedRect, Shape};
use serde::{Deserialize, Serialize};

/// Curve flattening tolerance when lowering shape ops to bezier segments.
const FLATTEN_TOLERANCE: f64 = 0.1;

/// A single path construction command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f64 },
    /// Ellipse inscribed in the given bounds.
    Ellipse(Rect),
}

impl PathOp {
    /// Bounding box of the command's operand points. Control points count
    /// toward the box, so a quad's bounds always cover its curve.
    pub fn bounds(&self) -> Rect {
        match self {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => Rect::from_points(*p, *p),
            PathOp::QuadTo { ctrl, to } => Rect::from_points(*ctrl, *to),
            PathOp::Rect(rect)
            | PathOp::RoundedRect { rect, .. }
            | PathOp::Ellipse(rect) => *rect,
        }
    }
}

/// Union of the operand bounds of a run of commands.
pub fn bounds_of(ops: &[PathOp]) -> Option<Rect> {
    let mut result: Option<Rect> = None;
    for op in ops {
        let bounds = op.bounds();
        result = Some(match result {
            Some(r) => r.union(bounds),
            None => bounds,
        });
    }
    result
}

/// An owned, append-only buffer of path commands.
///
/// Freehand strokes grow it one segment at a time; the drag-shape modes
/// truncate and rebuild it on every update instead of swapping items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPath {
    ops: Vec<PathOp>,
}

impl ItemPath {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// The recorded commands, in construction order.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    /// Append a single command.
    pub fn push(&mut self, op: PathOp) {
        self.ops.push(op);
    }

    /// Append a run of commands.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = PathOp>) {
        self.ops.extend(ops);
    }

    /// Truncate and rebuild from the given commands.
    pub fn rebuild(&mut self, ops: impl IntoIterator<Item = PathOp>) {
        self.ops.clear();
        self.ops.extend(ops);
    }

    /// Bounding box of all operand points, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        bounds_of(&self.ops)
    }

    /// Lower to a `kurbo::BezPath` for an external rasterizer.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => path.move_to(p),
                PathOp::LineTo(p) => path.line_to(p),
                PathOp::QuadTo { ctrl, to } => path.quad_to(ctrl, to),
                PathOp::Rect(rect) => {
                    path.extend(rect.path_elements(FLATTEN_TOLERANCE));
                }
                PathOp::RoundedRect { rect, radius } => {
                    let rounded = RoundedRect::from_rect(rect, radius);
                    path.extend(rounded.path_elements(FLATTEN_TOLERANCE));
                }
                PathOp::Ellipse(rect) => {
                    let ellipse = Ellipse::from_rect(rect);
                    path.extend(ellipse.path_elements(FLATTEN_TOLERANCE));
                }
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let path = ItemPath::new();
        assert!(path.is_empty());
        assert!(path.bounds().is_none());
        assert_eq!(path.to_bez_path().elements().len(), 0);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut path = ItemPath::new();
        path.push(PathOp::MoveTo(Point::new(0.0, 0.0)));
        path.push(PathOp::LineTo(Point::new(10.0, 0.0)));
        path.extend([PathOp::QuadTo {
            ctrl: Point::new(15.0, 5.0),
            to: Point::new(20.0, 0.0),
        }]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.ops()[0], PathOp::MoveTo(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_rebuild_truncates() {
        let mut path = ItemPath::new();
        path.push(PathOp::MoveTo(Point::new(0.0, 0.0)));
        path.push(PathOp::LineTo(Point::new(5.0, 5.0)));

        path.rebuild([PathOp::Rect(Rect::new(0.0, 0.0, 10.0, 20.0))]);
        assert_eq!(path.len(), 1);
        assert_eq!(path.ops()[0], PathOp::Rect(Rect::new(0.0, 0.0, 10.0, 20.0)));

        path.rebuild([]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_bounds_include_control_points() {
        let ops = [
            PathOp::MoveTo(Point::new(0.0, 0.0)),
            PathOp::QuadTo {
                ctrl: Point::new(50.0, -30.0),
                to: Point::new(10.0, 0.0),
            },
        ];
        let bounds = bounds_of(&ops).unwrap();
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - -30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_ops_lower_to_curves() {
        let mut path = ItemPath::new();
        path.push(PathOp::Ellipse(Rect::new(0.0, 0.0, 20.0, 10.0)));
        let bez = path.to_bez_path();
        assert!(!bez.elements().is_empty());

        let mut rect_path = ItemPath::new();
        rect_path.push(PathOp::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!rect_path.to_bez_path().elements().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut path = ItemPath::new();
        path.push(PathOp::MoveTo(Point::new(1.0, 2.0)));
        path.push(PathOp::QuadTo {
            ctrl: Point::new(3.0, 4.0),
            to: Point::new(5.0, 6.0),
        });
        let json = serde_json::to_string(&path).unwrap();
        let back: ItemPath = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
