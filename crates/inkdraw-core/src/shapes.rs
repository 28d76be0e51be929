//! Outline construction for drag shapes.

use crate::path::PathOp;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Drag shapes anchored between a fixed corner and the live pointer.
///
/// `RoundedRectangle` is part of the shape vocabulary but no draw mode
/// currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle { radius: f64 },
    Ellipse,
}

/// Outline commands for a drag shape spanning the two corners.
///
/// Returns no commands while the normalized bounds still have zero width
/// or height, so a drag that has not left its origin column or row yields
/// no degenerate shape.
pub fn shape_outline(kind: ShapeKind, p1: Point, p2: Point) -> Vec<PathOp> {
    let width = (p1.x - p2.x).abs();
    let height = (p1.y - p2.y).abs();
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let bounds = Rect::from_points(p1, p2);
    let op = match kind {
        ShapeKind::Rectangle => PathOp::Rect(bounds),
        ShapeKind::RoundedRectangle { radius } => PathOp::RoundedRect {
            rect: bounds,
            radius,
        },
        ShapeKind::Ellipse => PathOp::Ellipse(bounds),
    };
    vec![op]
}

/// Outline commands for a straight line between two points.
pub fn line_outline(from: Point, to: Point) -> Vec<PathOp> {
    vec![PathOp::MoveTo(from), PathOp::LineTo(to)]
}
