//! Moving-midpoint smoothing for freehand strokes.
//!
//! Each update contributes one quadratic segment running between the
//! midpoints of the last two sample intervals, with the previous sample as
//! control point. Discrete samples come out as a visually continuous curve
//! without retaining the full point history.

use crate::path::PathOp;
use kurbo::Point;

/// The smoothed segment for the latest sample window.
///
/// Consecutive segments join seamlessly: this segment starts at the
/// midpoint where the previous one ended.
pub fn smoothed_segment(
    previous_previous: Point,
    previous: Point,
    current: Point,
) -> [PathOp; 2] {
    let mid1 = previous.midpoint(previous_previous);
    let mid2 = current.midpoint(previous);
    [
        PathOp::MoveTo(mid1),
        PathOp::QuadTo {
            ctrl: previous,
            to: mid2,
        },
    ]
}
