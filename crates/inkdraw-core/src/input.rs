//! Pointer-source vocabulary consumed by the drawing session.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The kind of pointer producing samples. Used by the session's
/// touch-kind allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchKind {
    Finger,
    Pencil,
}

/// One gesture event from the external pointer-event source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Begin { position: Point, touch: TouchKind },
    Update { position: Point },
    End { position: Point },
    Cancel,
}
