//! Change notifications and the session observer.

use crate::input::TouchKind;
use kurbo::{Point, Rect};

/// A pending redraw request for the external rasterizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Redraw {
    /// Repaint everything.
    Full,
    /// Repaint the given region only.
    Region(Rect),
}

impl Redraw {
    /// Combine two requests. Regions union; anything combined with a full
    /// redraw stays full.
    pub fn merge(self, other: Redraw) -> Redraw {
        match (self, other) {
            (Redraw::Region(a), Redraw::Region(b)) => Redraw::Region(a.union(b)),
            _ => Redraw::Full,
        }
    }
}

/// Observer of gesture lifecycle events.
///
/// The gate check is the only method with a return value: returning `false`
/// rejects the gesture before any state changes. Every method has a default
/// so hosts implement only what they need.
pub trait DrawingObserver {
    /// Asked before a gesture is accepted. Return `false` to reject it.
    fn on_gate_check(&mut self, _position: Point, _touch: TouchKind) -> bool {
        true
    }

    /// A gesture was accepted and is now active.
    fn on_begin(&mut self, _position: Point) {}

    /// The active gesture received a new sample.
    fn on_update(&mut self, _position: Point) {}

    /// The active gesture finished.
    fn on_end(&mut self, _position: Point) {}

    /// The active gesture was cancelled by the platform.
    fn on_cancel(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_regions_unions() {
        let a = Redraw::Region(Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = Redraw::Region(Rect::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(a.merge(b), Redraw::Region(Rect::new(0.0, 0.0, 20.0, 20.0)));
    }

    #[test]
    fn test_merge_full_absorbs() {
        let region = Redraw::Region(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(region.merge(Redraw::Full), Redraw::Full);
        assert_eq!(Redraw::Full.merge(region), Redraw::Full);
        assert_eq!(Redraw::Full.merge(Redraw::Full), Redraw::Full);
    }
}
