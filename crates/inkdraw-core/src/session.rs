//! Drawing session: the gesture state machine and render list provider.

use crate::brush::{BlendMode, Brush};
use crate::event::{DrawingObserver, Redraw};
use crate::history::HistoryStore;
use crate::input::{GestureEvent, TouchKind};
use crate::item::DrawnItem;
use crate::path::{self, PathOp};
use crate::shapes::{self, ShapeKind};
use crate::smoothing;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// How pointer gestures are interpreted.
///
/// `Line` is best-effort: hosts that double-buffer previous frames may see
/// stale previews while the drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// Freehand drawing with midpoint smoothing.
    #[default]
    Draw,
    /// Straight line from the gesture origin to the pointer.
    Line,
    /// Axis-aligned ellipse dragged between two corners.
    Ellipse,
    /// Axis-aligned rectangle dragged between two corners.
    Rect,
}

/// The two-sample lookback window owned by an active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GesturePoints {
    /// Where the gesture began. Anchor corner for the drag shapes.
    pub first: Point,
    /// The latest sample.
    pub current: Point,
    /// The sample before `current`.
    pub previous: Point,
    /// The sample before `previous`.
    pub previous_previous: Point,
}

impl GesturePoints {
    fn starting_at(point: Point) -> Self {
        Self {
            first: point,
            current: point,
            previous: point,
            previous_previous: point,
        }
    }

    fn advance(&mut self, point: Point) {
        self.previous_previous = self.previous;
        self.previous = self.current;
        self.current = point;
    }
}

enum GestureState {
    Idle,
    Active {
        mode: DrawMode,
        points: GesturePoints,
    },
}

/// The drawing surface core: consumes gesture events, grows the in-progress
/// item through the smoothing engine or the shape builder, and exposes the
/// committed item list with undo/redo.
///
/// Single-threaded and event-driven; at most one gesture is active at a
/// time, and the in-progress item belongs to the session until the gesture
/// ends.
pub struct DrawingSession {
    /// Gesture interpretation applied at the next begin.
    pub draw_mode: DrawMode,
    /// Whether rect/ellipse gestures produce filled paths.
    pub should_fill_path: bool,
    /// Master switch; when false, begin and update events are ignored.
    pub is_enabled: bool,
    /// Touch kinds allowed to start a gesture.
    pub allowed_touch_kinds: Vec<TouchKind>,
    brush: Brush,
    previous_brush: Brush,
    state: GestureState,
    history: HistoryStore,
    observer: Option<Box<dyn DrawingObserver>>,
    pending_redraw: Option<Redraw>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    /// Create an idle session with the default brush, freehand mode, and
    /// all touch kinds allowed.
    pub fn new() -> Self {
        Self {
            draw_mode: DrawMode::Draw,
            should_fill_path: false,
            is_enabled: true,
            allowed_touch_kinds: vec![TouchKind::Finger, TouchKind::Pencil],
            brush: Brush::default(),
            previous_brush: Brush::default(),
            state: GestureState::Idle,
            history: HistoryStore::new(),
            observer: None,
            pending_redraw: None,
        }
    }

    /// The brush that will be snapshotted into the next gesture's item.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Set the live brush, remembering the one it replaces.
    pub fn set_brush(&mut self, brush: Brush) {
        self.previous_brush = self.brush;
        self.brush = brush;
    }

    /// Flip the live brush between normal compositing and the eraser.
    pub fn toggle_eraser(&mut self) {
        let mut brush = self.brush;
        brush.blend_mode = match brush.blend_mode {
            BlendMode::Clear => BlendMode::Normal,
            BlendMode::Normal => BlendMode::Clear,
        };
        self.set_brush(brush);
    }

    /// Swap the live brush with the previously remembered one.
    pub fn restore_previous_brush(&mut self) {
        self.set_brush(self.previous_brush);
    }

    /// Install the gesture observer.
    pub fn set_observer(&mut self, observer: impl DrawingObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the gesture observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Whether a gesture is currently active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// The active gesture's point window, if any.
    pub fn active_points(&self) -> Option<&GesturePoints> {
        match &self.state {
            GestureState::Active { points, .. } => Some(points),
            GestureState::Idle => None,
        }
    }

    /// Dispatch one gesture event to the matching handler.
    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Begin { position, touch } => {
                self.on_gesture_begin(position, touch);
            }
            GestureEvent::Update { position } => self.on_gesture_update(position),
            GestureEvent::End { position } => self.on_gesture_end(position),
            GestureEvent::Cancel => self.on_gesture_cancel(),
        }
    }

    /// Try to start a gesture. Returns whether it was accepted.
    ///
    /// Rejections are silent no-ops: a disabled session, a filtered touch
    /// kind, a gate-check veto, or an already-active gesture.
    pub fn on_gesture_begin(&mut self, position: Point, touch: TouchKind) -> bool {
        if !self.is_enabled || !self.allowed_touch_kinds.contains(&touch) {
            return false;
        }
        if self.is_active() {
            log::warn!("gesture begin ignored: a gesture is already active");
            return false;
        }
        if let Some(observer) = self.observer.as_deref_mut() {
            if !observer.on_gate_check(position, touch) {
                return false;
            }
            observer.on_begin(position);
        }

        let is_filled = match self.draw_mode {
            DrawMode::Rect | DrawMode::Ellipse => self.should_fill_path,
            DrawMode::Draw | DrawMode::Line => false,
        };
        // The provisional head goes through commit so stale redo data is
        // discarded the moment a new stroke starts.
        self.history.commit(DrawnItem::new(self.brush, is_filled));
        self.state = GestureState::Active {
            mode: self.draw_mode,
            points: GesturePoints::starting_at(position),
        };
        true
    }

    /// Feed the next sample into the active gesture. No-op while idle.
    pub fn on_gesture_update(&mut self, position: Point) {
        if !self.is_enabled {
            return;
        }
        let (mode, points) = match &mut self.state {
            GestureState::Active { mode, points } => {
                points.advance(position);
                (*mode, *points)
            }
            GestureState::Idle => return,
        };
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_update(position);
        }

        match mode {
            DrawMode::Draw => {
                let segment = smoothing::smoothed_segment(
                    points.previous_previous,
                    points.previous,
                    points.current,
                );
                self.grow_active_path(segment);
            }
            DrawMode::Line => {
                self.rebuild_active_path(shapes::line_outline(points.first, points.current));
            }
            DrawMode::Ellipse => {
                self.rebuild_active_path(shapes::shape_outline(
                    ShapeKind::Ellipse,
                    points.first,
                    points.current,
                ));
            }
            DrawMode::Rect => {
                self.rebuild_active_path(shapes::shape_outline(
                    ShapeKind::Rectangle,
                    points.first,
                    points.current,
                ));
            }
        }
    }

    /// Finish the active gesture. No-op while idle.
    pub fn on_gesture_end(&mut self, position: Point) {
        if !self.is_active() {
            return;
        }
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_end(position);
        }
        self.finish_gesture();
    }

    /// Cancel the active gesture. The partially drawn item stays as-is;
    /// cancellation does not roll it back. No-op while idle.
    pub fn on_gesture_cancel(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_cancel();
        }
        self.finish_gesture();
    }

    fn finish_gesture(&mut self) {
        self.state = GestureState::Idle;
        self.history.finalize();
    }

    /// The committed items in back-to-front order, for the rasterizer.
    ///
    /// Each item draws with round caps and joins, `brush.width` line
    /// width, the brush blend mode and opacity, and is filled or stroked
    /// with `brush.color` according to `is_filled`.
    pub fn render_list(&self) -> &[DrawnItem] {
        self.history.items()
    }

    /// Read-only access to the history store.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the most recent item. Refused while a gesture is active.
    pub fn undo(&mut self) -> bool {
        if self.guard_history_mutation("undo") {
            return false;
        }
        if self.history.undo() {
            self.push_redraw(Redraw::Full);
            true
        } else {
            false
        }
    }

    /// Redo the next undone item. Refused while a gesture is active.
    pub fn redo(&mut self) -> bool {
        if self.guard_history_mutation("redo") {
            return false;
        }
        if self.history.redo() {
            self.push_redraw(Redraw::Full);
            true
        } else {
            false
        }
    }

    /// Clear the canvas. The redo tail intentionally survives; see
    /// [`HistoryStore::clear`]. Refused while a gesture is active.
    pub fn clear(&mut self) {
        if self.guard_history_mutation("clear") {
            return;
        }
        self.history.clear();
        self.push_redraw(Redraw::Full);
    }

    /// Replace the canvas contents with externally loaded items, discarding
    /// all prior history. Refused while a gesture is active.
    pub fn display(&mut self, items: Vec<DrawnItem>) {
        if self.guard_history_mutation("display") {
            return;
        }
        self.history.replace_all(items);
        self.push_redraw(Redraw::Full);
    }

    /// Drain the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.pending_redraw.take()
    }

    // Mutating history under an active gesture would let the session grow
    // the path of an older committed item.
    fn guard_history_mutation(&self, operation: &str) -> bool {
        if self.is_active() {
            log::warn!("{operation} ignored: a gesture is active");
            return true;
        }
        false
    }

    fn grow_active_path(&mut self, ops: [PathOp; 2]) {
        let dirty = path::bounds_of(&ops);
        let width = match self.history.active_item_mut() {
            Some(item) => {
                let width = item.brush.width;
                item.path.extend(ops);
                width
            }
            None => return,
        };
        if let Some(bounds) = dirty {
            // Inflation covers round caps and joins poking past the
            // mathematical path.
            self.push_redraw(Redraw::Region(bounds.inflate(2.0 * width, 2.0 * width)));
        }
    }

    fn rebuild_active_path(&mut self, ops: Vec<PathOp>) {
        let Some(item) = self.history.active_item_mut() else {
            return;
        };
        item.path.rebuild(ops);
        // Replacing the preview invalidates pixels painted on earlier
        // updates, so the whole surface is repainted.
        self.push_redraw(Redraw::Full);
    }

    fn push_redraw(&mut self, redraw: Redraw) {
        self.pending_redraw = Some(match self.pending_redraw.take() {
            Some(pending) => pending.merge(redraw),
            None => redraw,
        });
    }
}
