//! InkDraw Core Library
//!
//! Platform-agnostic stroke-construction and history engine for the
//! InkDraw drawing surface: pointer samples in, smoothed vector paths and
//! an undo/redo-capable render list out. Event delivery, rasterization,
//! and persistence live in the host.

pub mod brush;
pub mod event;
pub mod history;
pub mod input;
pub mod item;
pub mod path;
pub mod session;
pub mod shapes;
pub mod smoothing;

pub use brush::{BlendMode, Brush, BrushError, Color};
pub use event::{DrawingObserver, Redraw};
pub use history::HistoryStore;
pub use input::{GestureEvent, TouchKind};
pub use item::{items_from_json, items_to_json, DrawnItem, ItemId};
pub use path::{ItemPath, PathOp};
pub use session::{DrawMode, DrawingSession, GesturePoints};
pub use shapes::ShapeKind;
