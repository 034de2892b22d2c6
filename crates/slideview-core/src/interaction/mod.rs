pub mod input;
pub mod machine;
pub mod state;

pub use input::{Button, Buttons, Modifiers, PointerEvent, WheelEvent};
pub use machine::{Interaction, InteractionMode, Response};
pub use state::{CursorShape, DragState, MarkerState, SelectionState};
