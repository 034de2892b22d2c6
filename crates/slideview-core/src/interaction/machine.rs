use tracing::debug;

use crate::geometry::{Point, Rect};
use crate::interaction::{CursorShape, DragState, MarkerState, PointerEvent, SelectionState};
use crate::viewport::transform::{drag_anchor, drag_offset};
use crate::viewport::{ViewGeometry, ViewportState};

/// Left-button gesture currently in progress. Marker editing runs alongside
/// any of these and is tracked separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Dragging,
    Selecting,
}

/// What a pointer event changed, for the canvas to turn into notifications.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// Image point under the pointer.
    pub image_point: Point,
    pub viewport_changed: bool,
    pub marker_changed: bool,
    pub redraw: bool,
    pub scrollbars_changed: bool,
    pub cursor: Option<CursorShape>,
    pub selection_finished: Option<Rect>,
}

/// Drag, selection and marker state driven by pointer input.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    drag: DragState,
    selection: SelectionState,
    marker: MarkerState,
    marker_editing: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        if self.drag.active {
            InteractionMode::Dragging
        } else if self.selection.active {
            InteractionMode::Selecting
        } else {
            InteractionMode::Idle
        }
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn marker(&self) -> &MarkerState {
        &self.marker
    }

    pub fn set_marker(&mut self, marker: MarkerState) {
        self.marker = marker;
    }

    /// Whether the middle button is currently moving the marker.
    pub fn marker_editing(&self) -> bool {
        self.marker_editing
    }

    /// Pointer press. Always asks synchronized canvases to follow and
    /// requests a redraw.
    pub fn press(
        &mut self,
        event: &PointerEvent,
        geometry: &ViewGeometry,
        viewport: &ViewportState,
    ) -> Response {
        let p = geometry.screen_to_image(viewport, event.position);
        let mut response = Response {
            image_point: p,
            viewport_changed: true,
            redraw: true,
            ..Default::default()
        };

        if event.buttons.primary {
            if event.shift() {
                self.drag.active = false;
                self.selection.begin(p);
                debug!(x = p.x, y = p.y, "Selection started");
            } else {
                self.selection.active = false;
                self.drag = DragState {
                    active: true,
                    anchor: drag_anchor(viewport, event.position),
                };
                response.cursor = Some(CursorShape::Move);
                debug!(x = event.position.x, y = event.position.y, "Drag started");
            }
        }

        self.marker_editing = event.buttons.middle;
        if event.buttons.middle {
            self.marker.place(p);
            response.marker_changed = true;
        }

        if event.buttons.secondary {
            self.marker.toggle();
            response.marker_changed = true;
            debug!(active = self.marker.active, "Marker toggled");
        }

        response
    }

    /// Pointer move. Moves the marker while the middle button is held, grows
    /// or abandons a selection, and pans while dragging.
    pub fn moved(
        &mut self,
        event: &PointerEvent,
        geometry: &ViewGeometry,
        viewport: &mut ViewportState,
    ) -> Response {
        let p = geometry.screen_to_image(viewport, event.position);
        let mut response = Response {
            image_point: p,
            ..Default::default()
        };

        self.marker_editing = event.buttons.middle;
        if event.buttons.middle {
            self.marker.place(p);
            response.marker_changed = true;
            response.redraw = true;
        }

        if event.buttons.primary && self.selection.active {
            if event.shift() {
                self.selection.rect.set_bottom_right(p);
            } else {
                // Releasing shift before the button drops the selection.
                self.selection.active = false;
                debug!("Selection abandoned");
            }
            response.redraw = true;
        } else if event.buttons.primary && self.drag.active {
            let (offset_x, offset_y) =
                drag_offset(viewport.scale, event.position, self.drag.anchor);
            viewport.set_offset(offset_x, offset_y);
            response.viewport_changed = true;
            response.scrollbars_changed = true;
            response.redraw = true;
        }

        response
    }

    /// Pointer release. Finalizes a selection or ends a drag. The caller
    /// refreshes its views after a finished selection.
    pub fn release(
        &mut self,
        event: &PointerEvent,
        geometry: &ViewGeometry,
        viewport: &ViewportState,
    ) -> Response {
        let p = geometry.screen_to_image(viewport, event.position);
        let mut response = Response {
            image_point: p,
            ..Default::default()
        };
        self.marker_editing = event.buttons.middle;

        if self.selection.active {
            self.selection.active = false;
            self.selection.rect.set_bottom_right(p);
            let center = self.selection.rect.center();
            debug!(x = center.x, y = center.y, "Selection finished");

            response.selection_finished = Some(self.selection.rect);
            response.viewport_changed = true;
        } else if self.drag.active {
            self.drag.active = false;
            response.cursor = Some(CursorShape::Arrow);
            debug!("Drag finished");
        }

        response
    }
}
