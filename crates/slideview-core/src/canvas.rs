use std::sync::mpsc;

use tracing::{debug, info};

use crate::config::ViewerConfig;
use crate::events::{CanvasEvent, EventBus};
use crate::geometry::{Point, Rect, Size};
use crate::interaction::{
    DragState, Interaction, InteractionMode, MarkerState, PointerEvent, Response, SelectionState,
    WheelEvent,
};
use crate::layers::{Layer, LayerStack, SizedLayer, Slides};
use crate::render::{RenderFrame, RenderGuard, Renderer};
use crate::session::InputEvent;
use crate::viewport::{ViewGeometry, ViewportState, ZoomController, ZoomDirection};

/// Window hosting a canvas, resized by [`Canvas::fit_container_to_image`].
pub trait HostWindow {
    fn size(&self) -> Size;
    fn resize(&mut self, size: Size);
}

/// Viewer widget state: a layer stack seen through a viewport, driven by
/// pointer input and zoom commands.
///
/// All mutation happens through `&mut self` on the thread that owns the
/// canvas; observers learn about changes through [`Canvas::subscribe`].
pub struct Canvas<L: Layer = SizedLayer> {
    slides: Slides<L>,
    viewport: ViewportState,
    interaction: Interaction,
    zoom: ZoomController,
    size: Size,
    focus: Point,
    events: EventBus,
    background_gray: f32,
    checkerboard_size: u32,
}

impl<L: Layer> Default for Canvas<L> {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl<L: Layer> Canvas<L> {
    pub fn new(config: &ViewerConfig) -> Self {
        let mut viewport = ViewportState::default();
        viewport.set_scale(config.zoom.default_scale);

        Self {
            slides: Slides::new(),
            viewport,
            interaction: Interaction::new(),
            zoom: ZoomController::new(config.zoom.step),
            size: config.canvas_size(),
            focus: Point::ZERO,
            events: EventBus::new(),
            background_gray: config.render.background_gray,
            checkerboard_size: config.render.checkerboard_size,
        }
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<CanvasEvent> {
        self.events.subscribe()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The host resized the canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = Size::new(width, height);
        debug!(size = %self.size, "Canvas resized");
        self.events.emit(CanvasEvent::ScrollbarRefresh);
        self.events.emit(CanvasEvent::RedrawRequested);
    }

    pub fn geometry(&self) -> ViewGeometry {
        ViewGeometry::from_stack(self.size, &self.slides)
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Adopt a viewport from elsewhere, e.g. a synchronized canvas. Ignored
    /// while no layer is loaded. Does not re-broadcast.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        if self.slides.available() {
            self.viewport = viewport.sanitized();
            self.events.emit(CanvasEvent::RedrawRequested);
        }
    }

    /// Scrollbars moved the view.
    pub fn update_offset_from_scrollbar(&mut self, offset_x: f64, offset_y: f64) {
        self.viewport.set_offset(offset_x, offset_y);
        self.ask_synchronization();
        self.events.emit(CanvasEvent::RedrawRequested);
    }

    pub fn marker(&self) -> MarkerState {
        *self.interaction.marker()
    }

    pub fn set_marker(&mut self, marker: MarkerState) {
        self.interaction.set_marker(marker);
        self.events.emit(CanvasEvent::RedrawRequested);
    }

    pub fn selection(&self) -> SelectionState {
        *self.interaction.selection()
    }

    pub fn drag(&self) -> DragState {
        *self.interaction.drag()
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn marker_editing(&self) -> bool {
        self.interaction.marker_editing()
    }

    /// Last pointer position on the canvas.
    pub fn focus(&self) -> Point {
        self.focus
    }

    pub fn slides(&self) -> &Slides<L> {
        &self.slides
    }

    pub fn layer(&self) -> Option<&L> {
        self.slides.current()
    }

    pub fn screen_to_image(&self, p: Point) -> Point {
        self.geometry().screen_to_image(&self.viewport, p)
    }

    pub fn image_to_screen(&self, p: Point) -> Point {
        self.geometry().image_to_screen(&self.viewport, p)
    }

    pub fn visible_region(&self) -> Option<Rect> {
        self.geometry().visible_region(&self.viewport)
    }

    // ---------------------------------------------------------------------
    // Layers
    // ---------------------------------------------------------------------

    pub fn add_layer(&mut self, layer: L) {
        self.slides.add(layer);
        self.update_canvas();
        self.update_layer();
    }

    pub fn previous_layer(&mut self) {
        self.slides.backward();
        self.update_layer();
        self.update_canvas();
    }

    pub fn next_layer(&mut self) {
        self.slides.forward();
        self.update_layer();
        self.update_canvas();
    }

    pub fn remove_current_layer(&mut self) -> Option<L> {
        let removed = self.slides.remove();
        if let Some(ref layer) = removed {
            info!(name = layer.name(), remaining = self.slides.len(), "Layer removed");
            self.update_canvas();
        }
        removed
    }

    /// Layer content changed: refresh layer views and the coordinate readout.
    pub fn update_layer(&mut self) {
        self.events.emit(CanvasEvent::LayerRefresh);
        let p = self.screen_to_image(self.focus);
        self.events.emit(CanvasEvent::CoordinateUnderCursor(p));
    }

    /// Canvas content changed: refresh title, scrollbars and marker views and
    /// redraw.
    pub fn update_canvas(&mut self) {
        self.events.emit(CanvasEvent::TitleRefresh);
        self.events.emit(CanvasEvent::ScrollbarRefresh);
        self.events
            .emit(CanvasEvent::MarkerChanged(*self.interaction.marker()));
        self.events.emit(CanvasEvent::RedrawRequested);
    }

    /// Broadcast the current viewport so synchronized canvases follow.
    pub fn ask_synchronization(&mut self) {
        self.events.emit(CanvasEvent::ViewportChanged(self.viewport));
    }

    // ---------------------------------------------------------------------
    // Zoom
    // ---------------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.zoom_relative(self.focus, ZoomDirection::In);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_relative(self.focus, ZoomDirection::Out);
    }

    /// One zoom step anchored at screen point `anchor`.
    pub fn zoom_relative(&mut self, anchor: Point, direction: ZoomDirection) {
        let geometry = self.geometry();
        if self
            .zoom
            .zoom_relative(&mut self.viewport, &geometry, anchor, direction)
        {
            self.viewport_changed();
        }
    }

    pub fn set_zoom(&mut self, scale: f64) {
        self.zoom.zoom_absolute(&mut self.viewport, scale);
        self.viewport_changed();
    }

    pub fn fit_to_window(&mut self) {
        let geometry = self.geometry();
        if self.zoom.fit_to_window(&mut self.viewport, &geometry) {
            info!(scale = self.viewport.scale, "Fit zoom to window");
            self.viewport_changed();
        }
    }

    /// Resize `host` so the canvas shows the scaled image exactly, then center.
    pub fn fit_container_to_image(&mut self, host: &mut impl HostWindow) {
        let geometry = self.geometry();
        let Some(size) = self
            .zoom
            .container_size_for_image(&self.viewport, &geometry, host.size())
        else {
            return;
        };
        info!(size = %size, "Fit window to image");
        host.resize(size);
        self.zoom.center(&mut self.viewport);
        self.viewport_changed();
    }

    pub fn center_image(&mut self) {
        self.zoom.center(&mut self.viewport);
        self.viewport_changed();
    }

    fn viewport_changed(&mut self) {
        self.update_canvas();
        self.ask_synchronization();
    }

    // ---------------------------------------------------------------------
    // Pointer input
    // ---------------------------------------------------------------------

    pub fn mouse_press(&mut self, event: &PointerEvent) {
        let geometry = self.geometry();
        let response = self.interaction.press(event, &geometry, &self.viewport);
        self.apply(response, false);
    }

    pub fn mouse_move(&mut self, event: &PointerEvent) {
        let geometry = self.geometry();
        let response = self
            .interaction
            .moved(event, &geometry, &mut self.viewport);
        self.apply(response, true);
        self.focus = event.position;
    }

    pub fn mouse_release(&mut self, event: &PointerEvent) {
        let geometry = self.geometry();
        let response = self.interaction.release(event, &geometry, &self.viewport);
        if let Some(rect) = response.selection_finished {
            if let Some(fraction) = geometry
                .image()
                .and_then(|image| self.interaction.selection().fraction_of(image))
            {
                debug!(
                    center_x = rect.center().x,
                    center_y = rect.center().y,
                    fraction_x = fraction.0,
                    fraction_y = fraction.1,
                    "Selection"
                );
            }
            self.update_canvas();
        }
        self.apply(response, false);
    }

    /// Wheel over the canvas zooms one step around the pointer.
    pub fn wheel(&mut self, event: &WheelEvent) {
        if !self.slides.available() {
            return;
        }
        if let Some(direction) = ZoomDirection::from_delta(event.delta) {
            self.zoom_relative(event.position, direction);
        }
    }

    fn apply(&mut self, response: Response, report_coordinate: bool) {
        if let Some(shape) = response.cursor {
            self.events.emit(CanvasEvent::CursorChanged(shape));
        }
        if response.marker_changed {
            self.events
                .emit(CanvasEvent::MarkerChanged(*self.interaction.marker()));
        }
        if let Some(rect) = response.selection_finished {
            self.events.emit(CanvasEvent::SelectionFinished(rect));
        }
        if response.viewport_changed {
            self.ask_synchronization();
        }
        if response.scrollbars_changed {
            self.events.emit(CanvasEvent::ScrollbarRefresh);
        }
        if response.redraw {
            self.events.emit(CanvasEvent::RedrawRequested);
        }
        if report_coordinate {
            self.events
                .emit(CanvasEvent::CoordinateUnderCursor(response.image_point));
        }
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Snapshot of what the renderer should draw right now.
    pub fn render_frame(&self) -> RenderFrame {
        let geometry = self.geometry();
        let selection = self.interaction.selection();
        RenderFrame {
            viewport: self.viewport,
            canvas: self.size,
            image: geometry.image(),
            layer_index: self.slides.current_index(),
            visible: geometry.visible_region(&self.viewport),
            marker: *self.interaction.marker(),
            selection: selection.active.then_some(selection.rect),
            background_gray: self.background_gray,
            checkerboard_size: self.checkerboard_size,
        }
    }

    /// Run one render pass. Waits while another pass, on any canvas, is in
    /// flight on another thread.
    ///
    /// The guard is not reentrant: a renderer must not call `paint` again
    /// from inside [`Renderer::render`].
    pub fn paint(&self, renderer: &mut impl Renderer) {
        let frame = self.render_frame();
        let _guard = RenderGuard::acquire();
        renderer.render(&frame);
    }

    // ---------------------------------------------------------------------
    // Scripted input
    // ---------------------------------------------------------------------

    /// Route one scripted step to the matching operation.
    pub fn dispatch(&mut self, event: &InputEvent, host: &mut impl HostWindow) {
        match event {
            InputEvent::Press { .. } => {
                if let Some(p) = event.pointer() {
                    self.mouse_press(&p);
                }
            }
            InputEvent::Move { .. } => {
                if let Some(p) = event.pointer() {
                    self.mouse_move(&p);
                }
            }
            InputEvent::Release { .. } => {
                if let Some(p) = event.pointer() {
                    self.mouse_release(&p);
                }
            }
            InputEvent::Wheel { .. } => {
                if let Some(w) = event.wheel() {
                    self.wheel(&w);
                }
            }
            InputEvent::Resize { width, height } => self.resize(*width, *height),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::SetZoom { scale } => self.set_zoom(*scale),
            InputEvent::FitToWindow => self.fit_to_window(),
            InputEvent::FitToImage => self.fit_container_to_image(host),
            InputEvent::CenterImage => self.center_image(),
            InputEvent::NextLayer => self.next_layer(),
            InputEvent::PreviousLayer => self.previous_layer(),
            InputEvent::RemoveLayer => {
                self.remove_current_layer();
            }
            InputEvent::Scroll { offset_x, offset_y } => {
                self.update_offset_from_scrollbar(*offset_x, *offset_y)
            }
            InputEvent::SetMarker { .. } => {
                if let Some(m) = event.marker() {
                    self.set_marker(m);
                }
            }
        }
    }
}
