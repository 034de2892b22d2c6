#![allow(dead_code)]

use std::sync::mpsc::Receiver;

use slideview_core::canvas::{Canvas, HostWindow};
use slideview_core::events::CanvasEvent;
use slideview_core::geometry::{Point, Size};
use slideview_core::interaction::{Buttons, Modifiers, PointerEvent};
use slideview_core::layers::SizedLayer;

/// Canvas of the given size showing one layer of the given size.
pub fn canvas_with_image(canvas: (u32, u32), image: (u32, u32)) -> Canvas {
    let mut c = Canvas::default();
    c.resize(canvas.0, canvas.1);
    c.add_layer(SizedLayer::new("test", image.0, image.1));
    c
}

pub fn drain(rx: &Receiver<CanvasEvent>) -> Vec<CanvasEvent> {
    rx.try_iter().collect()
}

pub fn press(x: i32, y: i32, buttons: Buttons) -> PointerEvent {
    PointerEvent::new(Point::new(x, y), buttons, Modifiers::None)
}

pub fn shift_press(x: i32, y: i32, buttons: Buttons) -> PointerEvent {
    PointerEvent::new(Point::new(x, y), buttons, Modifiers::Shift)
}

/// Host window that applies every resize immediately.
pub struct TestHost {
    pub size: Size,
    pub resizes: Vec<Size>,
}

impl TestHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            resizes: Vec::new(),
        }
    }
}

impl HostWindow for TestHost {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.resizes.push(size);
    }
}
