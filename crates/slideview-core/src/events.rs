use std::sync::mpsc;

use crate::geometry::{Point, Rect};
use crate::interaction::{CursorShape, MarkerState};
use crate::viewport::ViewportState;

/// Notifications a canvas sends to its observers.
///
/// State is carried by value; observers never get access to the canvas'
/// own copy.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// Scale or offset changed. Also asks synchronized canvases to follow.
    ViewportChanged(ViewportState),
    /// The canvas should be drawn again.
    RedrawRequested,
    MarkerChanged(MarkerState),
    /// Image coordinate under the pointer, for a status readout.
    CoordinateUnderCursor(Point),
    /// A shift-drag selection was released.
    SelectionFinished(Rect),
    CursorChanged(CursorShape),
    TitleRefresh,
    LayerRefresh,
    ScrollbarRefresh,
}

/// Fan-out of [`CanvasEvent`]s to any number of channel subscribers.
///
/// Subscribers whose receiver was dropped are forgotten on the next emit.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<mpsc::Sender<CanvasEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> mpsc::Receiver<CanvasEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn emit(&mut self, event: CanvasEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut bus = EventBus::new();
        let keep = bus.subscribe();
        let dropped = bus.subscribe();
        drop(dropped);

        bus.emit(CanvasEvent::RedrawRequested);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(keep.try_recv().unwrap(), CanvasEvent::RedrawRequested);
    }
}
