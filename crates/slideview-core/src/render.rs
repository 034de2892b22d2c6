use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use crate::geometry::{Rect, Size};
use crate::interaction::MarkerState;
use crate::viewport::ViewportState;

static RENDER_LOCK: Mutex<()> = Mutex::new(());

/// Held for the duration of one render pass. At most one exists per process;
/// dropping it lets the next pass start.
///
/// Not reentrant. Acquiring it again on a thread that already holds it
/// deadlocks or panics; [`RenderGuard::try_acquire`] never blocks.
pub struct RenderGuard {
    _lock: MutexGuard<'static, ()>,
}

impl RenderGuard {
    /// Block until no other render pass is running.
    pub fn acquire() -> Self {
        // The lock guards no data, so poisoning is harmless.
        let lock = RENDER_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        Self { _lock: lock }
    }

    /// Take the guard only if no render pass is running.
    pub fn try_acquire() -> Option<Self> {
        match RENDER_LOCK.try_lock() {
            Ok(lock) => Some(Self { _lock: lock }),
            Err(TryLockError::Poisoned(e)) => Some(Self {
                _lock: e.into_inner(),
            }),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

/// Everything a backend needs to draw one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub viewport: ViewportState,
    pub canvas: Size,
    /// `None` when there is no layer; only the background is drawn then.
    pub image: Option<Size>,
    pub layer_index: Option<usize>,
    /// Image-space bounding box of the canvas.
    pub visible: Option<Rect>,
    pub marker: MarkerState,
    /// Selection rectangle while a selection gesture is in progress.
    pub selection: Option<Rect>,
    pub background_gray: f32,
    /// Edge length of the checkerboard behind transparent layers.
    pub checkerboard_size: u32,
}

/// Drawing backend; performs the actual draw calls for a [`RenderFrame`].
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame);
}

impl<F: FnMut(&RenderFrame)> Renderer for F {
    fn render(&mut self, frame: &RenderFrame) {
        self(frame)
    }
}
