mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use common::{canvas_with_image, drain, press, TestHost};
use slideview_core::canvas::Canvas;
use slideview_core::config::ViewerConfig;
use slideview_core::consts::{DEFAULT_CHECKERBOARD_SIZE, ZOOM_STEP};
use slideview_core::events::CanvasEvent;
use slideview_core::geometry::{Point, Size};
use slideview_core::interaction::{Buttons, WheelEvent};
use slideview_core::layers::{LayerStack, SizedLayer};
use slideview_core::render::{RenderFrame, RenderGuard};
use slideview_core::viewport::ViewportState;

// ---------------------------------------------------------------------------
// No image
// ---------------------------------------------------------------------------

#[test]
fn test_empty_canvas_is_safe() {
    let mut canvas: Canvas = Canvas::default();
    let rx = canvas.subscribe();

    assert_eq!(canvas.screen_to_image(Point::new(37, 99)), Point::ZERO);
    assert!(canvas.visible_region().is_none());

    canvas.wheel(&WheelEvent {
        position: Point::new(10, 10),
        delta: 120,
    });
    canvas.zoom_in();
    canvas.zoom_out();
    canvas.fit_to_window();
    assert_eq!(canvas.viewport(), ViewportState::default());
    assert!(drain(&rx).is_empty());

    assert!(canvas.remove_current_layer().is_none());
    canvas.next_layer();
    canvas.previous_layer();
}

#[test]
fn test_set_viewport_ignored_without_layers() {
    let mut canvas: Canvas = Canvas::default();
    canvas.set_viewport(ViewportState::new(4.0, 1.0, 2.0));
    assert_eq!(canvas.viewport(), ViewportState::default());
}

#[test]
fn test_set_viewport_sanitizes_scale() {
    let mut canvas = canvas_with_image((400, 300), (800, 600));
    canvas.set_viewport(ViewportState {
        scale: -2.0,
        offset_x: 3.0,
        offset_y: 4.0,
    });
    assert_eq!(canvas.viewport(), ViewportState::new(1.0, 3.0, 4.0));
}

// ---------------------------------------------------------------------------
// Zoom commands
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_zooms_around_pointer() {
    let mut canvas = canvas_with_image((400, 300), (800, 600));
    let rx = canvas.subscribe();

    canvas.wheel(&WheelEvent {
        position: Point::new(100, 80),
        delta: 120,
    });
    let vp = canvas.viewport();
    assert!((vp.scale - ZOOM_STEP).abs() < 1e-12);
    assert!(drain(&rx).contains(&CanvasEvent::ViewportChanged(vp)));

    canvas.wheel(&WheelEvent {
        position: Point::new(100, 80),
        delta: 0,
    });
    assert_eq!(canvas.viewport(), vp);
}

#[test]
fn test_keyboard_zoom_uses_focus() {
    let mut canvas = canvas_with_image((400, 300), (800, 600));
    canvas.mouse_move(&press(100, 80, Buttons::NONE));
    let q = canvas.screen_to_image(Point::new(100, 80));

    canvas.zoom_in();
    let after = canvas.screen_to_image(Point::new(100, 80));
    assert!((after.x - q.x).abs() <= 1 && (after.y - q.y).abs() <= 1);
    assert!(!canvas.viewport().is_centered());

    canvas.center_image();
    assert!(canvas.viewport().is_centered());
}

#[test]
fn test_fit_to_window_emits_refresh() {
    let mut canvas = canvas_with_image((400, 200), (800, 100));
    let rx = canvas.subscribe();

    canvas.fit_to_window();
    assert_eq!(canvas.viewport(), ViewportState::new(0.5, 0.0, 0.0));

    let events = drain(&rx);
    for expected in [
        CanvasEvent::TitleRefresh,
        CanvasEvent::ScrollbarRefresh,
        CanvasEvent::RedrawRequested,
        CanvasEvent::ViewportChanged(ViewportState::new(0.5, 0.0, 0.0)),
    ] {
        assert!(events.contains(&expected), "missing {expected:?} in {events:?}");
    }
}

#[test]
fn test_fit_container_to_image_resizes_host() {
    let mut canvas = canvas_with_image((300, 300), (200, 100));
    canvas.set_zoom(2.0);
    canvas.update_offset_from_scrollbar(5.0, 5.0);
    let mut host = TestHost::new(320, 350);

    canvas.fit_container_to_image(&mut host);
    assert_eq!(host.resizes, vec![Size::new(421, 251)]);
    assert!(canvas.viewport().is_centered());
}

#[test]
fn test_scrollbar_updates_offset() {
    let mut canvas = canvas_with_image((400, 300), (800, 600));
    let rx = canvas.subscribe();

    canvas.update_offset_from_scrollbar(-12.5, 40.0);
    let vp = canvas.viewport();
    assert_eq!((vp.offset_x, vp.offset_y), (-12.5, 40.0));
    assert!(drain(&rx).contains(&CanvasEvent::ViewportChanged(vp)));
}

#[test]
fn test_synchronized_canvases_follow() {
    let mut a = canvas_with_image((400, 300), (800, 600));
    let mut b = canvas_with_image((400, 300), (800, 600));
    let rx = a.subscribe();

    a.wheel(&WheelEvent {
        position: Point::new(120, 60),
        delta: 1,
    });
    for event in drain(&rx) {
        if let CanvasEvent::ViewportChanged(vp) = event {
            b.set_viewport(vp);
        }
    }
    assert_eq!(a.viewport(), b.viewport());
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

#[test]
fn test_add_layer_refreshes_views() {
    let mut canvas: Canvas = Canvas::default();
    let rx = canvas.subscribe();
    canvas.add_layer(SizedLayer::new("a", 64, 32));

    let events = drain(&rx);
    assert!(events.contains(&CanvasEvent::LayerRefresh));
    assert!(events.contains(&CanvasEvent::TitleRefresh));
    assert!(events
        .iter()
        .any(|e| matches!(e, CanvasEvent::CoordinateUnderCursor(_))));
    assert_eq!(canvas.geometry().image(), Some(Size::new(64, 32)));
}

#[test]
fn test_layer_navigation_changes_geometry() {
    let mut canvas: Canvas = Canvas::default();
    canvas.add_layer(SizedLayer::new("a", 100, 100));
    canvas.add_layer(SizedLayer::new("b", 200, 50));
    canvas.add_layer(SizedLayer::new("c", 30, 30));
    assert_eq!(canvas.slides().current_index(), Some(2));

    canvas.next_layer();
    assert_eq!(canvas.geometry().image(), Some(Size::new(100, 100)));
    canvas.previous_layer();
    assert_eq!(canvas.geometry().image(), Some(Size::new(30, 30)));
    canvas.previous_layer();
    assert_eq!(canvas.geometry().image(), Some(Size::new(200, 50)));

    let removed = canvas.remove_current_layer().unwrap();
    assert_eq!(slideview_core::layers::Layer::name(&removed), "b");
    assert_eq!(canvas.slides().len(), 2);
    assert_eq!(canvas.geometry().image(), Some(Size::new(30, 30)));
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_paint_hands_snapshot_to_renderer() {
    let mut canvas = canvas_with_image((101, 101), (100, 100));
    canvas.mouse_press(&common::shift_press(10, 11, Buttons::PRIMARY));

    let mut frames: Vec<RenderFrame> = Vec::new();
    canvas.paint(&mut |frame: &RenderFrame| {
        assert!(RenderGuard::try_acquire().is_none());
        frames.push(frame.clone());
    });

    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert_eq!(frame.image, Some(Size::new(100, 100)));
    assert_eq!(frame.layer_index, Some(0));
    assert_eq!(frame.canvas, Size::new(101, 101));
    assert!(frame.visible.is_some());
    assert!(frame.selection.is_some());
}

#[test]
fn test_paint_uses_configured_background() {
    let config = ViewerConfig::from_toml_str(
        "[render]\nbackground_gray = 0.25\ncheckerboard_size = 64\n",
    )
    .unwrap();
    let mut canvas: Canvas = Canvas::new(&config);
    canvas.add_layer(SizedLayer::new("a", 10, 10));

    let mut seen = None;
    canvas.paint(&mut |frame: &RenderFrame| seen = Some(frame.clone()));

    let frame = seen.unwrap();
    assert_eq!(frame.background_gray, 0.25);
    assert_eq!(frame.checkerboard_size, 64);
    assert_eq!(
        Canvas::<SizedLayer>::default().render_frame().checkerboard_size,
        DEFAULT_CHECKERBOARD_SIZE
    );
}

#[test]
fn test_paint_without_layer_draws_background_only() {
    let canvas: Canvas = Canvas::default();
    let mut seen = None;
    canvas.paint(&mut |frame: &RenderFrame| seen = Some(frame.clone()));

    let frame = seen.unwrap();
    assert!(frame.image.is_none());
    assert!(frame.visible.is_none());
    assert!(frame.selection.is_none());
}

#[test]
fn test_render_passes_never_overlap() {
    let in_flight = Arc::new(AtomicUsize::new(0));
    let overlaps = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let in_flight = Arc::clone(&in_flight);
            let overlaps = Arc::clone(&overlaps);
            thread::spawn(move || {
                let canvas = canvas_with_image((64, 64), (32, 32));
                for _ in 0..25 {
                    canvas.paint(&mut |_: &RenderFrame| {
                        if in_flight.fetch_add(1, Ordering::SeqCst) != 0 {
                            overlaps.fetch_add(1, Ordering::SeqCst);
                        }
                        thread::yield_now();
                        in_flight.fetch_sub(1, Ordering::SeqCst);
                    });
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(overlaps.load(Ordering::SeqCst), 0);
}
