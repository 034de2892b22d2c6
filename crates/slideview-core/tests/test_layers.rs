use slideview_core::error::SlideviewError;
use slideview_core::geometry::Size;
use slideview_core::histogram::HistogramData;
use slideview_core::layers::{Layer, LayerStack, SizedLayer, Slides};

fn three_slides() -> Slides<SizedLayer> {
    let mut slides = Slides::new();
    slides.add(SizedLayer::new("a", 10, 20));
    slides.add(SizedLayer::new("b", 30, 40));
    slides.add(SizedLayer::new("c", 50, 60));
    slides
}

#[test]
fn test_empty_stack_is_unavailable() {
    let mut slides: Slides<SizedLayer> = Slides::new();
    assert!(!slides.available());
    assert!(slides.is_empty());
    assert_eq!(slides.width(), 0);
    assert_eq!(slides.height(), 0);
    assert_eq!(slides.current_index(), None);
    assert_eq!(slides.image_size(), None);

    slides.forward();
    slides.backward();
    assert!(slides.remove().is_none());
    assert!(matches!(slides.set_current(0), Err(SlideviewError::EmptyStack)));
}

#[test]
fn test_added_layer_becomes_current() {
    let slides = three_slides();
    assert_eq!(slides.current_index(), Some(2));
    assert_eq!(slides.image_size(), Some(Size::new(50, 60)));
}

#[test]
fn test_cursor_wraps_both_ways() {
    let mut slides = three_slides();
    slides.forward();
    assert_eq!(slides.current().unwrap().name(), "a");
    slides.backward();
    slides.backward();
    assert_eq!(slides.current().unwrap().name(), "b");
}

#[test]
fn test_remove_last_moves_cursor_back() {
    let mut slides = three_slides();
    let removed = slides.remove().unwrap();
    assert_eq!(removed.name(), "c");
    assert_eq!(slides.current_index(), Some(1));

    slides.remove();
    slides.remove();
    assert!(!slides.available());
}

#[test]
fn test_indexed_access() {
    let mut slides = three_slides();
    assert_eq!(slides.get(1).unwrap().name(), "b");
    assert!(matches!(
        slides.get(3),
        Err(SlideviewError::LayerIndexOutOfRange { index: 3, total: 3 })
    ));
    slides.set_current(0).unwrap();
    assert_eq!(slides.width(), 10);
    assert_eq!(slides.iter().count(), 3);
}

#[test]
fn test_zero_sized_layer_has_no_image_size() {
    let mut slides = Slides::new();
    slides.add(SizedLayer::new("flat", 0, 10));
    assert!(slides.available());
    assert_eq!(slides.image_size(), None);
    assert!(SizedLayer::try_new("flat", 0, 10).is_err());
}

#[test]
fn test_layer_carries_histogram() {
    let histogram = HistogramData::from_raw(&[0.0, 0.5, 1.0, 0.25], 1, 2, 2, 4, 1.0).unwrap();
    let layer = SizedLayer::new("h", 2, 2).with_histogram(histogram.clone());
    assert_eq!(layer.histogram(), Some(&histogram));
    assert!(SizedLayer::new("plain", 2, 2).histogram().is_none());
}
