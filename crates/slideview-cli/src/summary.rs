use console::Style;
use slideview_core::canvas::Canvas;
use slideview_core::geometry::{Rect, Size};
use slideview_core::layers::{Layer, LayerStack};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn rect_text(rect: &Rect) -> String {
    format!(
        "({}, {}) .. ({}, {})",
        rect.left(),
        rect.top(),
        rect.right(),
        rect.bottom()
    )
}

pub fn print_replay_summary(canvas: &Canvas, window: Size, events: usize) {
    let s = Styles::new();
    let vp = canvas.viewport();

    println!();
    println!("  {}", s.title.apply_to("Slideview Replay"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(canvas.size())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Window"),
        s.value.apply_to(window)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value.apply_to(events)
    );
    println!();

    // Layers
    println!(
        "  {} {}",
        s.header.apply_to("Layers"),
        s.label.apply_to(format!("({})", canvas.slides().len()))
    );
    let current = canvas.slides().current_index();
    for (i, layer) in canvas.slides().iter().enumerate() {
        let marker = if Some(i) == current { "*" } else { " " };
        let histogram = match layer.histogram() {
            Some(h) if h.available() => format!(", {} bins", h.bins()),
            _ => String::new(),
        };
        println!(
            "   {} {:<12}{}{}",
            marker,
            s.label.apply_to(layer.name()),
            s.value.apply_to(layer.size()),
            s.label.apply_to(histogram)
        );
    }
    println!();

    // Viewport
    println!("  {}", s.header.apply_to("Viewport"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}", vp.scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value
            .apply_to(format!("({:.2}, {:.2})", vp.offset_x, vp.offset_y))
    );
    match canvas.visible_region() {
        Some(rect) => println!(
            "    {:<12}{}",
            s.label.apply_to("Visible"),
            s.value.apply_to(rect_text(&rect))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Visible"),
            s.disabled.apply_to("no image")
        ),
    }
    println!();

    // Marker / Selection
    let marker = canvas.marker();
    if marker.active {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Marker"),
            s.value.apply_to(format!("({}, {})", marker.x, marker.y))
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Marker"),
            s.disabled.apply_to("hidden")
        );
    }
    let selection = canvas.selection();
    if selection.active || selection.rect != Rect::default() {
        let state = if selection.active { " (in progress)" } else { "" };
        println!(
            "  {:<14}{}{}",
            s.label.apply_to("Selection"),
            s.value.apply_to(rect_text(&selection.rect.normalized())),
            s.label.apply_to(state)
        );
    } else {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Selection"),
            s.disabled.apply_to("none")
        );
    }
    println!();
}
