use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use slideview_core::canvas::{Canvas, HostWindow};
use slideview_core::config::ViewerConfig;
use slideview_core::events::CanvasEvent;
use slideview_core::geometry::Size;
use slideview_core::histogram::HistogramData;
use slideview_core::layers::{LayerStack, SizedLayer};
use slideview_core::session::{LayerSpec, Session};
use tracing::info;

use super::parse_size;
use crate::summary::print_replay_summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Session file (TOML)
    pub session: PathBuf,

    /// Viewer config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial size of the window hosting the canvas, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub window: Option<Size>,

    /// Print every event emitted by the canvas
    #[arg(long)]
    pub events: bool,

    /// Compute histograms for layers loaded from image files
    #[arg(long)]
    pub histogram: bool,
}

/// Stand-in for the window hosting the canvas. Records resize requests.
struct VirtualWindow {
    size: Size,
}

impl HostWindow for VirtualWindow {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        info!(from = %self.size, to = %size, "Window resized");
        self.size = size;
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    let session = Session::load(&args.session)
        .with_context(|| format!("Failed to load session from {}", args.session.display()))?;
    let base = args.session.parent().unwrap_or_else(|| Path::new("."));

    let mut canvas: Canvas = Canvas::new(&config);
    let rx = canvas.subscribe();

    if let Some(size) = session.canvas {
        canvas.resize(size.width, size.height);
    }
    let bins = args.histogram.then_some(config.render.histogram_bins);
    for spec in &session.layers {
        canvas.add_layer(load_layer(spec, base, bins)?);
    }

    let mut window = VirtualWindow {
        size: args.window.unwrap_or(canvas.size()),
    };
    info!(
        layers = canvas.slides().len(),
        events = session.events.len(),
        "Replaying session"
    );
    for event in &session.events {
        canvas.dispatch(event, &mut window);
    }

    let emitted: Vec<CanvasEvent> = rx.try_iter().collect();
    if args.events {
        for (i, event) in emitted.iter().enumerate() {
            println!("{:>5}  {:?}", i, event);
        }
    }
    print_replay_summary(&canvas, window.size, emitted.len());

    Ok(())
}

/// Build a layer from explicit dimensions, or from the image file at `path`
/// (resolved relative to the session file) when dimensions are missing.
fn load_layer(spec: &LayerSpec, base: &Path, histogram_bins: Option<usize>) -> Result<SizedLayer> {
    let path = match spec.path {
        Some(ref path) if spec.width.is_none() || spec.height.is_none() => base.join(path),
        _ => return Ok(spec.to_layer()?),
    };

    let (width, height) = image::image_dimensions(&path)
        .with_context(|| format!("Failed to read image dimensions from {}", path.display()))?;
    let layer = SizedLayer::try_new(&spec.name, width, height)
        .with_context(|| format!("Invalid layer '{}'", spec.name))?;

    match histogram_bins {
        Some(bins) => Ok(layer.with_histogram(histogram_of(&path, bins)?)),
        None => Ok(layer),
    }
}

/// Decode `path` to planar RGB in [0, 1] and bin it.
fn histogram_of(path: &Path, bins: usize) -> Result<HistogramData> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?
        .to_rgb32f();
    let (width, height) = (img.width() as usize, img.height() as usize);
    let plane = width * height;

    let mut planar = vec![0.0f32; plane * 3];
    for (i, px) in img.as_raw().chunks_exact(3).enumerate() {
        for (c, &v) in px.iter().enumerate() {
            planar[c * plane + i] = v;
        }
    }

    Ok(HistogramData::from_raw(&planar, 3, height, width, bins, 1.0)?)
}
