use tracing::debug;

use crate::error::{Result, SlideviewError};
use crate::geometry::Size;
use crate::histogram::HistogramData;

/// One image slide in a [`Slides`] stack.
///
/// The canvas only reads dimensions; pixel storage belongs to the implementor.
pub trait Layer {
    fn name(&self) -> &str;
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Binned pixel values, once the layer has computed them.
    fn histogram(&self) -> Option<&HistogramData> {
        None
    }

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// What the viewport engine needs from a collection of layers.
pub trait LayerStack {
    fn available(&self) -> bool;
    /// Width of the current layer, 0 when none is available.
    fn width(&self) -> u32;
    /// Height of the current layer, 0 when none is available.
    fn height(&self) -> u32;
    fn forward(&mut self);
    fn backward(&mut self);
    fn current_index(&self) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the current layer when it can drive the viewport transform.
    fn image_size(&self) -> Option<Size> {
        if !self.available() {
            return None;
        }
        let size = Size::new(self.width(), self.height());
        (!size.is_empty()).then_some(size)
    }
}

/// Ordered layers with a single current one.
///
/// Cursor movement wraps around at both ends. A freshly added layer becomes
/// current.
#[derive(Debug)]
pub struct Slides<L> {
    layers: Vec<L>,
    current: usize,
}

impl<L> Default for Slides<L> {
    fn default() -> Self {
        Self {
            layers: Vec::new(),
            current: 0,
        }
    }
}

impl<L: Layer> Slides<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, layer: L) {
        debug!(name = layer.name(), size = %layer.size(), "Layer added");
        self.layers.push(layer);
        self.current = self.layers.len() - 1;
    }

    /// Remove and return the current layer. The layer that followed it, or the
    /// new last layer, becomes current.
    pub fn remove(&mut self) -> Option<L> {
        if self.layers.is_empty() {
            return None;
        }
        let removed = self.layers.remove(self.current);
        if self.current >= self.layers.len() {
            self.current = self.layers.len().saturating_sub(1);
        }
        Some(removed)
    }

    pub fn current(&self) -> Option<&L> {
        self.layers.get(self.current)
    }

    pub fn get(&self, index: usize) -> Result<&L> {
        self.layers
            .get(index)
            .ok_or(SlideviewError::LayerIndexOutOfRange {
                index,
                total: self.layers.len(),
            })
    }

    pub fn set_current(&mut self, index: usize) -> Result<()> {
        if self.layers.is_empty() {
            return Err(SlideviewError::EmptyStack);
        }
        if index >= self.layers.len() {
            return Err(SlideviewError::LayerIndexOutOfRange {
                index,
                total: self.layers.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &L> {
        self.layers.iter()
    }
}

impl<L: Layer> LayerStack for Slides<L> {
    fn available(&self) -> bool {
        !self.layers.is_empty()
    }

    fn width(&self) -> u32 {
        self.current().map_or(0, Layer::width)
    }

    fn height(&self) -> u32 {
        self.current().map_or(0, Layer::height)
    }

    fn forward(&mut self) {
        if !self.layers.is_empty() {
            self.current = (self.current + 1) % self.layers.len();
        }
    }

    fn backward(&mut self) {
        if !self.layers.is_empty() {
            self.current = (self.current + self.layers.len() - 1) % self.layers.len();
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.available().then_some(self.current)
    }

    fn len(&self) -> usize {
        self.layers.len()
    }
}

/// In-memory layer carrying only its name, extent and optional histogram.
#[derive(Clone, Debug)]
pub struct SizedLayer {
    name: String,
    width: u32,
    height: u32,
    histogram: Option<HistogramData>,
}

impl SizedLayer {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            histogram: None,
        }
    }

    /// Like [`SizedLayer::new`], rejecting zero-sized extents.
    pub fn try_new(name: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SlideviewError::InvalidDimensions { width, height });
        }
        Ok(Self::new(name, width, height))
    }

    pub fn with_histogram(mut self, histogram: HistogramData) -> Self {
        self.histogram = Some(histogram);
        self
    }
}

impl Layer for SizedLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn histogram(&self) -> Option<&HistogramData> {
        self.histogram.as_ref()
    }
}
