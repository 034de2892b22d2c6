pub mod state;
pub mod transform;
pub mod zoom;

pub use state::ViewportState;
pub use transform::ViewGeometry;
pub use zoom::{ZoomController, ZoomDirection};
