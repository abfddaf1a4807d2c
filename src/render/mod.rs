//! Offscreen rendering: the surface capability and the frame compositor
//! that drives it.

mod compositor;
mod surface;

pub use compositor::{FrameCompositor, RenderSettings};
pub use surface::{RasterSurface, SkiaSurface};
