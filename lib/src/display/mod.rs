/// A submodule that provides the [Renderer], which walks generations with a turtle.
mod renderer;
pub use renderer::Renderer;

/// The plotters backed surface. Provides [PlotSurface] that can be saved as an image.
mod plot;
pub use plot::{ImageFormat, PlotSurface, Stroke};
