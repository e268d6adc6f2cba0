//! Abstract drawing surfaces and the pair of layers backing a session.

use crate::color::Rgba;
use nalgebra::Vector2;
use thiserror::Error;

/// Role a surface plays in the composited output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Redrawn from scratch every frame on an opaque black background.
    Construction,
    /// Accumulates the traced curve on a transparent background; cleared
    /// only when the animation resets. Drawn with a stroke width of 2.
    Trace,
}

/// A 2d surface line segments can be drawn onto.
///
/// Endpoints are normalized to `[0, 1]` in both axes; implementations map
/// them into their own device space. Out of range or NaN coordinates are not
/// validated, they clip or misrender.
pub trait Surface {
    /// Device width in pixels.
    fn width(&self) -> u32;

    /// Device height in pixels.
    fn height(&self) -> u32;

    /// Resets the surface to its layer's background.
    fn clear(&mut self);

    /// Draws a line segment between two normalized points.
    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Rgba);
}

/// Allocates the surfaces a session draws on.
pub trait SurfaceProvider {
    /// The surface type produced by this provider.
    type Surface: Surface;

    /// Allocates a blank surface of the given device size.
    ///
    /// An allocation failure is fatal to the session; rendering cannot
    /// proceed without a surface.
    fn create(
        &mut self,
        layer: Layer,
        width: u32,
        height: u32,
    ) -> Result<Self::Surface, SurfaceError>;
}

/// Failed to allocate a drawing surface.
#[derive(Debug, Error)]
#[error("failed to allocate a {width}x{height} {layer:?} surface: {reason}")]
pub struct SurfaceError {
    /// Which layer the allocation was for.
    pub layer: Layer,
    /// Requested device width.
    pub width: u32,
    /// Requested device height.
    pub height: u32,
    /// Provider specific description of the failure.
    pub reason: String,
}

/// The construction and trace surfaces of one session.
///
/// Detects canvas size changes and swaps in freshly allocated surfaces.
pub struct Layers<P: SurfaceProvider> {
    provider: P,
    construction: P::Surface,
    trace: P::Surface,
}

impl<P: SurfaceProvider> Layers<P> {
    /// Allocates both layers at the given size.
    pub fn new(mut provider: P, width: u32, height: u32) -> Result<Layers<P>, SurfaceError> {
        let construction = provider.create(Layer::Construction, width, height)?;
        let trace = provider.create(Layer::Trace, width, height)?;
        Ok(Layers {
            provider,
            construction,
            trace,
        })
    }

    /// Reallocates both layers if the canvas dimensions changed.
    ///
    /// Both new surfaces are allocated before either old one is replaced;
    /// a failed reallocation leaves the previous pair intact. Returns whether
    /// a reallocation happened.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> Result<bool, SurfaceError> {
        if self.construction.width() == width && self.construction.height() == height {
            return Ok(false);
        }
        let construction = self.provider.create(Layer::Construction, width, height)?;
        let trace = self.provider.create(Layer::Trace, width, height)?;
        self.construction = construction;
        self.trace = trace;
        log::info!("reallocated surfaces to {}x{}", width, height);
        Ok(true)
    }

    /// The per frame construction surface.
    pub fn construction(&self) -> &P::Surface {
        &self.construction
    }

    /// Mutable access to the construction surface.
    pub fn construction_mut(&mut self) -> &mut P::Surface {
        &mut self.construction
    }

    /// The persistent trace surface.
    pub fn trace(&self) -> &P::Surface {
        &self.trace
    }

    /// Mutable access to the trace surface.
    pub fn trace_mut(&mut self) -> &mut P::Surface {
        &mut self.trace
    }
}
