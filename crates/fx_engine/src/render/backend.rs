//! Backend trait and the headless reference implementation

use crate::particles::ParticleGroup;
use crate::scene::{Camera, SceneGraph};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors a rendering backend can report
///
/// The driver never propagates these to callers; a failed surface creation
/// leaves the scene surfaceless and a failed draw is logged and skipped.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend could not allocate an output surface
    #[error("surface creation failed: {0}")]
    SurfaceCreation(String),

    /// A draw call failed
    #[error("draw failed: {0}")]
    Draw(String),
}

/// Handle to an output surface owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// How an output surface is sized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceSize {
    /// Fixed pixel dimensions, unaffected by viewport resizes
    Fixed {
        /// Width in pixels
        width: f32,
        /// Height in pixels
        height: f32,
    },
    /// Tracks the full viewport and follows resizes
    Viewport,
}

/// Output surface description passed at registration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDesc {
    /// Sizing behavior
    pub size: SurfaceSize,
    /// Whether the surface composites over the page background
    pub transparent: bool,
}

impl SurfaceDesc {
    /// Fixed-size transparent surface
    #[must_use]
    pub const fn fixed(width: f32, height: f32) -> Self {
        Self {
            size: SurfaceSize::Fixed { width, height },
            transparent: true,
        }
    }

    /// Viewport-sized transparent surface
    #[must_use]
    pub const fn viewport() -> Self {
        Self {
            size: SurfaceSize::Viewport,
            transparent: true,
        }
    }
}

/// Rendering backend trait
///
/// Implementations own all rendering resources; the engine only holds opaque
/// surface handles. One `draw` call renders one scene for one frame.
pub trait RenderBackend {
    /// Allocate an output surface
    fn create_surface(&mut self, desc: &SurfaceDesc) -> BackendResult<SurfaceHandle>;

    /// Resize a surface, e.g. when a viewport-sized surface follows a resize
    fn resize_surface(&mut self, handle: SurfaceHandle, width: f32, height: f32);

    /// Draw one scene onto its surface
    fn draw(
        &mut self,
        handle: SurfaceHandle,
        graph: &SceneGraph,
        camera: &Camera,
        particles: Option<&ParticleGroup>,
    ) -> BackendResult<()>;

    /// Release a surface and its rendering resources
    fn destroy_surface(&mut self, handle: SurfaceHandle);
}

/// Backend that draws nothing but tracks surfaces and counts draw calls
///
/// Used by the demo app and by tests that assert on draw-call behavior. The
/// draw counter is shared so tests can keep observing it after the backend
/// moves into the driver.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_handle: u64,
    live_surfaces: HashSet<SurfaceHandle>,
    draw_calls: Arc<AtomicUsize>,
}

impl HeadlessBackend {
    /// Create a backend with zero live surfaces
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared draw-call counter; clone before moving the backend into a driver
    #[must_use]
    pub fn draw_call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.draw_calls)
    }

    /// Number of surfaces created and not yet destroyed
    #[must_use]
    pub fn live_surface_count(&self) -> usize {
        self.live_surfaces.len()
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_surface(&mut self, _desc: &SurfaceDesc) -> BackendResult<SurfaceHandle> {
        let handle = SurfaceHandle(self.next_handle);
        self.next_handle += 1;
        self.live_surfaces.insert(handle);
        Ok(handle)
    }

    fn resize_surface(&mut self, _handle: SurfaceHandle, _width: f32, _height: f32) {}

    fn draw(
        &mut self,
        handle: SurfaceHandle,
        _graph: &SceneGraph,
        _camera: &Camera,
        _particles: Option<&ParticleGroup>,
    ) -> BackendResult<()> {
        if !self.live_surfaces.contains(&handle) {
            return Err(BackendError::Draw(format!(
                "surface {} is not live",
                handle.0
            )));
        }
        self.draw_calls.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn destroy_surface(&mut self, handle: SurfaceHandle) {
        self.live_surfaces.remove(&handle);
    }
}
