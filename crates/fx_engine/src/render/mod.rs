//! Render backend abstraction
//!
//! Rendering is an opaque external capability. The engine only asks a
//! backend for output surfaces and one draw call per scene per frame; when no
//! backend is available the whole engine degrades to a silent no-op.

mod backend;

pub use backend::{
    BackendError, BackendResult, HeadlessBackend, RenderBackend, SurfaceDesc, SurfaceHandle,
    SurfaceSize,
};
