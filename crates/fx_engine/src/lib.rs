//! # fx_engine
//!
//! Multi-scene decorative 3D effects coordinator: a registry of independent
//! renderable contexts (scene graph, camera, output surface, particle group)
//! driven in lockstep by one shared frame loop.
//!
//! The engine is deliberately forgiving. Effects are decoration, never
//! load-bearing: when the rendering capability is missing every registration
//! becomes a silent no-op and ticking never draws.
//!
//! ## Quick Start
//!
//! ```rust
//! use fx_engine::prelude::*;
//!
//! let backend = HeadlessBackend::new();
//! let mut driver = FrameDriver::new(
//!     EffectsConfig::default(),
//!     (800.0, 600.0),
//!     Some(Box::new(backend)),
//! );
//!
//! let mut graph = SceneGraph::new();
//! graph.add_object(
//!     RenderObject::new(GeometryKind::TorusKnot, Material::new(Color::from_hex(0x38bdf8)))
//!         .with_spin(Vec3::new(0.5, 0.3, 0.0)),
//! );
//! driver.register_scene(
//!     "logo",
//!     graph,
//!     Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 3.0)),
//!     SurfaceDesc::fixed(120.0, 120.0),
//! );
//!
//! driver.tick();
//! driver.dispose();
//! ```

pub mod config;
pub mod foundation;
pub mod input;
pub mod particles;
pub mod render;
pub mod scene;

mod driver;
mod error;

pub use driver::{FrameDriver, StopHandle};
pub use error::EffectsError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{AnimationRates, EffectsConfig, ParticleDefaults},
        foundation::{math::Vec3, time::FrameClock},
        input::PointerState,
        particles::{MovementMode, ParticleGroup, ParticleParams},
        render::{HeadlessBackend, RenderBackend, SurfaceDesc, SurfaceHandle, SurfaceSize},
        scene::{
            Camera, Color, FloatMotion, GeometryKind, Light, Material, RenderObject, SceneEntry,
            SceneGraph, SceneRegistry,
        },
        EffectsError, FrameDriver, StopHandle,
    };
}
