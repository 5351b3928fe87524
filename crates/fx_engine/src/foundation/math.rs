//! Math utilities and types
//!
//! Provides the fundamental math types used by scenes and particle buffers.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;
