//! Scene graph model
//!
//! One scene is an independent renderable context: a flat object list, a few
//! lights, and a perspective camera. Scenes stay deliberately small (a few
//! dozen objects at most), so the registry iterates them wholesale each frame
//! with no spatial structure.

mod registry;

pub use registry::{SceneEntry, SceneRegistry};

use crate::foundation::math::Vec3;

/// Linear RGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel in `[0, 1]`
    pub r: f32,
    /// Green channel in `[0, 1]`
    pub g: f32,
    /// Blue channel in `[0, 1]`
    pub b: f32,
}

impl Color {
    /// Create a color from channel values
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }
}

/// Surface appearance of a renderable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color
    pub color: Color,
    /// Opacity in `[0, 1]`; below 1.0 the object renders translucent
    pub opacity: f32,
}

impl Material {
    /// Create an opaque material
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Set the opacity
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Geometry primitives the backend knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Axis-aligned box
    Cube,
    /// UV sphere
    Sphere,
    /// Cone
    Cone,
    /// Torus
    Torus,
    /// Torus knot (the logo shape)
    TorusKnot,
}

/// Light sources attached to a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform fill light
    Ambient {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
    },
    /// Parallel rays from a direction
    Directional {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
        /// Direction the light travels toward the scene
        direction: Vec3,
    },
    /// Omnidirectional light at a position
    Point {
        /// Light color
        color: Color,
        /// Intensity multiplier
        intensity: f32,
        /// World position
        position: Vec3,
    },
}

/// Vertical bobbing motion driven by elapsed time
///
/// Position y follows `sin(elapsed + phase) * amplitude`, so objects sharing
/// an amplitude but differing in phase bob out of step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatMotion {
    /// Bob amplitude in world units
    pub amplitude: f32,
    /// Phase offset in radians (typically the object index)
    pub phase: f32,
}

/// One renderable object in a scene
#[derive(Debug, Clone, PartialEq)]
pub struct RenderObject {
    /// Geometry primitive
    pub geometry: GeometryKind,
    /// Surface appearance
    pub material: Material,
    /// World position
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    /// Uniform scale
    pub scale: f32,
    /// Continuous rotation rate in radians per second per axis
    pub spin_rate: Vec3,
    /// Optional vertical bobbing motion
    pub float_motion: Option<FloatMotion>,
}

impl RenderObject {
    /// Create a static object at the origin
    #[must_use]
    pub fn new(geometry: GeometryKind, material: Material) -> Self {
        Self {
            geometry,
            material,
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: 1.0,
            spin_rate: Vec3::zeros(),
            float_motion: None,
        }
    }

    /// Set the world position
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the initial rotation
    #[must_use]
    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set a continuous rotation rate
    #[must_use]
    pub fn with_spin(mut self, spin_rate: Vec3) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    /// Attach a vertical bobbing motion
    #[must_use]
    pub fn with_float_motion(mut self, amplitude: f32, phase: f32) -> Self {
        self.float_motion = Some(FloatMotion { amplitude, phase });
        self
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov_y: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
    /// World position
    pub position: Vec3,
}

impl Camera {
    /// Create a perspective camera looking down the negative z axis
    #[must_use]
    pub fn perspective(fov_y: f32, aspect: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near: 0.1,
            far: 1000.0,
            position: Vec3::zeros(),
        }
    }

    /// Set the camera position
    #[must_use]
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Update the aspect ratio, e.g. after a viewport resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

/// Flat scene graph: objects plus lights
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGraph {
    /// Renderable objects
    pub objects: Vec<RenderObject>,
    /// Light sources
    pub lights: Vec<Light>,
}

impl SceneGraph {
    /// Create an empty scene graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object
    pub fn add_object(&mut self, object: RenderObject) {
        self.objects.push(object);
    }

    /// Add a light
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xff0000);
        assert_eq!(color, Color::new(1.0, 0.0, 0.0));

        let sky = Color::from_hex(0x38bdf8);
        assert_eq!(sky.r, 0x38 as f32 / 255.0);
        assert_eq!(sky.g, 0xbd as f32 / 255.0);
        assert_eq!(sky.b, 0xf8 as f32 / 255.0);
    }

    #[test]
    fn test_render_object_builder() {
        let object = RenderObject::new(GeometryKind::Sphere, Material::new(Color::from_hex(0x60a5fa)))
            .at(Vec3::new(1.0, 2.0, 3.0))
            .with_spin(Vec3::new(0.3, 0.2, 0.0))
            .with_float_motion(0.2, 1.0);

        assert_eq!(object.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(object.spin_rate, Vec3::new(0.3, 0.2, 0.0));
        assert_eq!(
            object.float_motion,
            Some(FloatMotion {
                amplitude: 0.2,
                phase: 1.0
            })
        );
        assert_eq!(object.scale, 1.0);
    }

    #[test]
    fn test_camera_aspect_update() {
        let mut camera = Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 3.0));
        camera.set_aspect(16.0 / 9.0);
        assert_eq!(camera.aspect, 16.0 / 9.0);
        assert_eq!(camera.position.z, 3.0);
    }
}
