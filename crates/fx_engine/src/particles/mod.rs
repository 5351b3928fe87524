//! Particle groups
//!
//! A particle group is a batch of point sprites sharing one movement
//! behavior. Per-point buffers are fixed at creation; per-frame animation
//! only touches the whole-group rotation and uniform scale, so a group of a
//! few hundred points costs three float updates per frame.

use crate::config::AnimationRates;
use crate::foundation::math::Vec3;
use crate::input::PointerState;
use crate::scene::Color;
use rand::Rng;

/// Enumerated animation behavior applied to a particle group each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    /// Faster two-axis drift
    Floating,
    /// Slow single-axis drift
    Gentle,
    /// No autonomous drift (pointer skew still applies)
    None,
}

/// Construction parameters for a particle group
#[derive(Debug, Clone)]
pub struct ParticleParams {
    /// Number of points
    pub count: usize,
    /// Colors sampled uniformly per point; must be non-empty when `count > 0`
    pub palette: Vec<Color>,
    /// Base point size; each point gets `base_size * (1 + random)`
    pub base_size: f32,
    /// Edge length of the cube points spawn inside, centered on the origin
    pub spread: f32,
    /// Movement behavior
    pub movement: MovementMode,
}

/// A batch of point sprites with one shared movement behavior
#[derive(Debug, Clone)]
pub struct ParticleGroup {
    positions: Vec<Vec3>,
    colors: Vec<Color>,
    sizes: Vec<f32>,
    movement: MovementMode,
    /// Whole-group Euler rotation in radians
    pub rotation: Vec3,
    /// Whole-group uniform scale
    pub scale: f32,
    hover_target: f32,
}

impl ParticleGroup {
    /// Generate a group from parameters using the supplied RNG
    ///
    /// Positions are uniform inside the spawn cube, colors uniform over the
    /// palette, sizes `base_size * (1 + u)` with `u` uniform in `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `params.count > 0` and the palette is empty; a non-empty
    /// palette is a caller contract.
    pub fn generate<R: Rng + ?Sized>(params: &ParticleParams, rng: &mut R) -> Self {
        let half = params.spread / 2.0;
        let mut positions = Vec::with_capacity(params.count);
        let mut colors = Vec::with_capacity(params.count);
        let mut sizes = Vec::with_capacity(params.count);

        for _ in 0..params.count {
            positions.push(Vec3::new(
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
                rng.gen_range(-half..=half),
            ));
            colors.push(params.palette[rng.gen_range(0..params.palette.len())]);
            sizes.push(params.base_size * (1.0 + rng.gen::<f32>()));
        }

        Self {
            positions,
            colors,
            sizes,
            movement: params.movement,
            rotation: Vec3::zeros(),
            scale: 1.0,
            hover_target: 1.0,
        }
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the group contributes no draw geometry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Per-point positions
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Per-point colors
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Per-point sizes
    #[must_use]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Movement behavior
    #[must_use]
    pub fn movement(&self) -> MovementMode {
        self.movement
    }

    /// Set the hover state; the scale eases toward the matching target over
    /// the following frames
    pub fn set_hover(&mut self, hovering: bool, rates: &AnimationRates) {
        self.hover_target = if hovering { rates.hover_scale } else { 1.0 };
    }

    /// Advance one frame of group animation
    ///
    /// Autonomous drift depends on the movement mode; the pointer skew is an
    /// unclamped compounding increment on top, so an off-center pointer keeps
    /// accelerating the rotation for as long as it stays off-center. Scale
    /// eases toward the hover target by a fixed fraction per frame.
    pub(crate) fn update(&mut self, dt: f32, pointer: &PointerState, rates: &AnimationRates) {
        match self.movement {
            MovementMode::Floating => {
                self.rotation.y += dt * rates.floating_yaw;
                self.rotation.x += dt * rates.floating_pitch;
            }
            MovementMode::Gentle => {
                self.rotation.y += dt * rates.gentle_yaw;
            }
            MovementMode::None => {}
        }

        self.rotation.x += pointer.y() * dt * rates.pointer_gain;
        self.rotation.y += pointer.x() * dt * rates.pointer_gain;

        self.scale += (self.hover_target - self.scale) * rates.hover_easing;
    }
}
