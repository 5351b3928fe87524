//! Frame driver
//!
//! Owns the scene registry and advances every registered scene in lockstep:
//! one update pass and one draw call per scene per tick. All state is owned
//! here and mutated on a single logical thread; event notifications (pointer
//! move, resize, hover) are expected to arrive between ticks on the same
//! cooperative queue.

use crate::config::EffectsConfig;
use crate::foundation::time::FrameClock;
use crate::input::PointerState;
use crate::particles::{ParticleGroup, ParticleParams};
use crate::render::{RenderBackend, SurfaceDesc, SurfaceSize};
use crate::scene::{Camera, SceneEntry, SceneGraph, SceneRegistry};
use log::{debug, info};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Cancellation handle for the driver's run loop
///
/// Clone it, hand the clone to whatever owns the loop, and call `stop()` from
/// anywhere. The loop finishes its current tick before exiting; ticks are
/// never interrupted mid-frame.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Create a handle in the running state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop after the current tick
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Multi-scene frame driver
///
/// Maintains the set of active visual-effect scenes and drives them forward
/// together. When constructed without a render backend every registration is
/// a silent no-op and ticking never draws; the effects are decorative, so an
/// absent capability degrades rather than fails.
pub struct FrameDriver {
    registry: SceneRegistry,
    backend: Option<Box<dyn RenderBackend>>,
    clock: FrameClock,
    pointer: PointerState,
    config: EffectsConfig,
    viewport: (f32, f32),
    elapsed: f32,
}

impl FrameDriver {
    /// Create a driver
    ///
    /// `viewport` is the initial viewport size in pixels, used for pointer
    /// normalization and viewport-sized surfaces until the first resize
    /// notification. Pass `None` for `backend` when the rendering capability
    /// is unavailable.
    #[must_use]
    pub fn new(
        config: EffectsConfig,
        viewport: (f32, f32),
        backend: Option<Box<dyn RenderBackend>>,
    ) -> Self {
        if backend.is_none() {
            info!("render capability unavailable, effects disabled");
        }
        Self {
            registry: SceneRegistry::new(),
            backend,
            clock: FrameClock::new(),
            pointer: PointerState::new(),
            config,
            viewport,
            elapsed: 0.0,
        }
    }

    /// Register a scene, replacing any previous entry under the same id
    ///
    /// Allocates an output surface from the backend; if surface creation
    /// fails the scene registers surfaceless and is skipped by the draw pass.
    /// A displaced entry's surface is released. No-op without a backend.
    pub fn register_scene(
        &mut self,
        id: impl Into<String>,
        graph: SceneGraph,
        camera: Camera,
        surface: SurfaceDesc,
    ) {
        let Some(backend) = self.backend.as_mut() else {
            debug!("register_scene skipped: no render backend");
            return;
        };

        let handle = match backend.create_surface(&surface) {
            Ok(handle) => Some(handle),
            Err(err) => {
                debug!("surface creation failed, scene registers surfaceless: {err}");
                None
            }
        };

        let id = id.into();
        let displaced = self.registry.insert(
            id.clone(),
            SceneEntry {
                graph,
                camera,
                surface: handle,
                size: surface.size,
                particles: None,
            },
        );
        if let Some(old) = displaced {
            if let Some(old_surface) = old.surface {
                backend.destroy_surface(old_surface);
            }
            debug!("scene '{id}' re-registered, previous entry released");
        }
    }

    /// Build a particle group and attach it to the scene registered as `id`
    ///
    /// Uses the thread RNG; see [`Self::register_particle_group_with`] for
    /// deterministic generation. No-op without a backend or when no scene
    /// with that id exists.
    pub fn register_particle_group(&mut self, id: &str, params: &ParticleParams) {
        self.register_particle_group_with(id, params, &mut rand::thread_rng());
    }

    /// Build a particle group with the supplied RNG and attach it to `id`
    pub fn register_particle_group_with<R: Rng + ?Sized>(
        &mut self,
        id: &str,
        params: &ParticleParams,
        rng: &mut R,
    ) {
        if self.backend.is_none() {
            debug!("register_particle_group skipped: no render backend");
            return;
        }
        let Some(entry) = self.registry.get_mut(id) else {
            debug!("register_particle_group skipped: no scene '{id}'");
            return;
        };
        entry.particles = Some(ParticleGroup::generate(params, rng));
    }

    /// Pointer-move notification in window coordinates
    pub fn pointer_moved(&mut self, window_x: f32, window_y: f32) {
        self.pointer
            .update_from_window(window_x, window_y, self.viewport.0, self.viewport.1);
    }

    /// Viewport-resize notification
    ///
    /// Updates the aspect ratio and surface size of every viewport-sized
    /// scene; fixed-size scenes keep their dimensions.
    pub fn viewport_resized(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = (width, height);
        let aspect = width / height;
        for (_, entry) in self.registry.iter_mut() {
            if entry.size == SurfaceSize::Viewport {
                entry.camera.set_aspect(aspect);
                if let (Some(backend), Some(surface)) = (self.backend.as_mut(), entry.surface) {
                    backend.resize_surface(surface, width, height);
                }
            }
        }
    }

    /// Set the hover state of the particle group attached to `id`
    pub fn set_hover(&mut self, id: &str, hovering: bool) {
        let rates = &self.config.animation;
        if let Some(entry) = self.registry.get_mut(id) {
            if let Some(particles) = entry.particles.as_mut() {
                particles.set_hover(hovering, rates);
            }
        }
    }

    /// Advance all animation state by an explicit delta, without drawing
    ///
    /// This is the deterministic core of [`Self::tick`], exposed for hosts
    /// that bring their own clock and for tests that need exact deltas.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        let rates = &self.config.animation;

        for (_, entry) in self.registry.iter_mut() {
            for object in &mut entry.graph.objects {
                object.rotation += object.spin_rate * dt;
                if let Some(motion) = object.float_motion {
                    object.position.y = (self.elapsed + motion.phase).sin() * motion.amplitude;
                }
            }
            if let Some(particles) = entry.particles.as_mut() {
                particles.update(dt, &self.pointer, rates);
            }
        }
    }

    /// One frame tick: sample the clock, advance, draw every scene
    pub fn tick(&mut self) {
        let dt = self.clock.tick();
        self.advance(dt);
        self.draw_all();
    }

    /// Run ticks until the stop handle fires
    ///
    /// Stands in for the host's per-refresh callback scheduling: each
    /// iteration runs one tick to completion, then sleeps a fixed budget
    /// derived from the configured target FPS. Tick cost is not subtracted,
    /// so the effective rate lands slightly below the target.
    pub fn run(&mut self, stop: &StopHandle) {
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(self.config.target_fps.0.max(1)));
        info!(
            "frame loop started: {} scenes, target {} fps",
            self.registry.len(),
            self.config.target_fps.0
        );
        while !stop.is_stopped() {
            self.tick();
            std::thread::sleep(frame_budget);
        }
        info!("frame loop stopped after {} frames", self.clock.frame_count());
    }

    /// Release every surface and clear the registry
    ///
    /// Idempotent: a second call finds an empty registry and does nothing.
    /// Ticking after disposal issues zero draw calls.
    pub fn dispose(&mut self) {
        let count = self.registry.len();
        for (_, entry) in self.registry.drain() {
            if let (Some(backend), Some(surface)) = (self.backend.as_mut(), entry.surface) {
                backend.destroy_surface(surface);
            }
        }
        if count > 0 {
            info!("disposed {count} scenes");
        }
    }

    /// Look up a registered scene
    #[must_use]
    pub fn scene(&self, id: &str) -> Option<&SceneEntry> {
        self.registry.get(id)
    }

    /// Look up a registered scene mutably
    pub fn scene_mut(&mut self, id: &str) -> Option<&mut SceneEntry> {
        self.registry.get_mut(id)
    }

    /// Number of registered scenes
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.registry.len()
    }

    /// Current normalized pointer state
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Total animation time advanced so far in seconds
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    fn draw_all(&mut self) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        for (id, entry) in self.registry.iter() {
            let Some(surface) = entry.surface else {
                continue;
            };
            if let Err(err) = backend.draw(surface, &entry.graph, &entry.camera, entry.particles.as_ref())
            {
                debug!("draw skipped for scene '{id}': {err}");
            }
        }
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::HeadlessBackend;
    use crate::scene::{Color, GeometryKind, Material, RenderObject};

    fn driver_with_backend() -> FrameDriver {
        FrameDriver::new(
            EffectsConfig::default(),
            (800.0, 600.0),
            Some(Box::new(HeadlessBackend::new())),
        )
    }

    fn cube_scene(spin_x: f32) -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.add_object(
            RenderObject::new(GeometryKind::Cube, Material::new(Color::from_hex(0x38bdf8)))
                .with_spin(Vec3::new(spin_x, 0.0, 0.0)),
        );
        graph
    }

    #[test]
    fn test_cube_rotation_after_one_second() {
        let mut driver = driver_with_backend();
        driver.register_scene(
            "a",
            cube_scene(0.5),
            Camera::perspective(75.0, 1.0),
            SurfaceDesc::fixed(100.0, 100.0),
        );

        driver.advance(1.0);

        let entry = driver.scene("a").unwrap();
        assert_eq!(entry.graph.objects[0].rotation.x, 0.5);
    }

    #[test]
    fn test_no_backend_registration_is_noop() {
        let mut driver = FrameDriver::new(EffectsConfig::default(), (800.0, 600.0), None);
        driver.register_scene(
            "a",
            cube_scene(0.5),
            Camera::perspective(75.0, 1.0),
            SurfaceDesc::viewport(),
        );
        assert_eq!(driver.scene_count(), 0);
        driver.tick(); // must not panic, draws nothing
    }

    #[test]
    fn test_floating_objects_bob_out_of_step() {
        let mut driver = driver_with_backend();
        let mut graph = SceneGraph::new();
        for index in 0..3 {
            graph.add_object(
                RenderObject::new(GeometryKind::Sphere, Material::new(Color::from_hex(0x60a5fa)))
                    .with_float_motion(0.2, index as f32),
            );
        }
        driver.register_scene(
            "floating",
            graph,
            Camera::perspective(75.0, 1.0),
            SurfaceDesc::fixed(60.0, 60.0),
        );

        driver.advance(0.5);

        let objects = &driver.scene("floating").unwrap().graph.objects;
        assert_eq!(objects[0].position.y, 0.5_f32.sin() * 0.2);
        assert_eq!(objects[1].position.y, 1.5_f32.sin() * 0.2);
        assert_ne!(objects[0].position.y, objects[2].position.y);
    }

    #[test]
    fn test_resize_updates_only_viewport_scenes() {
        let mut driver = driver_with_backend();
        driver.register_scene(
            "background",
            SceneGraph::new(),
            Camera::perspective(75.0, 800.0 / 600.0),
            SurfaceDesc::viewport(),
        );
        driver.register_scene(
            "logo",
            SceneGraph::new(),
            Camera::perspective(75.0, 1.0),
            SurfaceDesc::fixed(120.0, 120.0),
        );

        driver.viewport_resized(1920.0, 1080.0);

        assert_eq!(driver.scene("background").unwrap().camera.aspect, 1920.0 / 1080.0);
        assert_eq!(driver.scene("logo").unwrap().camera.aspect, 1.0);
    }

    #[test]
    fn test_pointer_normalization_tracks_viewport() {
        let mut driver = driver_with_backend();
        driver.pointer_moved(800.0, 0.0);
        assert_eq!(driver.pointer().x(), 1.0);
        assert_eq!(driver.pointer().y(), 1.0);

        driver.viewport_resized(1600.0, 600.0);
        driver.pointer_moved(800.0, 0.0);
        assert_eq!(driver.pointer().x(), 0.0);
    }
}
