//! Integration tests driving the public API against the headless backend

use approx::assert_relative_eq;
use fx_engine::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn palette() -> Vec<Color> {
    vec![
        Color::from_hex(0x38bdf8),
        Color::from_hex(0x1e3a8a),
        Color::from_hex(0x60a5fa),
    ]
}

fn particle_params(count: usize, movement: MovementMode) -> ParticleParams {
    ParticleParams {
        count,
        palette: palette(),
        base_size: 0.02,
        spread: 20.0,
        movement,
    }
}

fn driver_and_counter() -> (FrameDriver, Arc<AtomicUsize>) {
    let backend = HeadlessBackend::new();
    let counter = backend.draw_call_counter();
    let driver = FrameDriver::new(
        EffectsConfig::default(),
        (800.0, 600.0),
        Some(Box::new(backend)),
    );
    (driver, counter)
}

fn register_particle_scene(driver: &mut FrameDriver, id: &str, count: usize, movement: MovementMode) {
    driver.register_scene(
        id,
        SceneGraph::new(),
        Camera::perspective(75.0, 800.0 / 600.0).at(Vec3::new(0.0, 0.0, 5.0)),
        SurfaceDesc::viewport(),
    );
    let mut rng = StdRng::seed_from_u64(42);
    driver.register_particle_group_with(id, &particle_params(count, movement), &mut rng);
}

#[test]
fn tick_draws_once_per_registered_scene() {
    let (mut driver, counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 200, MovementMode::Floating);
    driver.register_scene(
        "logo",
        SceneGraph::new(),
        Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 3.0)),
        SurfaceDesc::fixed(120.0, 120.0),
    );

    driver.tick();
    assert_eq!(counter.load(Ordering::Relaxed), 2);

    driver.tick();
    assert_eq!(counter.load(Ordering::Relaxed), 4);
}

#[test]
fn dispose_then_tick_draws_nothing() {
    let (mut driver, counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 200, MovementMode::Floating);

    driver.tick();
    let drawn_before = counter.load(Ordering::Relaxed);
    assert!(drawn_before > 0);

    driver.dispose();
    driver.tick();
    driver.tick();
    assert_eq!(counter.load(Ordering::Relaxed), drawn_before);
}

#[test]
fn dispose_is_idempotent() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 50, MovementMode::Gentle);

    driver.dispose();
    assert_eq!(driver.scene_count(), 0);
    driver.dispose();
    assert_eq!(driver.scene_count(), 0);
}

#[test]
fn particle_colors_come_from_the_palette() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 500, MovementMode::Floating);

    let group = driver.scene("hero").unwrap().particles.as_ref().unwrap();
    assert_eq!(group.len(), 500);
    let palette = palette();
    for color in group.colors() {
        assert!(palette.contains(color));
    }
}

#[test]
fn empty_particle_group_is_registered_without_geometry() {
    let (mut driver, counter) = driver_and_counter();
    register_particle_scene(&mut driver, "empty", 0, MovementMode::Floating);

    let group = driver.scene("empty").unwrap().particles.as_ref().unwrap();
    assert!(group.is_empty());

    // Still a drawable scene, just with no points
    driver.tick();
    assert_eq!(counter.load(Ordering::Relaxed), 1);
}

#[test]
fn floating_group_advances_at_fixed_rates() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 200, MovementMode::Floating);

    driver.advance(0.016);

    let group = driver.scene("hero").unwrap().particles.as_ref().unwrap();
    assert_eq!(group.rotation.y, 0.016 * 0.2);
    assert_eq!(group.rotation.x, 0.016 * 0.1);
}

#[test]
fn gentle_group_never_touches_the_secondary_axis() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "card", 20, MovementMode::Gentle);

    for _ in 0..1000 {
        driver.advance(0.016);
    }

    let group = driver.scene("card").unwrap().particles.as_ref().unwrap();
    assert_eq!(group.rotation.x, 0.0);
    assert!(group.rotation.y > 0.0);
}

#[test]
fn off_center_pointer_compounds_group_rotation() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 10, MovementMode::None);

    driver.pointer_moved(800.0, 300.0); // right edge, vertical center
    driver.advance(0.1);
    driver.advance(0.1);

    let group = driver.scene("hero").unwrap().particles.as_ref().unwrap();
    assert_eq!(group.rotation.y, 2.0 * (1.0 * 0.1 * 0.5));
    assert_eq!(group.rotation.x, 0.0);
}

#[test]
fn reregistration_overwrites_and_restarts_animation() {
    let (mut driver, counter) = driver_and_counter();

    let mut graph = SceneGraph::new();
    graph.add_object(
        RenderObject::new(GeometryKind::Cube, Material::new(Color::from_hex(0x38bdf8)))
            .with_spin(Vec3::new(0.5, 0.0, 0.0)),
    );
    driver.register_scene(
        "a",
        graph.clone(),
        Camera::perspective(75.0, 1.0),
        SurfaceDesc::fixed(100.0, 100.0),
    );
    driver.advance(1.0);
    assert_eq!(driver.scene("a").unwrap().graph.objects[0].rotation.x, 0.5);

    // Fresh registration under the same key resets rotation state
    driver.register_scene(
        "a",
        graph,
        Camera::perspective(75.0, 1.0),
        SurfaceDesc::fixed(100.0, 100.0),
    );
    assert_eq!(driver.scene_count(), 1);
    assert_eq!(driver.scene("a").unwrap().graph.objects[0].rotation.x, 0.0);

    driver.tick();
    assert_eq!(counter.load(Ordering::Relaxed), 1);
}

#[test]
fn hover_eases_group_scale() {
    let (mut driver, _counter) = driver_and_counter();
    register_particle_scene(&mut driver, "card", 20, MovementMode::Gentle);

    driver.set_hover("card", true);
    for _ in 0..300 {
        driver.advance(0.016);
    }
    let scale = driver.scene("card").unwrap().particles.as_ref().unwrap().scale;
    assert_relative_eq!(scale, 1.2, epsilon = 1e-4);

    driver.set_hover("card", false);
    for _ in 0..300 {
        driver.advance(0.016);
    }
    let scale = driver.scene("card").unwrap().particles.as_ref().unwrap().scale;
    assert_relative_eq!(scale, 1.0, epsilon = 1e-4);
}

#[test]
fn missing_capability_disables_everything() {
    let mut driver = FrameDriver::new(EffectsConfig::default(), (800.0, 600.0), None);

    driver.register_scene(
        "hero",
        SceneGraph::new(),
        Camera::perspective(75.0, 1.0),
        SurfaceDesc::viewport(),
    );
    driver.register_particle_group("hero", &particle_params(100, MovementMode::Floating));

    assert_eq!(driver.scene_count(), 0);
    driver.tick();
    driver.dispose();
}

#[test]
fn stop_handle_ends_the_run_loop() {
    let (mut driver, counter) = driver_and_counter();
    register_particle_scene(&mut driver, "hero", 10, MovementMode::Floating);

    let stop = StopHandle::new();
    let remote = stop.clone();
    let watcher = std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(50));
        remote.stop();
    });

    driver.run(&stop);
    watcher.join().unwrap();

    assert!(stop.is_stopped());
    assert!(counter.load(Ordering::Relaxed) > 0);
}
