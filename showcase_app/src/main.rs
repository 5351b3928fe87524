//! Showcase binary: registers the full decorative scene set of the course
//! site's landing page against the headless backend and drives it for a few
//! seconds, interleaving pointer, hover, and resize events between ticks the
//! way the host page would.

use fx_engine::prelude::*;
use log::info;
use rand::Rng;
use std::sync::atomic::Ordering;
use std::time::Duration;

const SKY: u32 = 0x38bdf8;
const NAVY: u32 = 0x1e3a8a;
const BLUE: u32 = 0x2563eb;
const LIGHT_BLUE: u32 = 0x60a5fa;
const CYAN: u32 = 0x0ea5e9;

const VIEWPORT: (f32, f32) = (1280.0, 720.0);

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EffectsConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; falling back to defaults");
                EffectsConfig::default()
            }
        },
        None => EffectsConfig::default(),
    };

    let backend = HeadlessBackend::new();
    let draw_calls = backend.draw_call_counter();
    let mut driver = FrameDriver::new(config.clone(), VIEWPORT, Some(Box::new(backend)));

    register_logo(&mut driver);
    register_hero_particles(&mut driver, &config);
    register_cards(&mut driver, &config);
    register_floating_elements(&mut driver);
    register_background(&mut driver, &config);

    info!("{} scenes registered", driver.scene_count());

    // Interleave events between ticks the way the page event queue would
    let mut rng = rand::thread_rng();
    for frame in 0u32..180 {
        if frame % 5 == 0 {
            driver.pointer_moved(
                rng.gen_range(0.0..VIEWPORT.0),
                rng.gen_range(0.0..VIEWPORT.1),
            );
        }
        match frame {
            30 => driver.set_hover("card-0", true),
            90 => {
                driver.set_hover("card-0", false);
                driver.viewport_resized(1920.0, 1080.0);
            }
            _ => {}
        }
        driver.tick();
        std::thread::sleep(Duration::from_millis(16));
    }

    // Hand the remaining frames to the cancellable run loop
    let stop = StopHandle::new();
    let remote = stop.clone();
    let timer = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(1));
        remote.stop();
    });
    driver.run(&stop);
    timer.join().ok();

    driver.dispose();
    driver.tick(); // post-disposal tick draws nothing

    info!("done: {} draw calls issued", draw_calls.load(Ordering::Relaxed));
}

fn register_logo(driver: &mut FrameDriver) {
    let mut graph = SceneGraph::new();
    graph.add_object(
        RenderObject::new(
            GeometryKind::TorusKnot,
            Material::new(Color::from_hex(SKY)).with_opacity(0.8),
        )
        .with_spin(Vec3::new(0.5, 0.3, 0.0)),
    );
    graph.add_light(Light::Ambient {
        color: Color::from_hex(0x404040),
        intensity: 0.6,
    });
    graph.add_light(Light::Directional {
        color: Color::from_hex(0xffffff),
        intensity: 0.8,
        direction: Vec3::new(1.0, 1.0, 1.0),
    });

    driver.register_scene(
        "logo",
        graph,
        Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 3.0)),
        SurfaceDesc::fixed(120.0, 120.0),
    );
}

fn register_hero_particles(driver: &mut FrameDriver, config: &EffectsConfig) {
    driver.register_scene(
        "hero-particles",
        SceneGraph::new(),
        Camera::perspective(75.0, VIEWPORT.0 / VIEWPORT.1).at(Vec3::new(0.0, 0.0, 5.0)),
        SurfaceDesc::viewport(),
    );
    driver.register_particle_group(
        "hero-particles",
        &ParticleParams {
            count: config.particles.hero_count,
            palette: vec![
                Color::from_hex(SKY),
                Color::from_hex(NAVY),
                Color::from_hex(LIGHT_BLUE),
            ],
            base_size: config.particles.hero_size,
            spread: config.particles.hero_spread,
            movement: MovementMode::Floating,
        },
    );
}

fn register_cards(driver: &mut FrameDriver, config: &EffectsConfig) {
    for index in 0..3 {
        let id = format!("card-{index}");
        driver.register_scene(
            id.as_str(),
            SceneGraph::new(),
            Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 3.0)),
            SurfaceDesc::fixed(100.0, 100.0),
        );
        driver.register_particle_group(
            &id,
            &ParticleParams {
                count: config.particles.card_count,
                palette: vec![Color::from_hex(SKY), Color::from_hex(NAVY)],
                base_size: config.particles.card_size,
                spread: config.particles.card_spread,
                movement: MovementMode::Gentle,
            },
        );
    }
}

fn register_floating_elements(driver: &mut FrameDriver) {
    let colors = [SKY, NAVY, LIGHT_BLUE];
    for index in 0..3usize {
        let mut graph = SceneGraph::new();
        graph.add_object(
            RenderObject::new(
                GeometryKind::Sphere,
                Material::new(Color::from_hex(colors[index % colors.len()])).with_opacity(0.7),
            )
            .with_spin(Vec3::new(0.3, 0.2, 0.0))
            .with_float_motion(0.2, index as f32),
        );
        graph.add_light(Light::Ambient {
            color: Color::from_hex(0x404040),
            intensity: 0.6,
        });
        graph.add_light(Light::Point {
            color: Color::from_hex(0xffffff),
            intensity: 0.8,
            position: Vec3::new(2.0, 2.0, 2.0),
        });

        driver.register_scene(
            format!("floating-{index}"),
            graph,
            Camera::perspective(75.0, 1.0).at(Vec3::new(0.0, 0.0, 2.0)),
            SurfaceDesc::fixed(60.0, 60.0),
        );
    }
}

fn register_background(driver: &mut FrameDriver, config: &EffectsConfig) {
    let mut rng = rand::thread_rng();
    let geometries = [
        GeometryKind::Cube,
        GeometryKind::Sphere,
        GeometryKind::Cone,
        GeometryKind::Torus,
    ];
    let colors = [NAVY, BLUE, SKY, LIGHT_BLUE];

    let mut graph = SceneGraph::new();
    for index in 0..10usize {
        graph.add_object(
            RenderObject::new(
                geometries[rng.gen_range(0..geometries.len())],
                Material::new(Color::from_hex(colors[rng.gen_range(0..colors.len())]))
                    .with_opacity(0.6),
            )
            .at(Vec3::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            ))
            .rotated(Vec3::new(
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
            ))
            .with_spin(Vec3::new(0.2, 0.1, 0.0))
            .with_float_motion(0.5, index as f32),
        );
    }
    graph.add_light(Light::Ambient {
        color: Color::from_hex(0x404040),
        intensity: 0.4,
    });
    graph.add_light(Light::Directional {
        color: Color::from_hex(0xffffff),
        intensity: 0.8,
        direction: Vec3::new(5.0, 5.0, 5.0),
    });

    driver.register_scene(
        "background",
        graph,
        Camera::perspective(75.0, VIEWPORT.0 / VIEWPORT.1).at(Vec3::new(0.0, 0.0, 10.0)),
        SurfaceDesc::viewport(),
    );

    driver.register_scene(
        "bg-particles",
        SceneGraph::new(),
        Camera::perspective(75.0, VIEWPORT.0 / VIEWPORT.1).at(Vec3::new(0.0, 0.0, 5.0)),
        SurfaceDesc::viewport(),
    );
    driver.register_particle_group(
        "bg-particles",
        &ParticleParams {
            count: config.particles.background_count,
            palette: vec![
                Color::from_hex(NAVY),
                Color::from_hex(BLUE),
                Color::from_hex(SKY),
                Color::from_hex(CYAN),
            ],
            base_size: config.particles.card_size,
            spread: config.particles.hero_spread,
            movement: MovementMode::Floating,
        },
    );
}
