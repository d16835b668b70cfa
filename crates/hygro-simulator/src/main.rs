//! Desktop simulator for the hygro-rs touchscreen demos.
//!
//! Renders the hygro-core demo scenes in an SDL2 window via
//! `embedded-graphics-simulator`. Generates synthetic temperature data
//! so the graph demo can run without hardware.
//!
//! # Key bindings
//!
//! | Key | Action      |
//! |-----|-------------|
//! | 1   | Button demo |
//! | 2   | Graph demo  |
//! | Q   | Quit        |
//!
//! Mouse presses and drags are forwarded as touch input. The demo at
//! startup can also be chosen with a single argument: `buttons` or
//! `graph`.

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::info;

use hygro_core::demo::{ButtonsDemo, GraphDemo, PREFERRED_FPS, graph};
use hygro_core::frame::FramePacer;
use hygro_core::sample_cell::SampleCell;
use hygro_core::ui::TouchReading;

/// Display panel size matched to the target hardware's LCD.
const DISPLAY_WIDTH_PX: u32 = 480;
const DISPLAY_HEIGHT_PX: u32 = 272;

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

// ---------------------------------------------------------------------------
// Mock sensor
// ---------------------------------------------------------------------------

/// Generates a synthetic temperature reading that varies over time,
/// standing in for the humidity/temperature sensor.
struct MockTemperatureSensor {
    started: Instant,
}

impl MockTemperatureSensor {
    fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Temperature: 20-26 °C sinusoidal with slow drift.
    fn read_celsius(&self) -> f32 {
        let t = self.started.elapsed().as_secs_f64();
        (23.0 + 3.0 * (t / 12.0).sin() + 0.5 * (t / 3.7).cos()) as f32
    }
}

// ---------------------------------------------------------------------------
// Demo selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoId {
    Buttons,
    Graph,
}

enum Scene {
    Buttons(ButtonsDemo),
    Graph(GraphDemo),
}

fn create_scene(demo: DemoId) -> Scene {
    match demo {
        DemoId::Buttons => Scene::Buttons(ButtonsDemo::new()),
        DemoId::Graph => Scene::Graph(GraphDemo::new(Size::new(
            DISPLAY_WIDTH_PX,
            DISPLAY_HEIGHT_PX,
        ))),
    }
}

fn keycode_to_demo(keycode: Keycode) -> Option<DemoId> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(DemoId::Buttons),
        Keycode::Num2 | Keycode::Kp2 => Some(DemoId::Graph),
        _ => None,
    }
}

fn startup_demo() -> DemoId {
    match std::env::args().nth(1).as_deref() {
        Some("buttons") => DemoId::Buttons,
        Some("graph") | None => DemoId::Graph,
        Some(other) => {
            log::warn!("Unknown demo {other:?}, starting graph demo");
            DemoId::Graph
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting hygro-rs simulator");
    info!(
        "Display: {}×{} (scale {}×)",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, WINDOW_SCALE
    );
    info!("Keys: 1=Buttons  2=Graph  Q=Quit");

    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Hygro Simulator", &output_settings);

    let sensor = MockTemperatureSensor::new();
    let temperature = SampleCell::new();

    let mut scene = create_scene(startup_demo());

    let pacer = FramePacer::from_fps(PREFERRED_FPS);
    let tick_interval = Duration::from_millis(graph::TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    // Mouse state forwarded as the touch reading each frame.
    let mut mouse_down = false;
    let mut mouse_pos = Point::zero();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => {
                    if keycode == Keycode::Q || keycode == Keycode::Escape {
                        break 'running;
                    }
                    if let Some(demo) = keycode_to_demo(keycode) {
                        info!("Switching to {:?}", demo);
                        scene = create_scene(demo);
                    }
                }

                SimulatorEvent::MouseButtonDown { point, .. } => {
                    mouse_down = true;
                    mouse_pos = point;
                }
                SimulatorEvent::MouseMove { point } => {
                    mouse_pos = point;
                }
                SimulatorEvent::MouseButtonUp { .. } => {
                    mouse_down = false;
                }

                _ => {}
            }
        }

        // --- Mock sensor --------------------------------------------------
        temperature.store(sensor.read_celsius());

        // --- Input dispatch and scene update ------------------------------
        let reading = if mouse_down {
            TouchReading::pressed(mouse_pos.x, mouse_pos.y)
        } else {
            TouchReading::released()
        };

        match &mut scene {
            Scene::Buttons(demo) => demo.handle_input(reading),
            Scene::Graph(demo) => {
                if last_tick.elapsed() >= tick_interval {
                    demo.tick(temperature.load());
                    last_tick = Instant::now();
                }
            }
        }

        // --- Render -------------------------------------------------------
        let result = match &scene {
            Scene::Buttons(demo) => demo.render(&mut display),
            Scene::Graph(demo) => demo.render(&mut display),
        };
        if let Err(e) = result {
            log::error!("Draw error: {:?}", e);
        }
        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed_micros = frame_start.elapsed().as_micros() as u64;
        let sleep_micros = pacer.sleep_micros(elapsed_micros);
        if sleep_micros > 0 {
            std::thread::sleep(Duration::from_micros(sleep_micros));
        }
    }

    info!("Simulator exiting");
}
