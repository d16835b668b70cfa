#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};
use esp_hal::Async;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::timer::timg::TimerGroup;
use rtt_target::rprintln;
use static_cell::StaticCell;

// Display-LCD panel specific imports
use embedded_graphics::prelude::*;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use mipidsi::interface::SpiInterface;
use mipidsi::{Builder as MipidsiBuilder, models::ILI9342CRgb565};

use hygro_core::demo::{ButtonsDemo, GraphDemo, PREFERRED_FPS, graph};
use hygro_core::frame::FramePacer;
use hygro_core::sample_cell::SampleCell;
use hygro_core::sensors::TemperatureUnit;
use hygro_core::ui::TouchReading;
use hygro_firmware::i2c_bus::AsyncI2cDevice;
use hygro_firmware::sensors::{Bh1750Light, Sht40, read_with_retry};
use hygro_firmware::touch::TouchPanel;

const DISPLAY_WIDTH: u16 = 320;
const DISPLAY_HEIGHT: u16 = 240;

/// Queue depth between the touch polling task and the UI loop.
const TOUCH_QUEUE_DEPTH: usize = 8;

type SharedI2cBus = Mutex<CriticalSectionRawMutex, I2c<'static, Async>>;
type BusDevice = AsyncI2cDevice<'static, I2c<'static, Async>>;

static I2C_BUS: StaticCell<SharedI2cBus> = StaticCell::new();
static SPI_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

/// Latest temperature sample, sensor task to UI loop.
static TEMPERATURE: SampleCell = SampleCell::new();

/// Touch readings, touch polling task to UI loop.
static TOUCH_CHANNEL: Channel<CriticalSectionRawMutex, TouchReading, TOUCH_QUEUE_DEPTH> =
    Channel::new();

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rprintln!("PANIC: {}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

/// The demo scene running on this boot, selected by cargo feature.
enum Scene {
    Buttons(ButtonsDemo),
    Graph(GraphDemo),
}

/// Polls the humidity/temperature sensor forever and publishes each
/// reading. The sensor's own measurement time paces the loop; a cycle
/// whose retries are exhausted is logged and skipped.
#[embassy_executor::task]
async fn sensor_task(mut sensor: Sht40<BusDevice>) {
    loop {
        match read_with_retry(&mut sensor).await {
            Ok(measurement) => {
                TEMPERATURE.store(measurement.temperature_in(TemperatureUnit::Celsius));
            }
            Err(e) => log::error!("temperature poll cycle failed: {e:?}"),
        }
    }
}

/// Polls the touch controller forever, driven only by the controller's
/// own I2C latency, and queues every reading for the UI loop.
#[embassy_executor::task]
async fn touch_task(mut panel: TouchPanel<BusDevice>) {
    loop {
        let reading = panel.read().await;
        TOUCH_CHANNEL.send(reading).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    rtt_target::rtt_init_log!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 73744);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!("Embassy initialized");

    // Configure and initialize the display

    // 1. SPI bus with a dummy CS pin (no hardware CS for this display)
    let spi_bus = Spi::new(peripherals.SPI2, SpiConfig::default())
        .unwrap()
        .with_sck(peripherals.GPIO36)
        .with_mosi(peripherals.GPIO37);
    let cs = Output::new(peripherals.GPIO35, Level::High, OutputConfig::default());
    let spi_device = ExclusiveDevice::new_no_delay(spi_bus, cs).unwrap();

    // 2. DC (Data/Command) pin and SPI batching buffer
    let dc = Output::new(peripherals.GPIO34, Level::Low, OutputConfig::default());
    let di = SpiInterface::new(spi_device, dc, SPI_BUFFER.init([0u8; 512]));

    // 3. Build and initialize the display driver
    let mut display = MipidsiBuilder::new(ILI9342CRgb565, di)
        .display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .init(&mut embassy_time::Delay)
        .expect("Failed to initialize display");

    log::info!("Display initialized");

    // Shared I2C bus: touch controller and both sensors
    let i2c = I2c::new(peripherals.I2C0, I2cConfig::default())
        .unwrap()
        .with_sda(peripherals.GPIO12)
        .with_scl(peripherals.GPIO11)
        .into_async();
    let i2c_bus = I2C_BUS.init(Mutex::new(i2c));

    let humidity_sensor = Sht40::new(AsyncI2cDevice::new(i2c_bus));
    let touch_panel = TouchPanel::new(AsyncI2cDevice::new(i2c_bus));
    // Constructed for board bring-up parity; the demos have no consumer
    // for the light reading yet.
    let _light_sensor = Bh1750Light::new(AsyncI2cDevice::new(i2c_bus));

    spawner
        .spawn(sensor_task(humidity_sensor))
        .expect("Failed to spawn sensor task");
    spawner
        .spawn(touch_task(touch_panel))
        .expect("Failed to spawn touch task");

    let mut scene = if cfg!(feature = "demo-buttons") {
        log::info!("Starting button demo");
        Scene::Buttons(ButtonsDemo::new())
    } else {
        log::info!("Starting graph demo");
        Scene::Graph(GraphDemo::new(Size::new(
            DISPLAY_WIDTH as u32,
            DISPLAY_HEIGHT as u32,
        )))
    };

    let pacer = FramePacer::from_fps(PREFERRED_FPS);
    let tick_interval = Duration::from_millis(graph::TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        // Drain every touch reading queued since the last frame.
        while let Ok(reading) = TOUCH_CHANNEL.try_receive() {
            if let Scene::Buttons(demo) = &mut scene {
                demo.handle_input(reading);
            }
        }

        if let Scene::Graph(demo) = &mut scene {
            if last_tick.elapsed() >= tick_interval {
                demo.tick(TEMPERATURE.load());
                last_tick = Instant::now();
            }
        }

        let result = match &scene {
            Scene::Buttons(demo) => demo.render(&mut display),
            Scene::Graph(demo) => demo.render(&mut display),
        };
        if let Err(e) = result {
            log::error!("Draw error: {:?}", e);
        }

        // Sleep out the rest of the frame budget; overruns proceed
        // immediately.
        let elapsed_micros = frame_start.elapsed().as_micros();
        Timer::after(Duration::from_micros(pacer.sleep_micros(elapsed_micros))).await;
    }
}
