//! FT6336U touch panel adapter.
//!
//! Maps the controller's scan results onto the core's [`TouchReading`]:
//! the primary touch point when a finger is down, an unpressed reading
//! otherwise. Scan errors are logged and reported as "no touch" -- the
//! dispatch loop has no error channel and the next scan will recover.

use embedded_hal_async::i2c::I2c;
use ft6336u_driver::FT6336U;
use hygro_core::ui::TouchReading;

pub struct TouchPanel<I2C> {
    driver: FT6336U<I2C>,
}

impl<I2C: I2c> TouchPanel<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            driver: FT6336U::new(i2c),
        }
    }

    /// Reads the current touch state.
    pub async fn read(&mut self) -> TouchReading {
        match self.driver.scan().await {
            Ok(data) if data.touch_count > 0 => {
                let point = data.points[0];
                TouchReading::pressed(point.x as i32, point.y as i32)
            }
            Ok(_) => TouchReading::released(),
            Err(e) => {
                log::warn!("touch scan failed: {:?}", e);
                TouchReading::released()
            }
        }
    }
}
