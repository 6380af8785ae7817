//! MAX31856 thermocouple-to-digital converter driver.
//!
//! The chip is configured at construction (CR0 conversion and open-circuit
//! detection, CR1 thermocouple type) and every reading is a single
//! full-duplex SPI transfer of the whole register file:
//!
//! ```ignore
//! use max31856_oneshot::{Max31856, ThermocoupleType};
//!
//! let mut sensor = Max31856::new(spi_device, ThermocoupleType::K)?;
//! let probe = sensor.read_temperature()?;
//! let die = sensor.cold_junction_temperature()?;
//! let spi_device = sensor.dispose();
//! ```
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

mod fmt;

pub mod max31856;

pub use max31856::registers::{MAX_CLOCK_HZ, MODE};
pub use max31856::{Error, FaultStatus, Frame, Max31856, ThermocoupleType};
pub use measurements::Temperature;

/// Log faults reported by the fault status register
pub fn log_faults(faults: &FaultStatus) {
    if faults.open {
        warn!("MAX31856 - Open circuit fault");
    }
    if faults.ovuv {
        warn!("MAX31856 - Over/Under voltage fault");
    }
    if faults.cj_range {
        warn!("MAX31856 - Cold junction out of range");
    }
    if faults.tc_range {
        warn!("MAX31856 - Thermocouple out of range");
    }
    if faults.cj_high {
        warn!("MAX31856 - Cold junction high fault");
    }
    if faults.cj_low {
        warn!("MAX31856 - Cold junction low fault");
    }
    if faults.tc_high {
        warn!("MAX31856 - Thermocouple high fault");
    }
    if faults.tc_low {
        warn!("MAX31856 - Thermocouple low fault");
    }
}
