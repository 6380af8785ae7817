//! Blocking MAX31856 driver.
//!
//! The chip is configured once at construction and then read with a single
//! full-duplex transfer covering registers 0x00..=0x0F.

pub mod frame;
pub mod registers;

use core::fmt;

use embedded_hal::spi::SpiDevice;

pub use frame::{FaultStatus, Frame};
use registers::*;
pub use registers::ThermocoupleType;

use crate::log_faults;
use measurements::Temperature;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// SPI transport failure
    Spi(E),
    /// CR0 did not echo the configured value
    DeviceNotFound,
    /// Open-circuit bit set in the fault status register
    ThermocoupleNotConnected,
    /// The driver no longer owns a transport
    InvalidArgument,
}

impl<E> Error<E> {
    /// Bus, protocol or sensor failure, as opposed to misuse of the driver
    pub fn is_io_failure(&self) -> bool {
        !matches!(self, Error::InvalidArgument)
    }
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Spi(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "spi error: {:?}", e),
            Error::DeviceNotFound => f.write_str("device not found"),
            Error::ThermocoupleNotConnected => f.write_str("thermocouple not connected"),
            Error::InvalidArgument => f.write_str("no transport"),
        }
    }
}

/// MAX31856 operated with a fixed CR0 setting and a chosen thermocouple type
#[derive(Debug)]
pub struct Max31856<SPI> {
    spi: Option<SPI>,
    thermocouple: ThermocoupleType,
}

impl<SPI> Max31856<SPI>
where
    SPI: SpiDevice,
{
    /// Takes ownership of the SPI device and writes CR0 then CR1.
    ///
    /// The SPI device must be set up for [`MODE`], MSB first, at no more
    /// than [`MAX_CLOCK_HZ`].
    pub fn new(mut spi: SPI, thermocouple: ThermocoupleType) -> Result<Self, Error<SPI::Error>> {
        spi.write(&[CR0_WRITE, CR0_ONESHOT_FAULT_SETTING])?;
        spi.write(&[CR1_WRITE, thermocouple.register_value()])?;

        info!(
            "MAX31856 configured: CR0={:02X} CR1={:02X}",
            CR0_ONESHOT_FAULT_SETTING,
            thermocouple.register_value()
        );

        Ok(Self {
            spi: Some(spi),
            thermocouple,
        })
    }

    pub fn thermocouple_type(&self) -> ThermocoupleType {
        self.thermocouple
    }

    fn spi(&mut self) -> Result<&mut SPI, Error<SPI::Error>> {
        self.spi.as_mut().ok_or(Error::InvalidArgument)
    }

    /// Reads registers 0x00..=0x0F in one transaction
    pub fn read_frame(&mut self) -> Result<Frame, Error<SPI::Error>> {
        let mut write = [0u8; FRAME_LEN];
        write[0] = CR0_READ;
        let mut read = [0u8; FRAME_LEN];

        self.spi()?.transfer(&mut read, &write)?;
        trace!("MAX31856 frame: {}", read);

        Ok(Frame::from_bytes(read))
    }

    fn read_valid_frame(&mut self) -> Result<Frame, Error<SPI::Error>> {
        let frame = self.read_frame()?;
        if let Err(e) = frame.validate() {
            match e {
                Error::DeviceNotFound => log_absent(&frame),
                _ => log_faults(&frame.fault_status()),
            }
            return Err(e);
        }
        Ok(frame)
    }

    /// Linearized thermocouple temperature.
    ///
    /// Fails with [`Error::DeviceNotFound`] before considering the
    /// open-circuit bit.
    pub fn read_temperature(&mut self) -> Result<Temperature, Error<SPI::Error>> {
        let frame = self.read_valid_frame()?;
        Ok(Temperature::from_celsius(f64::from(frame.thermocouple_celsius())))
    }

    /// [`read_temperature`](Self::read_temperature) for polling loops:
    /// any failure becomes `None`. Callers wanting the 0 °C placeholder use
    /// `unwrap_or_else(|| Temperature::from_celsius(0.0))`.
    pub fn try_read_temperature(&mut self) -> Option<Temperature> {
        self.read_temperature().ok()
    }

    /// Cold-junction (die) temperature, accurate to ±0.7 °C over -20..85 °C.
    ///
    /// The frame is not validated: an absent chip yields a plausible but
    /// meaningless value. Use [`temperatures`](Self::temperatures) for a
    /// checked reading.
    pub fn cold_junction_temperature(&mut self) -> Result<Temperature, Error<SPI::Error>> {
        let frame = self.read_frame()?;
        Ok(Temperature::from_celsius(f64::from(frame.cold_junction_celsius())))
    }

    /// Thermocouple and cold-junction temperatures from one validated frame
    pub fn temperatures(&mut self) -> Result<(Temperature, Temperature), Error<SPI::Error>> {
        let frame = self.read_valid_frame()?;
        Ok((
            Temperature::from_celsius(f64::from(frame.thermocouple_celsius())),
            Temperature::from_celsius(f64::from(frame.cold_junction_celsius())),
        ))
    }

    /// All fault status register bits
    pub fn fault_status(&mut self) -> Result<FaultStatus, Error<SPI::Error>> {
        let frame = self.read_frame()?;
        if !frame.is_device_present() {
            log_absent(&frame);
            return Err(Error::DeviceNotFound);
        }
        Ok(frame.fault_status())
    }

    /// Pulses FAULTCLR in CR0, leaving CR0 at its configured value
    pub fn clear_faults(&mut self) -> Result<(), Error<SPI::Error>> {
        let spi = self.spi()?;
        spi.write(&[CR0_WRITE, CR0_ONESHOT_FAULT_SETTING | CR0_FAULTCLR])?;
        spi.write(&[CR0_WRITE, CR0_ONESHOT_FAULT_SETTING])?;
        Ok(())
    }

    /// Hands the SPI device back. Only the first call returns it; later
    /// calls, and any read after disposal, find no transport.
    pub fn dispose(&mut self) -> Option<SPI> {
        let spi = self.spi.take();
        if spi.is_some() {
            debug!("MAX31856 released");
        }
        spi
    }
}

fn log_absent(frame: &Frame) {
    warn!("MAX31856 not found - CR0 echo {:02X}", frame.cr0_echo());
}
