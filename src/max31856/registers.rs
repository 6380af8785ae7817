use embedded_hal::spi::{Mode, MODE_1};

// SPI parameters the caller applies to its bus
pub const MODE: Mode = MODE_1; // MAX31856 requires Mode 1 or Mode 3
pub const MAX_CLOCK_HZ: u32 = 5_000_000; // Datasheet maximum SCLK

// MAX31856 Register Addresses (Read)
pub const CR0_READ: u8 = 0x00; // Configuration Register 0 (read)

// MAX31856 Register Addresses (Write)
pub const CR0_WRITE: u8 = 0x80; // Configuration Register 0 (write)
pub const CR1_WRITE: u8 = 0x81; // Configuration Register 1 (write)

// CR0 Bit Definitions
pub const CR0_FAULTCLR: u8 = 1 << 1; // Fault status clear

// Open Circuit Fault Detection (bits 5:4)
pub const CR0_OC_ENABLED_RS_LT_5K: u8 = 1 << 4;

pub const CR0_CONV_CONTINUOUS: u8 = 1 << 7; // Automatic conversion mode

// "One-shot" is the protocol's name for this byte; the value itself sets
// automatic conversion, which CR0 keeps stable for the echo check.
/// Written to CR0 during initialization. CR0 is the first register of the
/// read frame, so a responsive chip echoes this byte back at frame offset 1.
pub const CR0_ONESHOT_FAULT_SETTING: u8 = CR0_CONV_CONTINUOUS | CR0_OC_ENABLED_RS_LT_5K;

// CR1 Bit Definitions - Thermocouple Types (bits 3:0)
pub const CR1_TC_TYPE_B: u8 = 0x0;
pub const CR1_TC_TYPE_E: u8 = 0x1;
pub const CR1_TC_TYPE_J: u8 = 0x2;
pub const CR1_TC_TYPE_K: u8 = 0x3;
pub const CR1_TC_TYPE_N: u8 = 0x4;
pub const CR1_TC_TYPE_R: u8 = 0x5;
pub const CR1_TC_TYPE_S: u8 = 0x6;
pub const CR1_TC_TYPE_T: u8 = 0x7;

// Fault Status Register Bit Definitions
pub const SR_CJ_RANGE: u8 = 1 << 7; // Cold-Junction Out-of-Range
pub const SR_TC_RANGE: u8 = 1 << 6; // Thermocouple Out-of-Range
pub const SR_CJ_HIGH: u8 = 1 << 5; // Cold-Junction High Fault
pub const SR_CJ_LOW: u8 = 1 << 4; // Cold-Junction Low Fault
pub const SR_TC_HIGH: u8 = 1 << 3; // Thermocouple Temperature High Fault
pub const SR_TC_LOW: u8 = 1 << 2; // Thermocouple Temperature Low Fault
pub const SR_OVUV: u8 = 1 << 1; // Overvoltage or Undervoltage Input Fault
pub const SR_OPEN: u8 = 1 << 0; // Thermocouple Open-Circuit Fault

// Read frame geometry: one address byte, then registers 0x00..=0x0F
pub const READ_SIZE: usize = 16;
pub const FRAME_LEN: usize = READ_SIZE + 1;

// Frame offsets (register address + 1)
pub const FRAME_CR0: usize = 1;
pub const FRAME_CJTH: usize = 11; // Cold-Junction Temperature MSB
pub const FRAME_CJTL: usize = 12; // Cold-Junction Temperature LSB
pub const FRAME_LTCBH: usize = 13; // Linearized TC Temperature, Byte 2 (MSB)
pub const FRAME_LTCBM: usize = 14; // Linearized TC Temperature, Byte 1
pub const FRAME_LTCBL: usize = 15; // Linearized TC Temperature, Byte 0 (LSB)
pub const FRAME_SR: usize = 16; // Fault Status Register

// Fixed-point scaling
pub const TC_COUNTS_PER_DEGREE: f32 = 4096.0;
pub const CJ_COUNTS_PER_DEGREE: f32 = 256.0;
pub const SIGN_BIT: u8 = 0x80;

/// Thermocouple type selector, stored as the CR1 register value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ThermocoupleType {
    B = CR1_TC_TYPE_B,
    E = CR1_TC_TYPE_E,
    J = CR1_TC_TYPE_J,
    K = CR1_TC_TYPE_K,
    N = CR1_TC_TYPE_N,
    R = CR1_TC_TYPE_R,
    S = CR1_TC_TYPE_S,
    T = CR1_TC_TYPE_T,
}

impl ThermocoupleType {
    /// Byte written to CR1
    pub const fn register_value(self) -> u8 {
        self as u8
    }
}
