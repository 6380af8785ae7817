use crate::max31856::registers::*;
use crate::max31856::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultStatus {
    pub cj_range: bool, // Cold-Junction Out-of-Range
    pub tc_range: bool, // Thermocouple Out-of-Range
    pub cj_high: bool,  // Cold-Junction High Fault
    pub cj_low: bool,   // Cold-Junction Low Fault
    pub tc_high: bool,  // Thermocouple Temperature High Fault
    pub tc_low: bool,   // Thermocouple Temperature Low Fault
    pub ovuv: bool,     // Overvoltage or Undervoltage Input Fault
    pub open: bool,     // Thermocouple Open-Circuit Fault
}

impl FaultStatus {
    pub fn from_register(reg: u8) -> Self {
        Self {
            cj_range: (reg & SR_CJ_RANGE) != 0,
            tc_range: (reg & SR_TC_RANGE) != 0,
            cj_high: (reg & SR_CJ_HIGH) != 0,
            cj_low: (reg & SR_CJ_LOW) != 0,
            tc_high: (reg & SR_TC_HIGH) != 0,
            tc_low: (reg & SR_TC_LOW) != 0,
            ovuv: (reg & SR_OVUV) != 0,
            open: (reg & SR_OPEN) != 0,
        }
    }

    pub fn has_fault(&self) -> bool {
        self.cj_range
            || self.tc_range
            || self.cj_high
            || self.cj_low
            || self.tc_high
            || self.tc_low
            || self.ovuv
            || self.open
    }
}

/// Response to one full-duplex read starting at CR0.
///
/// Byte 0 is clocked in while the address is sent and carries no data;
/// bytes 1..=16 mirror registers 0x00..=0x0F.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// CR0 as reported by the chip
    pub fn cr0_echo(&self) -> u8 {
        self.0[FRAME_CR0]
    }

    /// A present chip echoes the CR0 value written at initialization.
    pub fn is_device_present(&self) -> bool {
        self.cr0_echo() == CR0_ONESHOT_FAULT_SETTING
    }

    pub fn is_open_circuit(&self) -> bool {
        (self.0[FRAME_SR] & SR_OPEN) == SR_OPEN
    }

    pub fn fault_status(&self) -> FaultStatus {
        FaultStatus::from_register(self.0[FRAME_SR])
    }

    /// Checks device presence, then the open-circuit bit.
    ///
    /// An absent chip cannot report an open circuit meaningfully, so
    /// presence is always decided first.
    pub fn validate<E>(&self) -> Result<(), Error<E>> {
        if !self.is_device_present() {
            return Err(Error::DeviceNotFound);
        }
        if self.is_open_circuit() {
            return Err(Error::ThermocoupleNotConnected);
        }
        Ok(())
    }

    /// 23-bit thermocouple magnitude and its sign bit
    pub fn thermocouple_raw(&self) -> (u32, bool) {
        let msb = self.0[FRAME_LTCBH];
        let raw = ((msb & !SIGN_BIT) as u32) << 16
            | (self.0[FRAME_LTCBM] as u32) << 8
            | self.0[FRAME_LTCBL] as u32;
        (raw, msb & SIGN_BIT != 0)
    }

    /// Thermocouple temperature, 4096 counts per degree, sign-magnitude
    pub fn thermocouple_celsius(&self) -> f32 {
        let (raw, negative) = self.thermocouple_raw();
        apply_sign(raw as f32 / TC_COUNTS_PER_DEGREE, negative)
    }

    /// 15-bit cold-junction magnitude and its sign bit
    pub fn cold_junction_raw(&self) -> (u16, bool) {
        let msb = self.0[FRAME_CJTH];
        let raw = ((msb & !SIGN_BIT) as u16) << 8 | self.0[FRAME_CJTL] as u16;
        (raw, msb & SIGN_BIT != 0)
    }

    /// Cold-junction temperature, 256 counts per degree, sign-magnitude
    pub fn cold_junction_celsius(&self) -> f32 {
        let (raw, negative) = self.cold_junction_raw();
        apply_sign(raw as f32 / CJ_COUNTS_PER_DEGREE, negative)
    }
}

fn apply_sign(magnitude: f32, negative: bool) -> f32 {
    if negative { -magnitude } else { magnitude }
}
