//! Crystal oscillator
//!
//! The OSC drives the external reference clock for the MCG and (through
//! OSCERCLK) for peripherals. The boot sequence enables it before switching
//! the MCG away from the internal reference.

use crate::pac::OSC0;
use crate::regs::osc::CR;
use core::convert::TryFrom;
use tock_registers::interfaces::{ReadWriteable, Readable};

/// Internal load capacitance applied to the crystal.
///
/// The raw value is the CAP field of OSC0 CR; the field is bit-reversed
/// relative to the capacitor sizes, which is why the discriminants below
/// look shuffled.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum OscCapacitance {
    /// No internal load.
    Load_0pF = 0b0000,
    /// 2 pF internal load.
    Load_2pF = 0b1000,
    /// 4 pF internal load.
    Load_4pF = 0b0100,
    /// 6 pF internal load.
    Load_6pF = 0b1100,
    /// 8 pF internal load.
    Load_8pF = 0b0010,
    /// 10 pF internal load.
    Load_10pF = 0b1010,
    /// 12 pF internal load.
    Load_12pF = 0b0110,
    /// 14 pF internal load.
    Load_14pF = 0b1110,
    /// 16 pF internal load.
    Load_16pF = 0b0001,
    /// 18 pF internal load.
    Load_18pF = 0b1001,
    /// 20 pF internal load.
    Load_20pF = 0b0101,
    /// 22 pF internal load.
    Load_22pF = 0b1101,
    /// 24 pF internal load.
    Load_24pF = 0b0011,
    /// 26 pF internal load.
    Load_26pF = 0b1011,
    /// 28 pF internal load.
    Load_28pF = 0b0111,
    /// 30 pF internal load.
    Load_30pF = 0b1111,
}

impl OscCapacitance {
    /// Load capacitance in picofarads.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::osc::OscCapacitance;
    ///
    /// assert_eq!(OscCapacitance::Load_0pF.pf(), 0);
    /// assert_eq!(OscCapacitance::Load_10pF.pf(), 10);
    /// assert_eq!(OscCapacitance::Load_30pF.pf(), 30);
    /// ```
    pub const fn pf(&self) -> u8 {
        let raw: u8 = *self as u8;
        2 * ((raw >> 3) & 0b1) + 4 * ((raw >> 2) & 0b1) + 8 * ((raw >> 1) & 0b1) + 16 * (raw & 0b1)
    }
}

impl From<OscCapacitance> for u8 {
    fn from(load: OscCapacitance) -> Self {
        load as u8
    }
}

impl TryFrom<u8> for OscCapacitance {
    type Error = u8;
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0b0000 => Ok(OscCapacitance::Load_0pF),
            0b1000 => Ok(OscCapacitance::Load_2pF),
            0b0100 => Ok(OscCapacitance::Load_4pF),
            0b1100 => Ok(OscCapacitance::Load_6pF),
            0b0010 => Ok(OscCapacitance::Load_8pF),
            0b1010 => Ok(OscCapacitance::Load_10pF),
            0b0110 => Ok(OscCapacitance::Load_12pF),
            0b1110 => Ok(OscCapacitance::Load_14pF),
            0b0001 => Ok(OscCapacitance::Load_16pF),
            0b1001 => Ok(OscCapacitance::Load_18pF),
            0b0101 => Ok(OscCapacitance::Load_20pF),
            0b1101 => Ok(OscCapacitance::Load_22pF),
            0b0011 => Ok(OscCapacitance::Load_24pF),
            0b1011 => Ok(OscCapacitance::Load_26pF),
            0b0111 => Ok(OscCapacitance::Load_28pF),
            0b1111 => Ok(OscCapacitance::Load_30pF),
            _ => Err(raw),
        }
    }
}

/// Enable the oscillator for an external crystal.
///
/// The crystal is not usable until the MCG reports OSC initialization
/// complete; the MCG mode transitions wait for that themselves.
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{mcg::xtals, osc, pac};
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// osc::enable(&mut dp.OSC0, &xtals::FRDM_8MHZ);
/// ```
pub fn enable(osc: &mut OSC0, xtal: &crate::mcg::Xtal) {
    osc.cr
        .modify(CR::CAP.val(u8::from(xtal.load())) + CR::ERCLKEN::SET);
}

/// Disable the external reference output.
///
/// # Safety
///
/// Ensure nothing is clocked from OSCERCLK or the crystal oscillator before
/// calling this function.
pub unsafe fn disable(osc: &mut OSC0) {
    osc.cr.modify(CR::ERCLKEN::CLEAR);
}

/// Returns `true` if the external reference output is enabled.
pub fn is_enabled(osc: &OSC0) -> bool {
    osc.cr.is_set(CR::ERCLKEN)
}

#[cfg(test)]
mod tests {
    use super::OscCapacitance;
    use core::convert::TryFrom;

    #[test]
    fn capacitance_roundtrip() {
        for raw in 0..=0b1111u8 {
            let load: OscCapacitance = OscCapacitance::try_from(raw).unwrap();
            assert_eq!(u8::from(load), raw);
        }
        assert!(OscCapacitance::try_from(0b1_0000).is_err());
    }

    #[test]
    fn capacitance_pf_is_even_and_unique() {
        let mut seen: [bool; 16] = [false; 16];
        for raw in 0..=0b1111u8 {
            let pf: u8 = OscCapacitance::try_from(raw).unwrap().pf();
            assert_eq!(pf % 2, 0);
            assert!(!seen[usize::from(pf / 2)]);
            seen[usize::from(pf / 2)] = true;
        }
    }
}
