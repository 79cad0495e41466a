//! System Integration Module
//!
//! The boot sequence uses the SIM for the system clock dividers and for the
//! COP watchdog control; the clock gating and peripheral clock muxes live
//! here too.

use crate::pac::SIM;
use crate::regs::sim::{CLKDIV1, COPC, SOPT2, SRVCOP};
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

/// Core/system clock divider (OUTDIV1).
///
/// Divides MCGOUTCLK down to the core clock.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutDiv1 {
    /// Divide by 1.
    Div1 = 0b0000,
    /// Divide by 2.
    Div2 = 0b0001,
    /// Divide by 3.
    Div3 = 0b0010,
    /// Divide by 4.
    Div4 = 0b0011,
    /// Divide by 5.
    Div5 = 0b0100,
    /// Divide by 6.
    Div6 = 0b0101,
    /// Divide by 7.
    Div7 = 0b0110,
    /// Divide by 8.
    Div8 = 0b0111,
    /// Divide by 9.
    Div9 = 0b1000,
    /// Divide by 10.
    Div10 = 0b1001,
    /// Divide by 11.
    Div11 = 0b1010,
    /// Divide by 12.
    Div12 = 0b1011,
    /// Divide by 13.
    Div13 = 0b1100,
    /// Divide by 14.
    Div14 = 0b1101,
    /// Divide by 15.
    Div15 = 0b1110,
    /// Divide by 16.
    Div16 = 0b1111,
}

impl OutDiv1 {
    /// Divisor value.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::sim::OutDiv1;
    ///
    /// assert_eq!(OutDiv1::Div1.divisor(), 1);
    /// assert_eq!(OutDiv1::Div2.divisor(), 2);
    /// assert_eq!(OutDiv1::Div16.divisor(), 16);
    /// ```
    pub const fn divisor(&self) -> u32 {
        *self as u32 + 1
    }

    pub(crate) const fn from_raw(raw: u8) -> OutDiv1 {
        // all 16 encodings of the 4-bit field are valid
        match raw & 0b1111 {
            0b0000 => OutDiv1::Div1,
            0b0001 => OutDiv1::Div2,
            0b0010 => OutDiv1::Div3,
            0b0011 => OutDiv1::Div4,
            0b0100 => OutDiv1::Div5,
            0b0101 => OutDiv1::Div6,
            0b0110 => OutDiv1::Div7,
            0b0111 => OutDiv1::Div8,
            0b1000 => OutDiv1::Div9,
            0b1001 => OutDiv1::Div10,
            0b1010 => OutDiv1::Div11,
            0b1011 => OutDiv1::Div12,
            0b1100 => OutDiv1::Div13,
            0b1101 => OutDiv1::Div14,
            0b1110 => OutDiv1::Div15,
            _ => OutDiv1::Div16,
        }
    }
}

impl Default for OutDiv1 {
    fn default() -> Self {
        OutDiv1::Div1
    }
}

impl From<OutDiv1> for u8 {
    fn from(div: OutDiv1) -> Self {
        div as u8
    }
}

/// Bus/flash clock divider (OUTDIV4).
///
/// Divides the core clock down to the bus and flash clocks.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutDiv4 {
    /// Divide by 1.
    Div1 = 0b000,
    /// Divide by 2.
    Div2 = 0b001,
    /// Divide by 3.
    Div3 = 0b010,
    /// Divide by 4.
    Div4 = 0b011,
    /// Divide by 5.
    Div5 = 0b100,
    /// Divide by 6.
    Div6 = 0b101,
    /// Divide by 7.
    Div7 = 0b110,
    /// Divide by 8.
    Div8 = 0b111,
}

impl OutDiv4 {
    /// Divisor value.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::sim::OutDiv4;
    ///
    /// assert_eq!(OutDiv4::Div1.divisor(), 1);
    /// assert_eq!(OutDiv4::Div8.divisor(), 8);
    /// ```
    pub const fn divisor(&self) -> u32 {
        *self as u32 + 1
    }

    pub(crate) const fn from_raw(raw: u8) -> OutDiv4 {
        match raw & 0b111 {
            0b000 => OutDiv4::Div1,
            0b001 => OutDiv4::Div2,
            0b010 => OutDiv4::Div3,
            0b011 => OutDiv4::Div4,
            0b100 => OutDiv4::Div5,
            0b101 => OutDiv4::Div6,
            0b110 => OutDiv4::Div7,
            _ => OutDiv4::Div8,
        }
    }
}

impl Default for OutDiv4 {
    fn default() -> Self {
        OutDiv4::Div1
    }
}

impl From<OutDiv4> for u8 {
    fn from(div: OutDiv4) -> Self {
        div as u8
    }
}

/// Program the system clock dividers.
///
/// The core clock is MCGOUTCLK / `outdiv1`; the bus and flash clocks are the
/// core clock / `outdiv4`.
///
/// # Safety
///
/// Ensure peripherals are not in use before changing the bus clock they are
/// running from.
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{
///     pac,
///     sim::{set_clkdiv, OutDiv1, OutDiv4},
/// };
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// unsafe { set_clkdiv(&mut dp.SIM, OutDiv1::Div2, OutDiv4::Div2) };
/// ```
pub unsafe fn set_clkdiv(sim: &mut SIM, outdiv1: OutDiv1, outdiv4: OutDiv4) {
    sim.clkdiv1.write(
        CLKDIV1::OUTDIV1.val(u32::from(u8::from(outdiv1)))
            + CLKDIV1::OUTDIV4.val(u32::from(u8::from(outdiv4))),
    );
}

/// Current core/system clock divider.
pub fn core_div(sim: &SIM) -> OutDiv1 {
    OutDiv1::from_raw(sim.clkdiv1.read(CLKDIV1::OUTDIV1) as u8)
}

/// Current bus/flash clock divider.
pub fn bus_flash_div(sim: &SIM) -> OutDiv4 {
    OutDiv4::from_raw(sim.clkdiv1.read(CLKDIV1::OUTDIV4) as u8)
}

/// Peripheral PLL/FLL clock select.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllFllSel {
    /// MCGFLLCLK.
    Fll,
    /// MCGPLLCLK divided by 2.
    PllDiv2,
}

/// Select the clock behind the peripheral PLL/FLL mux.
///
/// UART0, the TPMs, and USB can run from this clock; in PEE mode select
/// [`PllFllSel::PllDiv2`] since the FLL is disengaged.
pub fn set_pllfllsel(sim: &mut SIM, sel: PllFllSel) {
    match sel {
        PllFllSel::Fll => sim.sopt2.modify(SOPT2::PLLFLLSEL::Fll),
        PllFllSel::PllDiv2 => sim.sopt2.modify(SOPT2::PLLFLLSEL::PllDiv2),
    }
}

/// Disable the COP watchdog.
///
/// COPC is write-once after reset; this must be the first write to it and
/// no later write can re-enable the COP.
pub fn disable_cop(sim: &mut SIM) {
    sim.copc.write(COPC::COPT::Disabled);
}

/// Service the COP watchdog.
///
/// Writes the `0x55`, `0xAA` sequence; only needed when the COP was left
/// running.
pub fn service_cop(sim: &mut SIM) {
    sim.srvcop.write(SRVCOP::SRV.val(0x55));
    sim.srvcop.write(SRVCOP::SRV.val(0xAA));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outdiv1_roundtrip() {
        for raw in 0..=0b1111u8 {
            let div: OutDiv1 = OutDiv1::from_raw(raw);
            assert_eq!(u8::from(div), raw);
            assert_eq!(div.divisor(), u32::from(raw) + 1);
        }
    }

    #[test]
    fn outdiv4_roundtrip() {
        for raw in 0..=0b111u8 {
            let div: OutDiv4 = OutDiv4::from_raw(raw);
            assert_eq!(u8::from(div), raw);
            assert_eq!(div.divisor(), u32::from(raw) + 1);
        }
    }

    #[test]
    fn defaults_divide_by_one() {
        assert_eq!(OutDiv1::default().divisor(), 1);
        assert_eq!(OutDiv4::default().divisor(), 1);
    }

    #[test]
    fn cop_disable_clears_copc() {
        // the write-once disable is a plain clear of the reset value
        assert_eq!(u32::from(COPC::COPT::Disabled), 0);
    }
}
