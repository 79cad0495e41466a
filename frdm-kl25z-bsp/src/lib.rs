//! FRDM-KL25Z board support package.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub use kl25z_hal as hal;

use hal::{
    clock::{self, ClockConfig, Clocks},
    cortex_m::interrupt::CriticalSection,
    mcg::{xtals, PllConfig, Xtal},
    pac::{MCG, OSC0, SIM, WDOG},
    sim::{self, OutDiv1, OutDiv4, PllFllSel},
    wdog,
};

/// 8 MHz crystal fitted on the board.
pub const XTAL: Xtal = xtals::FRDM_8MHZ;

/// 96 MHz PLL configuration for the board crystal: 8 MHz / 2 × 24.
pub const PLL_96MHZ: PllConfig = match PllConfig::new(XTAL.hz(), 2, 24) {
    Ok(pll) => pll,
    Err(_) => panic!("8 MHz / 2 * 24 is a valid PLL configuration"),
};

/// 48 MHz core clock configuration.
///
/// MCGOUTCLK is 96 MHz from [`PLL_96MHZ`], the core clock 48 MHz, the bus
/// and flash clocks 24 MHz.
pub const CLOCK_48MHZ: ClockConfig =
    match ClockConfig::new(XTAL, PLL_96MHZ, OutDiv1::Div2, OutDiv4::Div2) {
        Ok(cfg) => cfg,
        Err(_) => panic!("48 MHz core and 24 MHz bus are within the device limits"),
    };

/// Board startup: disable the watchdogs and bring the core to 48 MHz.
///
/// This is the reset-handler entry point. It disables the COP (running out
/// of reset with a ~1 s timeout, and COPC is write-once) and the unlock-key
/// watchdog, walks the MCG from FEI into PEE with [`CLOCK_48MHZ`], and
/// points the peripheral PLL/FLL mux at the PLL since the FLL is disengaged
/// in PEE.
///
/// Returns [`clock::Error::Mode`] when the MCG is not in its reset mode,
/// which means startup already ran.
///
/// # Safety
///
/// 1. Ensure peripherals are not in-use before calling this function.
/// 2. Ensure peripherals have their clocks adjusted correctly for the new
///    bus clock frequency after calling this function.
///
/// # Example
///
/// ```no_run
/// use frdm_kl25z_bsp::{
///     hal::{clock::Clocks, cortex_m, pac},
///     set_sysclk_48mhz,
/// };
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// let clocks: Clocks = cortex_m::interrupt::free(|cs| unsafe {
///     set_sysclk_48mhz(&mut dp.MCG, &mut dp.OSC0, &mut dp.SIM, &mut dp.WDOG, cs)
/// })
/// .unwrap();
/// assert_eq!(clocks.core_clock_hz(), 48_000_000);
/// ```
pub unsafe fn set_sysclk_48mhz(
    mcg: &mut MCG,
    osc: &mut OSC0,
    sim: &mut SIM,
    wdog: &mut WDOG,
    cs: &CriticalSection,
) -> Result<Clocks, clock::Error> {
    sim::disable_cop(sim);
    wdog::disable(wdog, cs);
    let clocks: Clocks = clock::set_sysclk_pee(mcg, osc, sim, &CLOCK_48MHZ, cs)?;
    sim::set_pllfllsel(sim, PllFllSel::PllDiv2);
    Ok(clocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pll_96mhz() {
        assert_eq!(PLL_96MHZ.output_hz(XTAL.hz()), 96_000_000);
    }

    #[test]
    fn clock_48mhz() {
        let clocks: Clocks = CLOCK_48MHZ.clocks();
        assert_eq!(clocks.mcgoutclk_hz(), 96_000_000);
        assert_eq!(clocks.core_clock_hz(), 48_000_000);
        assert_eq!(clocks.bus_clock_hz(), 24_000_000);
    }
}
