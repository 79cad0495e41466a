//! Boot clock configuration
//!
//! The reset handler calls one of the `set_sysclk_*` functions exactly once,
//! early, before anything hangs off the bus clock:
//!
//! 1. disable the watchdog,
//! 2. walk the MCG from FEI to the target mode,
//! 3. program the SIM dividers,
//! 4. record the resulting core clock.
//!
//! Clocks do not get frozen: the frequency observers below recompute from
//! the hardware registers, and the CMSIS-style cached core clock can be
//! refreshed with [`system_core_clock_update`].

use crate::mcg::{self, fll_factor, Drs, Frdiv, OscRange, PllConfig, PllError, Xtal};
use crate::pac::{MCG, OSC0, SIM};
use crate::regs::mcg::{C1, C2, C4, C5, C6, S, SC};
use crate::sim::{self, OutDiv1, OutDiv4};
use crate::Ratio;
use core::convert::TryFrom;
use core::sync::atomic::{AtomicU32, Ordering};
use cortex_m::interrupt::CriticalSection;
use tock_registers::interfaces::Readable;

/// Slow internal reference clock frequency in hertz.
pub const SLOW_IRC_HZ: u32 = 32_768;

/// Fast internal reference clock frequency in hertz, before FCRDIV.
pub const FAST_IRC_HZ: u32 = 4_000_000;

/// Core clock frequency out of reset: slow IRC times the FLL reset factor.
pub const FEI_RESET_HZ: u32 = SLOW_IRC_HZ * 640;

/// Maximum core clock frequency in hertz.
pub const CORE_CLK_MAX_HZ: u32 = 48_000_000;

/// Maximum bus and flash clock frequency in hertz.
pub const BUS_CLK_MAX_HZ: u32 = 24_000_000;

// Cortex-M0+ has no compare-and-swap, plain loads and stores only.
static SYSTEM_CORE_CLOCK: AtomicU32 = AtomicU32::new(FEI_RESET_HZ);
static EXTAL_HZ: AtomicU32 = AtomicU32::new(0);

pub(crate) fn set_extal_hz(hz: u32) {
    EXTAL_HZ.store(hz, Ordering::Relaxed);
}

fn extal_hz() -> Option<u32> {
    match EXTAL_HZ.load(Ordering::Relaxed) {
        0 => None,
        hz => Some(hz),
    }
}

/// Clock configuration errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The MCG is not in FEI, the configuration has already occurred.
    Mode,
    /// Core clock in hertz above [`CORE_CLK_MAX_HZ`].
    CoreClk(u32),
    /// Bus/flash clock in hertz above [`BUS_CLK_MAX_HZ`].
    BusClk(u32),
    /// PLL parameters out of range.
    Pll(PllError),
}

impl From<PllError> for Error {
    fn from(e: PllError) -> Self {
        Error::Pll(e)
    }
}

/// Frequencies resulting from a clock configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    mcgout: u32,
    core: u32,
    bus: u32,
}

impl Clocks {
    /// MCGOUTCLK frequency in hertz.
    pub const fn mcgoutclk_hz(&self) -> u32 {
        self.mcgout
    }

    /// Core/system clock frequency in hertz.
    pub const fn core_clock_hz(&self) -> u32 {
        self.core
    }

    /// Bus clock frequency in hertz.
    pub const fn bus_clock_hz(&self) -> u32 {
        self.bus
    }

    /// Flash clock frequency in hertz, same divider as the bus clock.
    pub const fn flash_clock_hz(&self) -> u32 {
        self.bus
    }
}

/// Validated PEE clock configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    xtal: Xtal,
    pll: PllConfig,
    outdiv1: OutDiv1,
    outdiv4: OutDiv4,
}

impl ClockConfig {
    /// Validate a PEE clock configuration.
    ///
    /// The PLL parameters are re-checked against the crystal, and the
    /// resulting core and bus clocks against the device limits.
    ///
    /// # Example
    ///
    /// The FRDM-KL25Z 48 MHz configuration: 8 MHz crystal, 96 MHz PLL,
    /// core 48 MHz, bus and flash 24 MHz.
    ///
    /// ```
    /// use kl25z_hal::{
    ///     clock::ClockConfig,
    ///     mcg::{xtals, PllConfig},
    ///     sim::{OutDiv1, OutDiv4},
    /// };
    ///
    /// let pll: PllConfig = PllConfig::new(8_000_000, 2, 24)?;
    /// let cfg: ClockConfig =
    ///     ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div2, OutDiv4::Div2)
    ///         .unwrap();
    /// assert_eq!(cfg.clocks().core_clock_hz(), 48_000_000);
    /// assert_eq!(cfg.clocks().bus_clock_hz(), 24_000_000);
    /// # Ok::<(), kl25z_hal::mcg::PllError>(())
    /// ```
    pub const fn new(
        xtal: Xtal,
        pll: PllConfig,
        outdiv1: OutDiv1,
        outdiv4: OutDiv4,
    ) -> Result<ClockConfig, Error> {
        // re-validate against this crystal, the PllConfig may have been
        // built for another reference
        let pll: PllConfig = match PllConfig::new(xtal.hz(), pll.prdiv(), pll.vdiv()) {
            Ok(pll) => pll,
            Err(e) => return Err(Error::Pll(e)),
        };

        let mcgout: u32 = pll.output_hz(xtal.hz());
        let core: u32 = mcgout / outdiv1.divisor();
        if core > CORE_CLK_MAX_HZ {
            return Err(Error::CoreClk(core));
        }
        let bus: u32 = core / outdiv4.divisor();
        if bus > BUS_CLK_MAX_HZ {
            return Err(Error::BusClk(bus));
        }

        Ok(ClockConfig {
            xtal,
            pll,
            outdiv1,
            outdiv4,
        })
    }

    /// Crystal description.
    pub const fn xtal(&self) -> &Xtal {
        &self.xtal
    }

    /// PLL configuration.
    pub const fn pll(&self) -> &PllConfig {
        &self.pll
    }

    /// Frequencies this configuration produces.
    pub const fn clocks(&self) -> Clocks {
        let mcgout: u32 = self.pll.output_hz(self.xtal.hz());
        let core: u32 = mcgout / self.outdiv1.divisor();
        Clocks {
            mcgout,
            core,
            bus: core / self.outdiv4.divisor(),
        }
    }
}

/// Set the system clock to the PLL via the external reference (PEE mode).
///
/// Programs the dividers first so the core and bus clocks never overshoot
/// their limits, then walks the MCG FEI → FBE → PBE → PEE and records the
/// new core clock frequency.
///
/// The MCG must be in FEI, the reset mode; on any other mode this returns
/// [`Error::Mode`] without touching the configuration.
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
/// use kl25z_hal::{
///     clock::{set_sysclk_pee, ClockConfig},
///     mcg::{xtals, PllConfig},
///     pac,
///     sim::{OutDiv1, OutDiv4},
/// };
///
/// const CFG: ClockConfig = match ClockConfig::new(
///     xtals::FRDM_8MHZ,
///     match PllConfig::new(8_000_000, 2, 24) {
///         Ok(pll) => pll,
///         Err(_) => panic!(),
///     },
///     OutDiv1::Div2,
///     OutDiv4::Div2,
/// ) {
///     Ok(cfg) => cfg,
///     Err(_) => panic!(),
/// };
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// cortex_m::interrupt::free(|cs| unsafe {
///     set_sysclk_pee(&mut dp.MCG, &mut dp.OSC0, &mut dp.SIM, &CFG, cs)
/// })
/// .unwrap();
/// ```
pub unsafe fn set_sysclk_pee(
    mcg: &mut MCG,
    osc: &mut OSC0,
    sim: &mut SIM,
    cfg: &ClockConfig,
    _cs: &CriticalSection,
) -> Result<Clocks, Error> {
    let fei: mcg::Fei = match mcg::state(mcg) {
        Some(mcg::State::Fei(fei)) => fei,
        _ => return Err(Error::Mode),
    };

    sim::set_clkdiv(sim, cfg.outdiv1, cfg.outdiv4);

    let fbe: mcg::Fbe = fei.use_external(mcg, osc, cfg.xtal());
    let pbe: mcg::Pbe = fbe.enable_pll(mcg, cfg.pll());
    let _pee: mcg::Pee = pbe.use_pll(mcg);

    let clocks: Clocks = cfg.clocks();
    SYSTEM_CORE_CLOCK.store(clocks.core_clock_hz(), Ordering::Relaxed);
    Ok(clocks)
}

/// Set the system clock from the FLL and internal reference (FEI mode).
///
/// This is the internal oscillator path: the MCG stays in its reset mode
/// and only the FLL multiplication factor and the dividers change. With
/// [`Drs::Mid`] and `dmx32` the core runs at 47.97 MHz without any crystal.
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
/// use kl25z_hal::{
///     clock::set_sysclk_fei,
///     mcg::Drs,
///     pac,
///     sim::{OutDiv1, OutDiv4},
/// };
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// cortex_m::interrupt::free(|cs| unsafe {
///     set_sysclk_fei(
///         &mut dp.MCG,
///         &mut dp.SIM,
///         Drs::Mid,
///         true,
///         OutDiv1::Div1,
///         OutDiv4::Div2,
///         cs,
///     )
/// })
/// .unwrap();
/// ```
pub unsafe fn set_sysclk_fei(
    mcg: &mut MCG,
    sim: &mut SIM,
    drs: Drs,
    dmx32: bool,
    outdiv1: OutDiv1,
    outdiv4: OutDiv4,
    _cs: &CriticalSection,
) -> Result<Clocks, Error> {
    let fei: mcg::Fei = match mcg::state(mcg) {
        Some(mcg::State::Fei(fei)) => fei,
        _ => return Err(Error::Mode),
    };

    let mcgout: u32 = SLOW_IRC_HZ * fll_factor(drs, dmx32);
    let core: u32 = mcgout / outdiv1.divisor();
    if core > CORE_CLK_MAX_HZ {
        return Err(Error::CoreClk(core));
    }
    let bus: u32 = core / outdiv4.divisor();
    if bus > BUS_CLK_MAX_HZ {
        return Err(Error::BusClk(bus));
    }

    sim::set_clkdiv(sim, outdiv1, outdiv4);
    fei.set_fll_factor(mcg, drs, dmx32);

    let clocks: Clocks = Clocks { mcgout, core, bus };
    SYSTEM_CORE_CLOCK.store(clocks.core_clock_hz(), Ordering::Relaxed);
    Ok(clocks)
}

fn fll_ref(mcg: &MCG) -> Option<Ratio<u32>> {
    if mcg.s.is_set(S::IREFST) {
        Some(Ratio::new_raw(SLOW_IRC_HZ, 1))
    } else {
        let range: OscRange = OscRange::try_from(mcg.c2.read(C2::RANGE0)).ok()?;
        let frdiv: Frdiv = Frdiv::try_from(mcg.c1.read(C1::FRDIV)).ok()?;
        Some(Ratio::new_raw(extal_hz()?, frdiv.divisor(range)))
    }
}

fn mcgout(mcg: &MCG) -> Option<Ratio<u32>> {
    match mcg.s.read(S::CLKST) {
        // FLL output; truncate the reference before multiplying, the
        // product of the raw reference and factor can overflow
        0b00 => {
            let c4 = mcg.c4.extract();
            let drs: Drs = Drs::try_from(c4.read(C4::DRST_DRS)).ok()?;
            let factor: u32 = fll_factor(drs, c4.is_set(C4::DMX32));
            Some(Ratio::new_raw(fll_ref(mcg)?.to_integer() * factor, 1))
        }
        // internal reference
        0b01 => {
            if mcg.s.is_set(S::IRCST) {
                let fcrdiv: u32 = mcg.sc.read(SC::FCRDIV).into();
                Some(Ratio::new_raw(FAST_IRC_HZ, 1 << fcrdiv))
            } else {
                Some(Ratio::new_raw(SLOW_IRC_HZ, 1))
            }
        }
        // external reference
        0b10 => Some(Ratio::new_raw(extal_hz()?, 1)),
        // PLL output
        _ => {
            let prdiv: u32 = u32::from(mcg.c5.read(C5::PRDIV0)) + 1;
            let vdiv: u32 = u32::from(mcg.c6.read(C6::VDIV0)) + u32::from(PllConfig::VDIV_MIN);
            // extal is at most 32 MHz and vdiv at most 55, no overflow
            Some(Ratio::new_raw(extal_hz()? * vdiv, prdiv))
        }
    }
}

/// Calculate the current MCGOUTCLK frequency in hertz.
///
/// Returns `None` when the frequency depends on an external reference this
/// HAL has not been told about (the crystal is recorded by the FEI → FBE
/// transition).
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{clock::mcgoutclk_hz, pac};
///
/// let dp: pac::Peripherals = pac::Peripherals::take().unwrap();
///
/// // without any initialization MCGOUTCLK is the FEI default
/// assert_eq!(mcgoutclk_hz(&dp.MCG), Some(20_971_520));
/// ```
pub fn mcgoutclk_hz(mcg: &MCG) -> Option<u32> {
    mcgout(mcg).map(|r| r.to_integer())
}

/// Calculate the current core/system clock frequency in hertz.
///
/// Fractional frequencies will be rounded down.
pub fn core_clock_hz(mcg: &MCG, sim: &SIM) -> Option<u32> {
    mcgout(mcg).map(|r| (r / sim::core_div(sim).divisor()).to_integer())
}

/// Calculate the current bus clock frequency in hertz.
///
/// Fractional frequencies will be rounded down.
pub fn bus_clock_hz(mcg: &MCG, sim: &SIM) -> Option<u32> {
    let div: u32 = sim::core_div(sim).divisor() * sim::bus_flash_div(sim).divisor();
    mcgout(mcg).map(|r| (r / div).to_integer())
}

/// Calculate the current flash clock frequency in hertz.
///
/// The flash runs from the same divider as the bus on this device.
pub fn flash_clock_hz(mcg: &MCG, sim: &SIM) -> Option<u32> {
    bus_clock_hz(mcg, sim)
}

/// Cached core clock frequency in hertz.
///
/// This is the value the `set_sysclk_*` functions recorded, the moral
/// equivalent of the CMSIS `SystemCoreClock` global. Out of reset it reads
/// [`FEI_RESET_HZ`].
///
/// # Example
///
/// ```
/// use kl25z_hal::clock::{system_core_clock, FEI_RESET_HZ};
///
/// assert_eq!(system_core_clock(), FEI_RESET_HZ);
/// ```
pub fn system_core_clock() -> u32 {
    SYSTEM_CORE_CLOCK.load(Ordering::Relaxed)
}

/// Recompute the cached core clock frequency from the hardware registers.
///
/// The cache is left unchanged when the frequency cannot be derived, see
/// [`mcgoutclk_hz`].
pub fn system_core_clock_update(mcg: &MCG, sim: &SIM) -> Option<u32> {
    let hz: u32 = core_clock_hz(mcg, sim)?;
    SYSTEM_CORE_CLOCK.store(hz, Ordering::Relaxed);
    Some(hz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcg::xtals;

    #[test]
    fn fei_reset_frequency() {
        assert_eq!(FEI_RESET_HZ, 20_971_520);
    }

    #[test]
    fn frdm_48mhz_config() {
        let pll: PllConfig = PllConfig::new(8_000_000, 2, 24).unwrap();
        let cfg: ClockConfig =
            ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div2, OutDiv4::Div2).unwrap();
        let clocks: Clocks = cfg.clocks();
        assert_eq!(clocks.mcgoutclk_hz(), 96_000_000);
        assert_eq!(clocks.core_clock_hz(), 48_000_000);
        assert_eq!(clocks.bus_clock_hz(), 24_000_000);
        assert_eq!(clocks.flash_clock_hz(), 24_000_000);
    }

    #[test]
    fn config_rejects_fast_core() {
        let pll: PllConfig = PllConfig::new(8_000_000, 2, 24).unwrap();
        assert_eq!(
            ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div1, OutDiv4::Div2),
            Err(Error::CoreClk(96_000_000))
        );
    }

    #[test]
    fn config_rejects_fast_bus() {
        let pll: PllConfig = PllConfig::new(8_000_000, 2, 24).unwrap();
        assert_eq!(
            ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div2, OutDiv4::Div1),
            Err(Error::BusClk(48_000_000))
        );
    }

    #[test]
    fn config_revalidates_pll_against_xtal() {
        // valid for a 16 MHz reference (3.2 MHz after the divider), but
        // 8 MHz / 5 = 1.6 MHz falls below the reference window
        let pll: PllConfig = PllConfig::new(16_000_000, 5, 30).unwrap();
        assert_eq!(
            ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div2, OutDiv4::Div2),
            Err(Error::Pll(PllError::RefClk(1_600_000)))
        );
    }

    #[test]
    fn config_accepts_reference_window_bounds() {
        // 8 MHz / 4 = 2 MHz sits exactly on the lower bound, still valid
        let pll: PllConfig = PllConfig::new(16_000_000, 4, 24).unwrap();
        assert!(ClockConfig::new(xtals::FRDM_8MHZ, pll, OutDiv1::Div1, OutDiv4::Div2).is_ok());
    }

    #[test]
    fn fei_48mhz_math() {
        // DRS mid with DMX32: 32.768 kHz * 1464 = 47.972352 MHz
        assert_eq!(SLOW_IRC_HZ * fll_factor(Drs::Mid, true), 47_972_352);
    }
}
