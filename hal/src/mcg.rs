//! Multipurpose Clock Generator
//!
//! The MCG selects and multiplies the clock behind MCGOUTCLK. It comes out
//! of reset in FEI (FLL engaged internal) mode; moving to the PLL is a fixed
//! walk through the bypass modes, one hop per call:
//!
//! FEI → FBE → PBE → PEE
//!
//! Each hop is a typestate transition that busy-waits on the status register
//! before returning, so holding an [`Fbe`] (for example) means the hardware
//! really is in FBE.

use crate::osc::{self, OscCapacitance};
use crate::pac::{MCG, OSC0};
use crate::regs::mcg::{C1, C2, C4, C5, C6, S};
use core::convert::TryFrom;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

/// Frequency range of the external reference.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OscRange {
    /// Low range, 32-40 kHz.
    Low = 0b00,
    /// High range, 3-8 MHz.
    High = 0b01,
    /// Very high range, 8-32 MHz.
    VeryHigh = 0b10,
}

impl OscRange {
    /// Range for an external reference frequency in hertz.
    ///
    /// Returns `None` for frequencies the oscillator cannot run at.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::mcg::OscRange;
    ///
    /// assert_eq!(OscRange::from_hz(32_768), Some(OscRange::Low));
    /// assert_eq!(OscRange::from_hz(8_000_000), Some(OscRange::High));
    /// assert_eq!(OscRange::from_hz(16_000_000), Some(OscRange::VeryHigh));
    /// assert_eq!(OscRange::from_hz(1_000_000), None);
    /// ```
    pub const fn from_hz(hz: u32) -> Option<OscRange> {
        match hz {
            32_000..=40_000 => Some(OscRange::Low),
            3_000_000..=8_000_000 => Some(OscRange::High),
            8_000_001..=32_000_000 => Some(OscRange::VeryHigh),
            _ => None,
        }
    }
}

impl From<OscRange> for u8 {
    fn from(range: OscRange) -> Self {
        range as u8
    }
}

impl TryFrom<u8> for OscRange {
    type Error = u8;
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0b00 => Ok(OscRange::Low),
            0b01 => Ok(OscRange::High),
            // 0b11 is documented as very high as well
            0b10 | 0b11 => Ok(OscRange::VeryHigh),
            _ => Err(raw),
        }
    }
}

/// FLL external reference divider.
///
/// The divisor depends on [`OscRange`]: the low range uses the small
/// divisors, the high and very high ranges the large ones.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(non_camel_case_types)]
pub enum Frdiv {
    /// Divide by 1 (low range) or 32 (high ranges).
    Low1_High32 = 0b000,
    /// Divide by 2 (low range) or 64 (high ranges).
    Low2_High64 = 0b001,
    /// Divide by 4 (low range) or 128 (high ranges).
    Low4_High128 = 0b010,
    /// Divide by 8 (low range) or 256 (high ranges).
    Low8_High256 = 0b011,
    /// Divide by 16 (low range) or 512 (high ranges).
    Low16_High512 = 0b100,
    /// Divide by 32 (low range) or 1024 (high ranges).
    Low32_High1024 = 0b101,
    /// Divide by 64 (low range) or 1280 (high ranges).
    Low64_High1280 = 0b110,
    /// Divide by 128 (low range) or 1536 (high ranges).
    Low128_High1536 = 0b111,
}

/// Center of the FLL reference window (31.25-39.0625 kHz).
const FLL_REF_HZ: u32 = 32_768;

impl Frdiv {
    const ALL: [Frdiv; 8] = [
        Frdiv::Low1_High32,
        Frdiv::Low2_High64,
        Frdiv::Low4_High128,
        Frdiv::Low8_High256,
        Frdiv::Low16_High512,
        Frdiv::Low32_High1024,
        Frdiv::Low64_High1280,
        Frdiv::Low128_High1536,
    ];

    /// Divisor applied to the external reference.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::mcg::{Frdiv, OscRange};
    ///
    /// assert_eq!(Frdiv::Low1_High32.divisor(OscRange::Low), 1);
    /// assert_eq!(Frdiv::Low1_High32.divisor(OscRange::High), 32);
    /// assert_eq!(Frdiv::Low8_High256.divisor(OscRange::VeryHigh), 256);
    /// assert_eq!(Frdiv::Low128_High1536.divisor(OscRange::High), 1536);
    /// ```
    pub const fn divisor(&self, range: OscRange) -> u32 {
        match range {
            OscRange::Low => 1 << (*self as u8),
            OscRange::High | OscRange::VeryHigh => match self {
                Frdiv::Low1_High32 => 32,
                Frdiv::Low2_High64 => 64,
                Frdiv::Low4_High128 => 128,
                Frdiv::Low8_High256 => 256,
                Frdiv::Low16_High512 => 512,
                Frdiv::Low32_High1024 => 1024,
                Frdiv::Low64_High1280 => 1280,
                Frdiv::Low128_High1536 => 1536,
            },
        }
    }

    /// Pick the divider that lands the FLL reference closest to 32.768 kHz.
    pub const fn for_reference(extal_hz: u32, range: OscRange) -> Frdiv {
        let mut best: Frdiv = Frdiv::ALL[0];
        let mut best_err: u32 = u32::MAX;
        let mut idx: usize = 0;
        while idx < Frdiv::ALL.len() {
            let frdiv: Frdiv = Frdiv::ALL[idx];
            let err: u32 = (extal_hz / frdiv.divisor(range)).abs_diff(FLL_REF_HZ);
            if err < best_err {
                best = frdiv;
                best_err = err;
            }
            idx += 1;
        }
        best
    }
}

impl From<Frdiv> for u8 {
    fn from(frdiv: Frdiv) -> Self {
        frdiv as u8
    }
}

impl TryFrom<u8> for Frdiv {
    type Error = u8;
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0b000 => Ok(Frdiv::Low1_High32),
            0b001 => Ok(Frdiv::Low2_High64),
            0b010 => Ok(Frdiv::Low4_High128),
            0b011 => Ok(Frdiv::Low8_High256),
            0b100 => Ok(Frdiv::Low16_High512),
            0b101 => Ok(Frdiv::Low32_High1024),
            0b110 => Ok(Frdiv::Low64_High1280),
            0b111 => Ok(Frdiv::Low128_High1536),
            _ => Err(raw),
        }
    }
}

/// DCO range select for the FLL.
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drs {
    /// Low range, FLL factor 640 (732 with DMX32).
    Low = 0b00,
    /// Mid range, FLL factor 1280 (1464 with DMX32).
    Mid = 0b01,
    /// Mid-high range, FLL factor 1920 (2197 with DMX32).
    MidHigh = 0b10,
    /// High range, FLL factor 2560 (2929 with DMX32).
    High = 0b11,
}

impl From<Drs> for u8 {
    fn from(drs: Drs) -> Self {
        drs as u8
    }
}

impl TryFrom<u8> for Drs {
    type Error = u8;
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0b00 => Ok(Drs::Low),
            0b01 => Ok(Drs::Mid),
            0b10 => Ok(Drs::MidHigh),
            0b11 => Ok(Drs::High),
            _ => Err(raw),
        }
    }
}

/// FLL multiplication factor for a DCO range.
///
/// DMX32 fine-tunes the DCO for a reference of exactly 32.768 kHz.
///
/// # Example
///
/// ```
/// use kl25z_hal::mcg::{fll_factor, Drs};
///
/// assert_eq!(fll_factor(Drs::Low, false), 640);
/// assert_eq!(fll_factor(Drs::Mid, true), 1464);
/// assert_eq!(fll_factor(Drs::High, true), 2929);
/// ```
pub const fn fll_factor(drs: Drs, dmx32: bool) -> u32 {
    match (drs, dmx32) {
        (Drs::Low, false) => 640,
        (Drs::Low, true) => 732,
        (Drs::Mid, false) => 1280,
        (Drs::Mid, true) => 1464,
        (Drs::MidHigh, false) => 1920,
        (Drs::MidHigh, true) => 2197,
        (Drs::High, false) => 2560,
        (Drs::High, true) => 2929,
    }
}

/// External reference description errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum XtalError {
    /// Frequency in hertz outside the supported oscillator ranges.
    Frequency(u32),
}

/// External reference clock description.
///
/// Covers both a crystal driven by the on-chip oscillator and an external
/// clock signal fed into EXTAL.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Xtal {
    hz: u32,
    range: OscRange,
    frdiv: Frdiv,
    load: OscCapacitance,
    crystal: bool,
}

impl Xtal {
    /// Describe a crystal driven by the on-chip oscillator.
    ///
    /// # Example
    ///
    /// ```
    /// use kl25z_hal::{mcg::Xtal, osc::OscCapacitance};
    ///
    /// let xtal: Xtal = Xtal::new(8_000_000, OscCapacitance::Load_0pF)?;
    /// assert_eq!(xtal.hz(), 8_000_000);
    /// # Ok::<(), kl25z_hal::mcg::XtalError>(())
    /// ```
    pub const fn new(hz: u32, load: OscCapacitance) -> Result<Xtal, XtalError> {
        let range: OscRange = match OscRange::from_hz(hz) {
            Some(range) => range,
            None => return Err(XtalError::Frequency(hz)),
        };
        Ok(Xtal {
            hz,
            range,
            frdiv: Frdiv::for_reference(hz, range),
            load,
            crystal: true,
        })
    }

    /// Describe an external clock signal on EXTAL, bypassing the oscillator.
    pub const fn external(hz: u32) -> Result<Xtal, XtalError> {
        let range: OscRange = match OscRange::from_hz(hz) {
            Some(range) => range,
            None => return Err(XtalError::Frequency(hz)),
        };
        Ok(Xtal {
            hz,
            range,
            frdiv: Frdiv::for_reference(hz, range),
            load: OscCapacitance::Load_0pF,
            crystal: false,
        })
    }

    /// Reference frequency in hertz.
    pub const fn hz(&self) -> u32 {
        self.hz
    }

    /// Oscillator frequency range.
    pub const fn range(&self) -> OscRange {
        self.range
    }

    /// FLL reference divider for this crystal.
    pub const fn frdiv(&self) -> Frdiv {
        self.frdiv
    }

    /// Internal load capacitance.
    pub const fn load(&self) -> OscCapacitance {
        self.load
    }

    /// Returns `true` for a crystal, `false` for an external clock signal.
    pub const fn is_crystal(&self) -> bool {
        self.crystal
    }
}

/// Common external reference presets.
pub mod xtals {
    use super::{Xtal, XtalError};
    use crate::osc::OscCapacitance;

    /// 8 MHz crystal on the FRDM-KL25Z.
    ///
    /// The board carries its own feedback network, no internal load is
    /// added.
    pub const FRDM_8MHZ: Xtal = match Xtal::new(8_000_000, OscCapacitance::Load_0pF) {
        Ok(xtal) => xtal,
        Err(XtalError::Frequency(_)) => panic!("8 MHz is in the high range"),
    };
}

/// PLL configuration errors.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PllError {
    /// Reference divider outside 1-25.
    Prdiv(u8),
    /// VCO multiplier outside 24-55.
    Vdiv(u8),
    /// Divided reference in hertz outside 2-4 MHz.
    RefClk(u32),
    /// VCO output in hertz outside 48-100 MHz.
    Vco(u32),
}

/// Validated PLL divider and multiplier pair.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PllConfig {
    prdiv: u8,
    vdiv: u8,
}

impl PllConfig {
    /// Minimum external reference divider.
    pub const PRDIV_MIN: u8 = 1;
    /// Maximum external reference divider.
    pub const PRDIV_MAX: u8 = 25;
    /// Minimum VCO multiplier.
    pub const VDIV_MIN: u8 = 24;
    /// Maximum VCO multiplier.
    pub const VDIV_MAX: u8 = 55;
    /// Minimum divided reference frequency in hertz.
    pub const REF_MIN_HZ: u32 = 2_000_000;
    /// Maximum divided reference frequency in hertz.
    pub const REF_MAX_HZ: u32 = 4_000_000;
    /// Minimum VCO output frequency in hertz.
    pub const VCO_MIN_HZ: u32 = 48_000_000;
    /// Maximum VCO output frequency in hertz.
    pub const VCO_MAX_HZ: u32 = 100_000_000;

    /// Validate a PLL configuration for a given external reference.
    ///
    /// `prdiv` and `vdiv` are the real divider and multiplier values, not
    /// the register encodings.
    ///
    /// # Example
    ///
    /// The FRDM-KL25Z 96 MHz configuration: 8 MHz / 2 * 24.
    ///
    /// ```
    /// use kl25z_hal::mcg::PllConfig;
    ///
    /// let pll: PllConfig = PllConfig::new(8_000_000, 2, 24)?;
    /// assert_eq!(pll.output_hz(8_000_000), 96_000_000);
    /// # Ok::<(), kl25z_hal::mcg::PllError>(())
    /// ```
    pub const fn new(extal_hz: u32, prdiv: u8, vdiv: u8) -> Result<PllConfig, PllError> {
        if prdiv < Self::PRDIV_MIN || prdiv > Self::PRDIV_MAX {
            return Err(PllError::Prdiv(prdiv));
        }
        if vdiv < Self::VDIV_MIN || vdiv > Self::VDIV_MAX {
            return Err(PllError::Vdiv(vdiv));
        }
        let ref_hz: u32 = extal_hz / prdiv as u32;
        if ref_hz < Self::REF_MIN_HZ || ref_hz > Self::REF_MAX_HZ {
            return Err(PllError::RefClk(ref_hz));
        }
        let vco_hz: u32 = ref_hz * vdiv as u32;
        if vco_hz < Self::VCO_MIN_HZ || vco_hz > Self::VCO_MAX_HZ {
            return Err(PllError::Vco(vco_hz));
        }
        Ok(PllConfig { prdiv, vdiv })
    }

    /// External reference divider.
    pub const fn prdiv(&self) -> u8 {
        self.prdiv
    }

    /// VCO multiplier.
    pub const fn vdiv(&self) -> u8 {
        self.vdiv
    }

    /// PLL output frequency in hertz for a given external reference.
    pub const fn output_hz(&self, extal_hz: u32) -> u32 {
        extal_hz / self.prdiv as u32 * self.vdiv as u32
    }
}

typestate!(Fei, "FLL engaged internal");
typestate!(Fbe, "FLL bypassed external");
typestate!(Pbe, "PLL bypassed external");
typestate!(Pee, "PLL engaged external");

/// MCG operating modes.
///
/// Modes on the FEI → PEE walk carry their typestate token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// FLL engaged internal, the reset mode.
    Fei(Fei),
    /// FLL engaged external.
    Fee,
    /// FLL bypassed internal.
    Fbi,
    /// FLL bypassed external.
    Fbe(Fbe),
    /// PLL bypassed external.
    Pbe(Pbe),
    /// PLL engaged external.
    Pee(Pee),
    /// Bypassed low power internal.
    Blpi,
    /// Bypassed low power external.
    Blpe,
}

const fn decode(clks: u8, irefs: bool, plls: bool, lp: bool) -> Option<State> {
    match (clks, irefs, plls, lp) {
        (0b00, true, false, _) => Some(State::Fei(Fei::new())),
        (0b00, false, false, _) => Some(State::Fee),
        (0b01, true, false, false) => Some(State::Fbi),
        (0b10, false, false, false) => Some(State::Fbe(Fbe::new())),
        (0b00, false, true, _) => Some(State::Pee(Pee::new())),
        (0b10, false, true, false) => Some(State::Pbe(Pbe::new())),
        (0b01, true, false, true) => Some(State::Blpi),
        (0b10, false, _, true) => Some(State::Blpe),
        _ => None,
    }
}

/// Current MCG operating mode.
///
/// Returns `None` when the control registers hold a combination outside the
/// documented mode graph (transient during a transition).
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{mcg, pac};
///
/// let dp: pac::Peripherals = pac::Peripherals::take().unwrap();
///
/// // out of reset the MCG is in FEI
/// assert!(matches!(mcg::state(&dp.MCG), Some(mcg::State::Fei(_))));
/// ```
pub fn state(mcg: &MCG) -> Option<State> {
    decode(
        mcg.c1.read(C1::CLKS),
        mcg.c1.is_set(C1::IREFS),
        mcg.c6.is_set(C6::PLLS),
        mcg.c2.is_set(C2::LP),
    )
}

impl Fei {
    /// Select the FLL multiplication factor while staying in FEI.
    ///
    /// `dmx32` may only be set when the reference is 32.768 kHz; the slow
    /// internal reference used in FEI qualifies.
    pub fn set_fll_factor(&self, mcg: &mut MCG, drs: Drs, dmx32: bool) {
        mcg.c4
            .modify(C4::DMX32.val(dmx32 as u8) + C4::DRST_DRS.val(u8::from(drs)));
    }

    /// Switch the MCG to the external reference, moving FEI → FBE.
    ///
    /// Enables the oscillator, selects the reference range and FLL divider,
    /// then waits for the oscillator to start (crystals only) and for the
    /// reference and clock switches to take effect.
    pub fn use_external(self, mcg: &mut MCG, osc: &mut OSC0, xtal: &Xtal) -> Fbe {
        if xtal.is_crystal() {
            osc::enable(osc, xtal);
            mcg.c2.modify(
                C2::RANGE0.val(u8::from(xtal.range()))
                    + C2::HGO0::LowPower
                    + C2::EREFS0::Oscillator,
            );
        } else {
            mcg.c2
                .modify(C2::RANGE0.val(u8::from(xtal.range())) + C2::EREFS0::Clock);
        }

        mcg.c1.write(
            C1::CLKS::External + C1::FRDIV.val(u8::from(xtal.frdiv())) + C1::IREFS::External,
        );

        // a clock signal on EXTAL has no startup time
        if xtal.is_crystal() {
            while !mcg.s.is_set(S::OSCINIT0) {}
        }
        while !mcg.s.matches_all(S::IREFST::External + S::CLKST::External) {}

        crate::clock::set_extal_hz(xtal.hz());
        Fbe::new()
    }
}

impl Fbe {
    /// Configure and lock the PLL, moving FBE → PBE.
    ///
    /// MCGOUTCLK is still the external reference when this returns; the PLL
    /// is locked but bypassed.
    pub fn enable_pll(self, mcg: &mut MCG, pll: &PllConfig) -> Pbe {
        mcg.c5.modify(C5::PRDIV0.val(pll.prdiv() - 1));
        mcg.c6
            .modify(C6::VDIV0.val(pll.vdiv() - PllConfig::VDIV_MIN) + C6::PLLS::Pll);

        while !mcg.s.matches_all(S::PLLST::Pll + S::LOCK0::SET) {}

        Pbe::new()
    }
}

impl Pbe {
    /// Switch MCGOUTCLK to the PLL output, moving PBE → PEE.
    pub fn use_pll(self, mcg: &mut MCG) -> Pee {
        mcg.c1.modify(C1::CLKS::FllOrPll);

        while !mcg.s.matches_all(S::CLKST::Pll) {}

        Pee::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_all_modes() {
        assert_eq!(decode(0b00, true, false, false), Some(State::Fei(Fei::new())));
        assert_eq!(decode(0b00, false, false, false), Some(State::Fee));
        assert_eq!(decode(0b01, true, false, false), Some(State::Fbi));
        assert_eq!(decode(0b10, false, false, false), Some(State::Fbe(Fbe::new())));
        assert_eq!(decode(0b10, false, true, false), Some(State::Pbe(Pbe::new())));
        assert_eq!(decode(0b00, false, true, false), Some(State::Pee(Pee::new())));
        assert_eq!(decode(0b01, true, false, true), Some(State::Blpi));
        assert_eq!(decode(0b10, false, false, true), Some(State::Blpe));
        assert_eq!(decode(0b10, false, true, true), Some(State::Blpe));
    }

    #[test]
    fn decode_transient() {
        // internal clock with external reference is not a documented mode
        assert_eq!(decode(0b01, false, false, false), None);
        assert_eq!(decode(0b11, false, false, false), None);
    }

    #[test]
    fn fll_factors() {
        assert_eq!(fll_factor(Drs::Low, false), 640);
        assert_eq!(fll_factor(Drs::Low, true), 732);
        assert_eq!(fll_factor(Drs::Mid, false), 1280);
        assert_eq!(fll_factor(Drs::Mid, true), 1464);
        assert_eq!(fll_factor(Drs::MidHigh, false), 1920);
        assert_eq!(fll_factor(Drs::MidHigh, true), 2197);
        assert_eq!(fll_factor(Drs::High, false), 2560);
        assert_eq!(fll_factor(Drs::High, true), 2929);
    }

    #[test]
    fn frdiv_for_common_crystals() {
        // 8 MHz / 256 = 31.25 kHz
        assert_eq!(
            Frdiv::for_reference(8_000_000, OscRange::High),
            Frdiv::Low8_High256
        );
        // 16 MHz / 512 = 31.25 kHz
        assert_eq!(
            Frdiv::for_reference(16_000_000, OscRange::VeryHigh),
            Frdiv::Low16_High512
        );
        // 4 MHz / 128 = 31.25 kHz
        assert_eq!(
            Frdiv::for_reference(4_000_000, OscRange::High),
            Frdiv::Low4_High128
        );
        // 32.768 kHz / 1 is already the reference
        assert_eq!(
            Frdiv::for_reference(32_768, OscRange::Low),
            Frdiv::Low1_High32
        );
    }

    #[test]
    fn xtal_rejects_unsupported_frequencies() {
        assert_eq!(
            Xtal::new(1_000_000, OscCapacitance::Load_0pF),
            Err(XtalError::Frequency(1_000_000))
        );
        assert_eq!(
            Xtal::external(50_000_000),
            Err(XtalError::Frequency(50_000_000))
        );
    }

    #[test]
    fn xtal_frdm_preset() {
        let xtal: Xtal = xtals::FRDM_8MHZ;
        assert_eq!(xtal.hz(), 8_000_000);
        assert_eq!(xtal.range(), OscRange::High);
        assert_eq!(xtal.frdiv(), Frdiv::Low8_High256);
        assert!(xtal.is_crystal());
    }

    #[test]
    fn pll_config_validation() {
        assert!(PllConfig::new(8_000_000, 2, 24).is_ok());
        assert_eq!(PllConfig::new(8_000_000, 0, 24), Err(PllError::Prdiv(0)));
        assert_eq!(PllConfig::new(8_000_000, 26, 24), Err(PllError::Prdiv(26)));
        assert_eq!(PllConfig::new(8_000_000, 2, 23), Err(PllError::Vdiv(23)));
        assert_eq!(PllConfig::new(8_000_000, 2, 56), Err(PllError::Vdiv(56)));
        // 8 MHz / 8 = 1 MHz, below the reference window
        assert_eq!(
            PllConfig::new(8_000_000, 8, 24),
            Err(PllError::RefClk(1_000_000))
        );
        // 8 MHz / 2 * 55 = 220 MHz, above the VCO window
        assert_eq!(
            PllConfig::new(8_000_000, 2, 55),
            Err(PllError::Vco(220_000_000))
        );
    }

    #[test]
    fn pll_output() {
        let pll: PllConfig = PllConfig::new(8_000_000, 2, 24).unwrap();
        assert_eq!(pll.output_hz(8_000_000), 96_000_000);

        let pll: PllConfig = PllConfig::new(8_000_000, 4, 24).unwrap();
        assert_eq!(pll.output_hz(8_000_000), 48_000_000);
    }
}
