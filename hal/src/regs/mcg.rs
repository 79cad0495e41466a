//! Multipurpose Clock Generator registers.
//!
//! KL25 Sub-Family Reference Manual chapter 24.

use tock_registers::register_bitfields;
use tock_registers::registers::{ReadOnly, ReadWrite};

pub const MCG_BASE: *const RegisterBlock = 0x4006_4000 as *const RegisterBlock;

#[repr(C)]
pub struct RegisterBlock {
    /// MCG Control 1 Register
    pub c1: ReadWrite<u8, C1::Register>,
    /// MCG Control 2 Register
    pub c2: ReadWrite<u8, C2::Register>,
    /// MCG Control 3 Register (slow IRC trim)
    pub c3: ReadWrite<u8>,
    /// MCG Control 4 Register
    pub c4: ReadWrite<u8, C4::Register>,
    /// MCG Control 5 Register
    pub c5: ReadWrite<u8, C5::Register>,
    /// MCG Control 6 Register
    pub c6: ReadWrite<u8, C6::Register>,
    /// MCG Status Register
    pub s: ReadOnly<u8, S::Register>,
    _reserved0: [u8; 1],
    /// MCG Status and Control Register
    pub sc: ReadWrite<u8, SC::Register>,
    _reserved1: [u8; 1],
    /// MCG Auto Trim Compare Value High Register
    pub atcvh: ReadWrite<u8>,
    /// MCG Auto Trim Compare Value Low Register
    pub atcvl: ReadWrite<u8>,
    /// MCG Control 7 Register
    pub c7: ReadWrite<u8>,
    /// MCG Control 8 Register
    pub c8: ReadWrite<u8>,
    /// MCG Control 9 Register
    pub c9: ReadWrite<u8>,
    /// MCG Control 10 Register
    pub c10: ReadWrite<u8>,
}

register_bitfields![u8,
    pub C1 [
        /// Clock source select for MCGOUTCLK
        CLKS OFFSET(6) NUMBITS(2) [
            FllOrPll = 0,
            Internal = 1,
            External = 2
        ],
        /// FLL external reference divider
        FRDIV OFFSET(3) NUMBITS(3) [],
        /// Internal reference select for the FLL
        IREFS OFFSET(2) NUMBITS(1) [
            External = 0,
            SlowInternal = 1
        ],
        /// Internal reference clock enable (MCGIRCLK)
        IRCLKEN OFFSET(1) NUMBITS(1) [],
        /// Internal reference stop enable
        IREFSTEN OFFSET(0) NUMBITS(1) []
    ],
    pub C2 [
        /// Loss of clock reset enable
        LOCRE0 OFFSET(7) NUMBITS(1) [],
        /// Frequency range select for the crystal oscillator
        RANGE0 OFFSET(4) NUMBITS(2) [
            Low = 0,
            High = 1,
            VeryHigh = 2
        ],
        /// High gain oscillator select
        HGO0 OFFSET(3) NUMBITS(1) [
            LowPower = 0,
            HighGain = 1
        ],
        /// External reference select
        EREFS0 OFFSET(2) NUMBITS(1) [
            Clock = 0,
            Oscillator = 1
        ],
        /// Low power select (disables FLL/PLL in bypass modes)
        LP OFFSET(1) NUMBITS(1) [],
        /// Internal reference clock select
        IRCS OFFSET(0) NUMBITS(1) [
            SlowInternal = 0,
            FastInternal = 1
        ]
    ],
    pub C4 [
        /// DCO maximum frequency with 32.768 kHz reference
        DMX32 OFFSET(7) NUMBITS(1) [],
        /// DCO range select
        DRST_DRS OFFSET(5) NUMBITS(2) [],
        /// Fast internal reference clock trim
        FCTRIM OFFSET(1) NUMBITS(4) [],
        /// Slow internal reference clock fine trim
        SCFTRIM OFFSET(0) NUMBITS(1) []
    ],
    pub C5 [
        /// PLL clock enable (MCGPLLCLK regardless of mode)
        PLLCLKEN0 OFFSET(6) NUMBITS(1) [],
        /// PLL stop enable
        PLLSTEN0 OFFSET(5) NUMBITS(1) [],
        /// PLL external reference divider, divide by PRDIV0 + 1
        PRDIV0 OFFSET(0) NUMBITS(5) []
    ],
    pub C6 [
        /// Loss of lock interrupt enable
        LOLIE0 OFFSET(7) NUMBITS(1) [],
        /// PLL select (FLL or PLL output behind CLKS)
        PLLS OFFSET(6) NUMBITS(1) [
            Fll = 0,
            Pll = 1
        ],
        /// Clock monitor enable
        CME0 OFFSET(5) NUMBITS(1) [],
        /// VCO divider, multiply by VDIV0 + 24
        VDIV0 OFFSET(0) NUMBITS(5) []
    ],
    pub S [
        /// Loss of lock status
        LOLS0 OFFSET(7) NUMBITS(1) [],
        /// PLL lock status
        LOCK0 OFFSET(6) NUMBITS(1) [],
        /// PLL select status
        PLLST OFFSET(5) NUMBITS(1) [
            Fll = 0,
            Pll = 1
        ],
        /// Internal reference status
        IREFST OFFSET(4) NUMBITS(1) [
            External = 0,
            Internal = 1
        ],
        /// Clock mode status for MCGOUTCLK
        CLKST OFFSET(2) NUMBITS(2) [
            Fll = 0,
            Internal = 1,
            External = 2,
            Pll = 3
        ],
        /// OSC initialization complete
        OSCINIT0 OFFSET(1) NUMBITS(1) [],
        /// Internal reference clock status
        IRCST OFFSET(0) NUMBITS(1) [
            Slow = 0,
            Fast = 1
        ]
    ],
    pub SC [
        /// Automatic trim machine enable
        ATME OFFSET(7) NUMBITS(1) [],
        /// Automatic trim machine select
        ATMS OFFSET(6) NUMBITS(1) [],
        /// Automatic trim machine fail flag
        ATMF OFFSET(5) NUMBITS(1) [],
        /// FLL filter preserve enable
        FLTPRSRV OFFSET(4) NUMBITS(1) [],
        /// Fast clock internal reference divider, divide by 2^FCRDIV
        FCRDIV OFFSET(1) NUMBITS(3) [],
        /// OSC loss of clock status
        LOCS0 OFFSET(0) NUMBITS(1) []
    ]
];

#[cfg(test)]
mod tests {
    use super::RegisterBlock;
    use core::mem::size_of;
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<RegisterBlock>(), 0x10);

    #[test]
    fn c10_offset() {
        assert_eq!(core::mem::offset_of!(RegisterBlock, c10), 0x0F);
    }

    #[test]
    fn s_offset() {
        assert_eq!(core::mem::offset_of!(RegisterBlock, s), 0x06);
    }
}
