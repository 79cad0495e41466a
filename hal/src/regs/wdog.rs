//! Watchdog timer registers.
//!
//! The Kinetis WDOG block: 16-bit registers, reconfigurable only within the
//! update window opened by the unlock key sequence.

use tock_registers::register_bitfields;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};

pub const WDOG_BASE: *const RegisterBlock = 0x4005_2000 as *const RegisterBlock;

#[repr(C)]
pub struct RegisterBlock {
    /// Status and Control Register High
    pub stctrlh: ReadWrite<u16, STCTRLH::Register>,
    /// Status and Control Register Low
    pub stctrll: ReadWrite<u16>,
    /// Time-out Value Register High
    pub tovalh: ReadWrite<u16>,
    /// Time-out Value Register Low
    pub tovall: ReadWrite<u16>,
    /// Window Register High
    pub winh: ReadWrite<u16>,
    /// Window Register Low
    pub winl: ReadWrite<u16>,
    /// Refresh Register
    pub refresh: WriteOnly<u16, REFRESH::Register>,
    /// Unlock Register
    pub unlock: WriteOnly<u16, UNLOCK::Register>,
    /// Timer Output Register High
    pub tmrouth: ReadOnly<u16>,
    /// Timer Output Register Low
    pub tmroutl: ReadOnly<u16>,
    /// Reset Count Register
    pub rstcnt: ReadWrite<u16>,
    /// Prescaler Register
    pub presc: ReadWrite<u16, PRESC::Register>,
}

register_bitfields![u16,
    pub STCTRLH [
        /// Allow reconfiguration after the initial configuration window
        ALLOWUPDATE OFFSET(4) NUMBITS(1) [],
        /// Watchdog operation in debug mode
        DBGEN OFFSET(5) NUMBITS(1) [],
        /// Watchdog operation in stop mode
        STOPEN OFFSET(6) NUMBITS(1) [],
        /// Watchdog operation in wait mode
        WAITEN OFFSET(7) NUMBITS(1) [],
        /// Windowed mode enable
        WINEN OFFSET(3) NUMBITS(1) [],
        /// Interrupt before reset enable
        IRQRSTEN OFFSET(2) NUMBITS(1) [],
        /// Watchdog clock source
        CLKSRC OFFSET(1) NUMBITS(1) [
            Lpo = 0,
            Alternate = 1
        ],
        /// Watchdog enable
        WDOGEN OFFSET(0) NUMBITS(1) []
    ],
    pub REFRESH [
        KEY OFFSET(0) NUMBITS(16) [
            Key1 = 0xA602,
            Key2 = 0xB480
        ]
    ],
    pub UNLOCK [
        KEY OFFSET(0) NUMBITS(16) [
            Key1 = 0xC520,
            Key2 = 0xD928
        ]
    ],
    pub PRESC [
        /// Watchdog clock prescaler, divide by PRESCVAL + 1
        PRESCVAL OFFSET(8) NUMBITS(3) []
    ]
];

#[cfg(test)]
mod tests {
    use super::RegisterBlock;
    use core::mem::{offset_of, size_of};
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<RegisterBlock>(), 0x18);

    #[test]
    fn offsets() {
        assert_eq!(offset_of!(RegisterBlock, refresh), 0x0C);
        assert_eq!(offset_of!(RegisterBlock, unlock), 0x0E);
        assert_eq!(offset_of!(RegisterBlock, presc), 0x16);
    }
}
