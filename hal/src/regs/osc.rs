//! Crystal oscillator registers.
//!
//! KL25 Sub-Family Reference Manual chapter 25.

use tock_registers::register_bitfields;
use tock_registers::registers::ReadWrite;

pub const OSC0_BASE: *const RegisterBlock = 0x4006_5000 as *const RegisterBlock;

#[repr(C)]
pub struct RegisterBlock {
    /// OSC Control Register
    pub cr: ReadWrite<u8, CR::Register>,
}

register_bitfields![u8,
    pub CR [
        /// External reference enable (OSCERCLK)
        ERCLKEN OFFSET(7) NUMBITS(1) [],
        /// External reference stop enable
        EREFSTEN OFFSET(5) NUMBITS(1) [],
        /// Internal load capacitance select.
        ///
        /// Bits are SC2P, SC4P, SC8P, SC16P from MSB to LSB; see
        /// [`OscCapacitance`](crate::osc::OscCapacitance) for the decoded
        /// picofarad values.
        CAP OFFSET(0) NUMBITS(4) []
    ]
];
