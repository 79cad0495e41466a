//! System Integration Module registers.
//!
//! KL25 Sub-Family Reference Manual chapter 12. The SIM register map is
//! sparse; reserved spans are kept so each register lands on its documented
//! offset.

use tock_registers::register_bitfields;
use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};

pub const SIM_BASE: *const RegisterBlock = 0x4004_7000 as *const RegisterBlock;

#[repr(C)]
pub struct RegisterBlock {
    /// System Options Register 1
    pub sopt1: ReadWrite<u32, SOPT1::Register>,
    /// SOPT1 Configuration Register
    pub sopt1cfg: ReadWrite<u32>,
    _reserved0: [u8; 4092],
    /// System Options Register 2
    pub sopt2: ReadWrite<u32, SOPT2::Register>,
    _reserved1: [u8; 4],
    /// System Options Register 4
    pub sopt4: ReadWrite<u32>,
    /// System Options Register 5
    pub sopt5: ReadWrite<u32>,
    _reserved2: [u8; 4],
    /// System Options Register 7
    pub sopt7: ReadWrite<u32>,
    _reserved3: [u8; 8],
    /// System Device Identification Register
    pub sdid: ReadOnly<u32>,
    _reserved4: [u8; 12],
    /// System Clock Gating Control Register 4
    pub scgc4: ReadWrite<u32, SCGC4::Register>,
    /// System Clock Gating Control Register 5
    pub scgc5: ReadWrite<u32, SCGC5::Register>,
    /// System Clock Gating Control Register 6
    pub scgc6: ReadWrite<u32, SCGC6::Register>,
    /// System Clock Gating Control Register 7
    pub scgc7: ReadWrite<u32, SCGC7::Register>,
    /// System Clock Divider Register 1
    pub clkdiv1: ReadWrite<u32, CLKDIV1::Register>,
    _reserved5: [u8; 4],
    /// Flash Configuration Register 1
    pub fcfg1: ReadOnly<u32>,
    /// Flash Configuration Register 2
    pub fcfg2: ReadOnly<u32>,
    _reserved6: [u8; 4],
    /// Unique Identification Register Mid-High
    pub uidmh: ReadOnly<u32>,
    /// Unique Identification Register Mid-Low
    pub uidml: ReadOnly<u32>,
    /// Unique Identification Register Low
    pub uidl: ReadOnly<u32>,
    _reserved7: [u8; 156],
    /// COP Control Register, write-once after reset
    pub copc: ReadWrite<u32, COPC::Register>,
    /// Service COP Register
    pub srvcop: WriteOnly<u32, SRVCOP::Register>,
}

register_bitfields![u32,
    pub SOPT1 [
        /// USB voltage regulator enable
        USBREGEN OFFSET(31) NUMBITS(1) [],
        /// USB voltage regulator standby enable during stop modes
        USBSSTBY OFFSET(30) NUMBITS(1) [],
        /// USB voltage regulator standby enable during VLPR/VLPW
        USBVSTBY OFFSET(29) NUMBITS(1) [],
        /// 32 kHz oscillator clock select (ERCLK32K)
        OSC32KSEL OFFSET(18) NUMBITS(2) [
            System = 0,
            Rtc = 2,
            Lpo = 3
        ]
    ],
    pub SOPT2 [
        /// UART0 clock source select
        UART0SRC OFFSET(26) NUMBITS(2) [
            Disabled = 0,
            PllFll = 1,
            OscErClk = 2,
            McgIrClk = 3
        ],
        /// TPM clock source select
        TPMSRC OFFSET(24) NUMBITS(2) [
            Disabled = 0,
            PllFll = 1,
            OscErClk = 2,
            McgIrClk = 3
        ],
        /// USB clock source select
        USBSRC OFFSET(18) NUMBITS(1) [],
        /// PLL/FLL clock select for peripherals
        PLLFLLSEL OFFSET(16) NUMBITS(1) [
            Fll = 0,
            PllDiv2 = 1
        ],
        /// CLKOUT pin clock select
        CLKOUTSEL OFFSET(5) NUMBITS(3) [],
        /// RTC clock out select
        RTCCLKOUTSEL OFFSET(4) NUMBITS(1) []
    ],
    pub SCGC4 [
        SPI1 OFFSET(23) NUMBITS(1) [],
        SPI0 OFFSET(22) NUMBITS(1) [],
        CMP OFFSET(19) NUMBITS(1) [],
        USBOTG OFFSET(18) NUMBITS(1) [],
        UART2 OFFSET(12) NUMBITS(1) [],
        UART1 OFFSET(11) NUMBITS(1) [],
        UART0 OFFSET(10) NUMBITS(1) [],
        I2C1 OFFSET(7) NUMBITS(1) [],
        I2C0 OFFSET(6) NUMBITS(1) []
    ],
    pub SCGC5 [
        PORTE OFFSET(13) NUMBITS(1) [],
        PORTD OFFSET(12) NUMBITS(1) [],
        PORTC OFFSET(11) NUMBITS(1) [],
        PORTB OFFSET(10) NUMBITS(1) [],
        PORTA OFFSET(9) NUMBITS(1) [],
        TSI OFFSET(5) NUMBITS(1) [],
        LPTMR OFFSET(0) NUMBITS(1) []
    ],
    pub SCGC6 [
        DAC0 OFFSET(31) NUMBITS(1) [],
        RTC OFFSET(29) NUMBITS(1) [],
        ADC0 OFFSET(27) NUMBITS(1) [],
        TPM2 OFFSET(26) NUMBITS(1) [],
        TPM1 OFFSET(25) NUMBITS(1) [],
        TPM0 OFFSET(24) NUMBITS(1) [],
        PIT OFFSET(23) NUMBITS(1) [],
        DMAMUX OFFSET(1) NUMBITS(1) [],
        FTF OFFSET(0) NUMBITS(1) []
    ],
    pub SCGC7 [
        DMA OFFSET(8) NUMBITS(1) []
    ],
    pub CLKDIV1 [
        /// Core/system clock divider, divide by OUTDIV1 + 1
        OUTDIV1 OFFSET(28) NUMBITS(4) [],
        /// Bus/flash clock divider from the core clock, divide by OUTDIV4 + 1
        OUTDIV4 OFFSET(16) NUMBITS(3) []
    ],
    pub COPC [
        /// COP watchdog timeout
        COPT OFFSET(2) NUMBITS(2) [
            Disabled = 0,
            Cycles32 = 1,
            Cycles256 = 2,
            Cycles1024 = 3
        ],
        /// COP clock select
        COPCLKS OFFSET(1) NUMBITS(1) [
            Lpo = 0,
            Bus = 1
        ],
        /// COP windowed mode
        COPW OFFSET(0) NUMBITS(1) []
    ],
    pub SRVCOP [
        /// Write 0x55 then 0xAA to service the COP
        SRV OFFSET(0) NUMBITS(8) []
    ]
];

#[cfg(test)]
mod tests {
    use super::RegisterBlock;
    use core::mem::{offset_of, size_of};
    use static_assertions::const_assert_eq;

    const_assert_eq!(size_of::<RegisterBlock>(), 0x1108);

    #[test]
    fn offsets() {
        assert_eq!(offset_of!(RegisterBlock, sopt2), 0x1004);
        assert_eq!(offset_of!(RegisterBlock, sopt4), 0x100C);
        assert_eq!(offset_of!(RegisterBlock, sopt7), 0x1018);
        assert_eq!(offset_of!(RegisterBlock, sdid), 0x1024);
        assert_eq!(offset_of!(RegisterBlock, scgc4), 0x1034);
        assert_eq!(offset_of!(RegisterBlock, clkdiv1), 0x1044);
        assert_eq!(offset_of!(RegisterBlock, uidl), 0x1060);
        assert_eq!(offset_of!(RegisterBlock, copc), 0x1100);
        assert_eq!(offset_of!(RegisterBlock, srvcop), 0x1104);
    }
}
