//! KL25Z HAL.
//!
//! Hardware abstraction layer for the NXP Kinetis KL25Z microcontrollers,
//! covering the boot clock path: watchdog disable, oscillator startup, MCG
//! mode transitions, and the SIM clock dividers.
//!
//! ## Features
//!
//! * `defmt`: implement `defmt::Format` on public types.
//! * `rt`: re-export [`cortex_m_rt`] and enable its device support.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod macros;

pub mod clock;
pub mod mcg;
pub mod osc;
pub mod pac;
pub mod regs;
pub mod sim;
pub mod wdog;

pub use cortex_m;
#[cfg(feature = "rt")]
pub use cortex_m_rt;
pub use embedded_hal;

pub use num_rational::Ratio;
