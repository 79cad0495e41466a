//! Owned peripheral singletons for the clock-tree blocks.
//!
//! The HAL entry points borrow these handles mutably so that exclusive
//! access to a peripheral is visible in the signature, the same way a
//! svd2rust peripheral access crate hands out its peripherals.

use crate::regs;
use core::ops::Deref;

static mut DEVICE_PERIPHERALS: bool = false;

macro_rules! periph {
    ($name:ident, $block:path, $base:path, $doc:expr) => {
        #[doc = $doc]
        #[allow(clippy::upper_case_acronyms)]
        pub struct $name {
            _priv: (),
        }

        impl $name {
            /// Pointer to the register block.
            pub const PTR: *const $block = $base;

            /// Create a new handle out of thin air.
            ///
            /// # Safety
            ///
            /// Ensure no other code is using the peripheral; singleton
            /// checks are bypassed with this method.
            #[inline]
            pub const unsafe fn steal() -> Self {
                Self { _priv: () }
            }
        }

        impl Deref for $name {
            type Target = $block;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // safety: the register block lives at this address for the
                // lifetime of the device
                unsafe { &*Self::PTR }
            }
        }
    };
}

periph!(
    MCG,
    regs::mcg::RegisterBlock,
    regs::mcg::MCG_BASE,
    "Multipurpose Clock Generator"
);
periph!(
    OSC0,
    regs::osc::RegisterBlock,
    regs::osc::OSC0_BASE,
    "Crystal oscillator"
);
periph!(
    SIM,
    regs::sim::RegisterBlock,
    regs::sim::SIM_BASE,
    "System Integration Module"
);
periph!(
    WDOG,
    regs::wdog::RegisterBlock,
    regs::wdog::WDOG_BASE,
    "Watchdog timer"
);

/// All clock-tree peripherals.
#[allow(non_snake_case)]
pub struct Peripherals {
    /// Multipurpose Clock Generator
    pub MCG: MCG,
    /// Crystal oscillator
    pub OSC0: OSC0,
    /// System Integration Module
    pub SIM: SIM,
    /// Watchdog timer
    pub WDOG: WDOG,
}

impl Peripherals {
    /// Take the peripherals once.
    ///
    /// Returns `None` on every call after the first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kl25z_hal::pac;
    ///
    /// let dp: pac::Peripherals = pac::Peripherals::take().unwrap();
    /// ```
    #[inline]
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            // safety: read and write of the flag occur with interrupts masked
            unsafe {
                if DEVICE_PERIPHERALS {
                    None
                } else {
                    DEVICE_PERIPHERALS = true;
                    Some(Peripherals::steal())
                }
            }
        })
    }

    /// Create a new peripheral set out of thin air.
    ///
    /// # Safety
    ///
    /// Ensure no other code is using the peripherals; singleton checks are
    /// bypassed with this method.
    #[inline]
    pub const unsafe fn steal() -> Self {
        Peripherals {
            MCG: MCG::steal(),
            OSC0: OSC0::steal(),
            SIM: SIM::steal(),
            WDOG: WDOG::steal(),
        }
    }
}
