//! Watchdog timer
//!
//! The WDOG comes out of reset running from the 1 kHz LPO. Reconfiguration
//! requires the unlock key sequence first, and the update window it opens is
//! only 256 bus cycles long, which is why every entry point here takes a
//! [`CriticalSection`].

use crate::pac::WDOG;
use crate::regs::wdog::{PRESC, REFRESH, STCTRLH, UNLOCK};
use cortex_m::interrupt::CriticalSection;
use tock_registers::interfaces::{ReadWriteable, Readable, Writeable};

fn unlock(wdog: &mut WDOG) {
    wdog.unlock.write(UNLOCK::KEY::Key1);
    wdog.unlock.write(UNLOCK::KEY::Key2);
    // the update window opens one bus cycle after the second key
    cortex_m::asm::nop();
    cortex_m::asm::nop();
}

/// Disable the watchdog.
///
/// Future reconfiguration stays allowed, so the watchdog can be started
/// again later with [`enable`].
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{pac, wdog};
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// cortex_m::interrupt::free(|cs| wdog::disable(&mut dp.WDOG, cs));
/// ```
pub fn disable(wdog: &mut WDOG, _cs: &CriticalSection) {
    unlock(wdog);
    wdog.stctrlh.modify(
        STCTRLH::ALLOWUPDATE::SET
            + STCTRLH::WAITEN::CLEAR
            + STCTRLH::STOPEN::CLEAR
            + STCTRLH::DBGEN::CLEAR
            + STCTRLH::WDOGEN::CLEAR,
    );
}

/// Enable the watchdog with a timeout in milliseconds.
///
/// The watchdog runs from the 1 kHz LPO with no prescaler, one tick per
/// millisecond.
///
/// # Example
///
/// ```no_run
/// use kl25z_hal::{pac, wdog};
///
/// let mut dp: pac::Peripherals = pac::Peripherals::take().unwrap();
/// // bite after one second without a refresh
/// cortex_m::interrupt::free(|cs| wdog::enable(&mut dp.WDOG, 1_000, cs));
/// ```
pub fn enable(wdog: &mut WDOG, timeout_ms: u32, _cs: &CriticalSection) {
    unlock(wdog);
    wdog.tovalh.set((timeout_ms >> 16) as u16);
    wdog.tovall.set(timeout_ms as u16);
    wdog.presc.write(PRESC::PRESCVAL.val(0));
    wdog.stctrlh.modify(
        STCTRLH::ALLOWUPDATE::SET
            + STCTRLH::CLKSRC::Lpo
            + STCTRLH::WINEN::CLEAR
            + STCTRLH::WDOGEN::SET,
    );
}

/// Refresh the watchdog before it bites.
///
/// Both key writes must land within 20 bus cycles of each other.
pub fn refresh(wdog: &mut WDOG, _cs: &CriticalSection) {
    wdog.refresh.write(REFRESH::KEY::Key1);
    wdog.refresh.write(REFRESH::KEY::Key2);
}

/// Returns `true` if the watchdog is running.
pub fn is_enabled(wdog: &WDOG) -> bool {
    wdog.stctrlh.is_set(STCTRLH::WDOGEN)
}

/// Watchdog driver implementing the `embedded-hal` watchdog traits.
pub struct Wdog {
    wdog: WDOG,
}

impl Wdog {
    /// Create a new watchdog driver from the WDOG peripheral.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kl25z_hal::{pac, wdog::Wdog};
    ///
    /// let dp: pac::Peripherals = pac::Peripherals::take().unwrap();
    /// let wdog: Wdog = Wdog::new(dp.WDOG);
    /// ```
    pub const fn new(wdog: WDOG) -> Wdog {
        Wdog { wdog }
    }

    /// Free the WDOG peripheral from the driver.
    pub fn free(self) -> WDOG {
        self.wdog
    }
}

impl embedded_hal::watchdog::Watchdog for Wdog {
    fn feed(&mut self) {
        cortex_m::interrupt::free(|cs| refresh(&mut self.wdog, cs))
    }
}

impl embedded_hal::watchdog::WatchdogDisable for Wdog {
    fn disable(&mut self) {
        cortex_m::interrupt::free(|cs| disable(&mut self.wdog, cs))
    }
}

impl embedded_hal::watchdog::WatchdogEnable for Wdog {
    /// Timeout in milliseconds.
    type Time = u32;

    fn start<T>(&mut self, period: T)
    where
        T: Into<Self::Time>,
    {
        let timeout_ms: u32 = period.into();
        cortex_m::interrupt::free(|cs| enable(&mut self.wdog, timeout_ms, cs))
    }
}
