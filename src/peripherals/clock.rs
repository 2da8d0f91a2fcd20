use core::sync::atomic::{AtomicU32, Ordering};

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use cortex_m_rt::exception;

use crate::logic::sampler::Clock;

static MILLIS: AtomicU32 = AtomicU32::new(0);

/// Milliseconds since [`SysTickClock::start`], wrapping at `u32::MAX`
pub fn now_ms() -> u32 {
    MILLIS.load(Ordering::Relaxed)
}

/// Millisecond time base ticked by the SysTick exception.
///
/// Holds on to `SYST` so nothing else can reprogram the reload value.
pub struct SysTickClock {
    _syst: SYST,
}

impl SysTickClock {
    pub fn start(mut syst: SYST, core_clock_hz: u32) -> Self {
        syst.disable_counter();
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(core_clock_hz / 1_000 - 1);
        syst.clear_current();
        syst.enable_interrupt();
        syst.enable_counter();
        SysTickClock { _syst: syst }
    }
}

impl Clock for SysTickClock {
    fn millis(&self) -> u32 {
        now_ms()
    }
}

#[exception]
fn SysTick() {
    // `fetch_add` wraps on overflow, which is what the gate expects
    MILLIS.fetch_add(1, Ordering::Relaxed);
}

defmt::timestamp!("{=u32:ms}", now_ms());
