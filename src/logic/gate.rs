/// Fires at most once per `interval_ms`, measured on a wrapping millisecond
/// counter.
///
/// The comparison is done on the wrapped difference `now - last`, so a
/// counter that rolled over past `u32::MAX` still yields the true elapsed
/// time and no special case is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct IntervalGate {
    last_ms: u32,
    interval_ms: u32,
}

impl IntervalGate {
    /// Starts with the marker at 0, i.e. the first firing happens once the
    /// clock reaches `interval_ms`.
    pub const fn new(interval_ms: u32) -> Self {
        IntervalGate {
            last_ms: 0,
            interval_ms,
        }
    }

    pub fn is_due(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_ms) >= self.interval_ms
    }

    /// Moves the marker to `now_ms` if the gate is due. Returns whether it
    /// fired; a non-due call leaves the marker untouched.
    pub fn try_fire(&mut self, now_ms: u32) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_ms = now_ms;
        true
    }

    pub fn last_ms(&self) -> u32 {
        self.last_ms
    }
}
