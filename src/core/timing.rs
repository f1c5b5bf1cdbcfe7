/// What the caller should do with a throttled input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThrottleAction {
    /// Run the handler now.
    Run,
    /// Rejected. Sample again after `delay_ms` with a timer carrying
    /// `generation`, so the last input of a burst is never lost.
    Schedule { delay_ms: f64, generation: u64 },
    /// Rejected, and a trailing sample is already scheduled.
    Drop,
}

/// At most one call per `interval_ms`, plus one trailing call at the end of
/// the window when input was rejected inside it.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
    generation: u64,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
            generation: 0,
            trailing: false,
        }
    }

    pub fn on_input(&mut self, now_ms: f64) -> ThrottleAction {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => {
                if self.trailing {
                    return ThrottleAction::Drop;
                }
                self.trailing = true;
                ThrottleAction::Schedule {
                    delay_ms: self.interval_ms - (now_ms - last),
                    generation: self.generation,
                }
            }
            _ => {
                self.last_ms = Some(now_ms);
                self.trailing = false;
                // timers scheduled before this call are now stale
                self.generation = self.generation.wrapping_add(1);
                ThrottleAction::Run
            }
        }
    }

    /// A trailing timer fired. Returns true when the handler should run;
    /// the run starts a new window.
    pub fn on_timer(&mut self, generation: u64, now_ms: f64) -> bool {
        if !self.trailing || generation != self.generation {
            return false;
        }
        self.trailing = false;
        self.last_ms = Some(now_ms);
        true
    }
}

/// What the caller should do with an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceAction {
    /// Run the handler now (leading edge).
    pub run_now: bool,
    /// Schedule a timer carrying this generation after the wait.
    pub schedule: u64,
}

/// Runs after input has been quiet for `wait_ms`, optionally also on the
/// leading edge of a burst.
///
/// Timers are not cancelled; each carries a generation and only the newest
/// one is allowed to fire.
#[derive(Clone, Debug)]
pub struct Debounce {
    wait_ms: f64,
    leading: bool,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(wait_ms: f64, leading: bool) -> Self {
        Self {
            wait_ms,
            leading,
            generation: 0,
            pending: false,
        }
    }

    #[inline]
    pub fn wait_ms(&self) -> f64 {
        self.wait_ms
    }

    pub fn on_input(&mut self) -> DebounceAction {
        let run_now = self.leading && !self.pending;
        self.pending = true;
        self.generation = self.generation.wrapping_add(1);
        DebounceAction {
            run_now,
            schedule: self.generation,
        }
    }

    /// A timer fired. Returns true when the handler should run (trailing edge).
    pub fn on_timer(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.pending {
            return false;
        }
        self.pending = false;
        // leading mode already ran for this burst
        !self.leading
    }
}
