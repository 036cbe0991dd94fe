/// Lifecycle of a count-up animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    /// Not yet scrolled into view
    Unseen,
    /// Seen; `started_at` is set by the first tick after the transition
    Visible { started_at: Option<f64> },
    /// Reached the end value, no more work
    Settled,
}

/// Count-up from 0 to `end`, started the first time the element is seen.
/// Timestamps are milliseconds from any monotonic clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedCounter {
    end: u32,
    duration_ms: f64,
    threshold: f32,
    phase: CounterPhase,
    value: u32,
}

impl AnimatedCounter {
    pub fn new(end: u32, duration_ms: f64, threshold: f32) -> Self {
        Self {
            end,
            duration_ms,
            threshold,
            phase: CounterPhase::Unseen,
            value: 0,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == CounterPhase::Settled
    }

    /// Report the element's current intersection ratio.
    /// Returns true only on the one-time Unseen -> Visible transition.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.phase != CounterPhase::Unseen || ratio < self.threshold {
            return false;
        }
        self.phase = CounterPhase::Visible { started_at: None };
        true
    }

    /// One animation callback. Returns true if the displayed value changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let CounterPhase::Visible { started_at } = self.phase else {
            return false;
        };
        let t0 = match started_at {
            Some(t0) => t0,
            None => {
                self.phase = CounterPhase::Visible { started_at: Some(now_ms) };
                now_ms
            }
        };

        let progress = progress(now_ms - t0, self.duration_ms);
        let next = counter_value(progress, self.end);
        let changed = next != self.value;
        self.value = next;

        if progress >= 1.0 {
            self.phase = CounterPhase::Settled;
        }
        changed
    }
}

/// Fraction of the animation elapsed, clamped to [0, 1]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Displayed integer at `progress`
pub fn counter_value(progress: f64, end: u32) -> u32 {
    (progress.clamp(0.0, 1.0) * end as f64).floor() as u32
}
