//! Statistics counter: counts from 0 up to a target once its tile is half visible.

use crate::interaction::easing::{ease_out_cubic, progress};

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CounterState {
    Waiting,
    /// Triggered; the clock starts on the first frame.
    Running { started_at: Option<f64> },
    Done,
}

#[derive(Debug, Clone)]
pub struct StatCounter {
    target: u64,
    value: u64,
    state: CounterState,
}

impl StatCounter {
    pub fn new(target: u64) -> Self {
        StatCounter {
            target,
            value: 0,
            state: CounterState::Waiting,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// True once the counter has been triggered. Never reset.
    pub fn is_counted(&self) -> bool {
        self.state != CounterState::Waiting
    }

    pub fn is_done(&self) -> bool {
        self.state == CounterState::Done
    }

    /// Feeds an intersection observation. Returns true if this call started the animation.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if self.is_counted() || intersection_ratio < COUNTER_VISIBILITY_THRESHOLD {
            return false;
        }
        self.state = CounterState::Running { started_at: None };
        true
    }

    /// Advances to `now_ms` and returns the value to display, or `None` when not running.
    pub fn tick(&mut self, now_ms: f64) -> Option<u64> {
        let CounterState::Running { started_at } = &mut self.state else {
            return None;
        };
        let started_at = *started_at.get_or_insert(now_ms);
        let t = progress(now_ms - started_at, COUNTER_DURATION_MS);

        if t >= 1.0 {
            self.value = self.target;
            self.state = CounterState::Done;
        } else {
            self.value = (self.target as f64 * ease_out_cubic(t)).floor() as u64;
        }
        Some(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_does_not_trigger() {
        let mut counter = StatCounter::new(50);
        assert!(!counter.observe(0.3));
        assert!(!counter.is_counted());
        assert_eq!(counter.tick(0.0), None);
    }

    #[test]
    fn test_ends_exactly_on_target() {
        let mut counter = StatCounter::new(37);
        assert!(counter.observe(0.5));
        let mut now = 1_000.0;
        let mut last = 0;
        while !counter.is_done() {
            let v = counter.tick(now).unwrap();
            assert!(v >= last, "counter went backwards: {last} -> {v}");
            last = v;
            now += 16.0;
        }
        assert_eq!(counter.value(), 37);
        assert!(now - 1_000.0 >= 2_000.0);
    }

    #[test]
    fn test_midpoint_uses_ease_out() {
        let mut counter = StatCounter::new(1000);
        counter.observe(1.0);
        counter.tick(0.0);
        // ease_out_cubic(0.5) = 0.875
        assert_eq!(counter.tick(1000.0), Some(875));
    }

    #[test]
    fn test_never_retriggers() {
        let mut counter = StatCounter::new(10);
        assert!(counter.observe(0.9));
        counter.tick(0.0);
        counter.tick(2500.0);
        assert!(counter.is_done());
        assert!(!counter.observe(1.0));
        assert_eq!(counter.tick(5000.0), None);
        assert_eq!(counter.value(), 10);
    }

    #[test]
    fn test_zero_target() {
        let mut counter = StatCounter::new(0);
        counter.observe(1.0);
        counter.tick(0.0);
        assert_eq!(counter.tick(2000.0), Some(0));
        assert!(counter.is_done());
    }
}
