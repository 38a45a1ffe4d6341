//! Frame-clock helpers. Time is always passed in explicitly as milliseconds.

pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// Collapses any number of requests between two frames into one computation.
#[derive(Debug, Clone, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues work for the next frame. Returns false when work is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called once per frame. Returns true when queued work should run now.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }
}

/// Fires once after triggers have been quiet for `delay_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Debouncer {
            delay_ms,
            deadline: None,
        }
    }

    /// Restarts the quiet period.
    pub fn trigger(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(RESIZE_DEBOUNCE_MS)
    }
}
