//! Hero subtitle typewriter, looping forever.
//!
//! Phases: initial delay → typing one character per step → pause with cursor still visible →
//! cursor hidden until the loop delay elapses → restart from empty text.

pub const START_DELAY_MS: f64 = 1200.0;
pub const CHAR_INTERVAL_MS: f64 = 60.0;
pub const CURSOR_HIDE_DELAY_MS: f64 = 1000.0;
pub const LOOP_DELAY_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Waiting { until: f64 },
    Typing { next_at: f64 },
    Holding { typed_at: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub cursor_visible: bool,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    cursor_visible: bool,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Typewriter {
            chars: text.chars().collect(),
            shown: 0,
            cursor_visible: false,
            phase: Phase::Idle,
        }
    }

    pub fn start(&mut self, now_ms: f64) {
        self.shown = 0;
        self.phase = Phase::Waiting {
            until: now_ms + START_DELAY_MS,
        };
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn frame(&self) -> TypewriterFrame {
        TypewriterFrame {
            text: self.chars[..self.shown].iter().collect(),
            cursor_visible: self.cursor_visible,
        }
    }

    /// Advances to `now_ms`, catching up on every step that fell due since the last tick.
    pub fn tick(&mut self, now_ms: f64) -> TypewriterFrame {
        loop {
            match self.phase {
                Phase::Idle => break,
                Phase::Waiting { until } => {
                    if now_ms < until {
                        break;
                    }
                    self.shown = 0;
                    self.cursor_visible = true;
                    self.phase = Phase::Typing { next_at: until };
                }
                Phase::Typing { next_at } => {
                    if now_ms < next_at {
                        break;
                    }
                    if self.shown < self.chars.len() {
                        self.shown += 1;
                        self.phase = Phase::Typing {
                            next_at: next_at + CHAR_INTERVAL_MS,
                        };
                    } else {
                        self.phase = Phase::Holding { typed_at: next_at };
                    }
                }
                Phase::Holding { typed_at } => {
                    if self.cursor_visible && now_ms >= typed_at + CURSOR_HIDE_DELAY_MS {
                        self.cursor_visible = false;
                    }
                    if now_ms < typed_at + LOOP_DELAY_MS {
                        break;
                    }
                    self.phase = Phase::Waiting {
                        until: typed_at + LOOP_DELAY_MS,
                    };
                }
            }
        }
        self.frame()
    }
}
