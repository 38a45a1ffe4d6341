//! Smooth-Scroll Navigator — eased, cancellable scroll animation.
//!
//! One animation at most: a new request replaces the running one, and any user scroll intent
//! (wheel, touch drag, key press) cancels it. Each animation is identified by a `ScrollToken`
//! so callers can tell whether a frame still belongs to the request they issued.

use serde::{Deserialize, Serialize};

use crate::interaction::easing::{ease_in_out_cubic, progress};

pub const SCROLL_DURATION_MS: f64 = 800.0;
pub const MIN_ANIMATED_DISTANCE_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub navbar_height: f64,
    pub duration_ms: f64,
    pub min_distance: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            navbar_height: crate::interaction::visibility::DEFAULT_NAVBAR_HEIGHT,
            duration_ms: SCROLL_DURATION_MS,
            min_distance: MIN_ANIMATED_DISTANCE_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScrollToken(u64);

/// User input that interrupts a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollIntent {
    Wheel,
    TouchMove,
    KeyDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollStart {
    /// Distance below the threshold: jump straight to `position`.
    Immediate { position: f64 },
    Animated { token: ScrollToken, target: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub token: ScrollToken,
    pub position: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    token: ScrollToken,
    start_position: f64,
    target: f64,
    /// Timestamp of the first frame; the animation clock starts there.
    started_at: Option<f64>,
}

/// Scroll position for bringing an element under the navbar, never negative.
pub fn target_position(element_rect_top: f64, current_scroll: f64, offset: f64) -> f64 {
    (element_rect_top + current_scroll - offset).max(0.0)
}

#[derive(Debug, Clone, Default)]
pub struct SmoothScroller {
    config: ScrollConfig,
    next_token: u64,
    active: Option<Animation>,
}

impl SmoothScroller {
    pub fn new(config: ScrollConfig) -> Self {
        SmoothScroller {
            config,
            next_token: 0,
            active: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn is_scrolling(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_token(&self) -> Option<ScrollToken> {
        self.active.map(|a| a.token)
    }

    /// Starts scrolling from `current` to `target`, replacing any running animation.
    pub fn scroll_to(&mut self, current: f64, target: f64) -> ScrollStart {
        self.cancel();

        if (target - current).abs() < self.config.min_distance {
            return ScrollStart::Immediate { position: target };
        }

        self.next_token += 1;
        let token = ScrollToken(self.next_token);
        self.active = Some(Animation {
            token,
            start_position: current,
            target,
            started_at: None,
        });
        ScrollStart::Animated { token, target }
    }

    /// Scrolls so the element whose bounding-rect top is `element_rect_top` lands under the navbar.
    pub fn scroll_to_element(&mut self, element_rect_top: f64, current: f64) -> ScrollStart {
        let target = target_position(element_rect_top, current, self.config.navbar_height);
        self.scroll_to(current, target)
    }

    /// Stops the running animation. Returns its token if one was running.
    pub fn cancel(&mut self) -> Option<ScrollToken> {
        self.active.take().map(|a| a.token)
    }

    pub fn interrupt(&mut self, _intent: ScrollIntent) -> Option<ScrollToken> {
        self.cancel()
    }

    /// Advances the animation to `now_ms`. Returns `None` when idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<ScrollFrame> {
        let animation = self.active.as_mut()?;
        let started_at = *animation.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - started_at;

        if elapsed >= self.config.duration_ms {
            let frame = ScrollFrame {
                token: animation.token,
                position: animation.target,
                finished: true,
            };
            self.active = None;
            return Some(frame);
        }

        let eased = ease_in_out_cubic(progress(elapsed, self.config.duration_ms));
        let distance = animation.target - animation.start_position;
        Some(ScrollFrame {
            token: animation.token,
            position: animation.start_position + distance * eased,
            finished: false,
        })
    }
}
