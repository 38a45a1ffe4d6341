//! Floating hearts burst, spawned by clicking the footer heart.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const HEART_COUNT: usize = 20;
pub const SPAWN_STAGGER_MS: f64 = 30.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Heart {
    pub spawn_at_ms: f64,
    pub x: f64,
    pub y: f64,
    /// Horizontal drift applied over the animation, in [-150, 150).
    pub drift_x: f64,
    pub size_rem: f64,
    pub duration_ms: f64,
    pub rotation_deg: f64,
}

impl Heart {
    pub fn remove_at_ms(&self) -> f64 {
        self.spawn_at_ms + self.duration_ms
    }

    pub fn is_alive(&self, now_ms: f64) -> bool {
        now_ms >= self.spawn_at_ms && now_ms < self.remove_at_ms()
    }
}

/// Generates one burst anywhere in a `width` × `height` viewport, starting at `now_ms`.
pub fn burst<R: Rng>(rng: &mut R, width: f64, height: f64, now_ms: f64) -> Vec<Heart> {
    (0..HEART_COUNT)
        .map(|i| Heart {
            spawn_at_ms: now_ms + i as f64 * SPAWN_STAGGER_MS,
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            drift_x: (rng.gen::<f64>() - 0.5) * 300.0,
            size_rem: 1.2 + rng.gen::<f64>() * 0.8,
            duration_ms: (1.5 + rng.gen::<f64>() * 1.5) * 1000.0,
            rotation_deg: rng.gen::<f64>() * 360.0,
        })
        .collect()
}

/// Live hearts across bursts; expired ones are dropped on each tick.
#[derive(Debug, Clone, Default)]
pub struct HeartField {
    hearts: Vec<Heart>,
}

impl HeartField {
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, width: f64, height: f64, now_ms: f64) {
        self.hearts.extend(burst(rng, width, height, now_ms));
    }

    /// Drops expired hearts and returns the ones on screen at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Vec<&Heart> {
        self.hearts.retain(|h| now_ms < h.remove_at_ms());
        self.hearts.iter().filter(|h| h.is_alive(now_ms)).collect()
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn clear(&mut self) {
        self.hearts.clear();
    }
}
