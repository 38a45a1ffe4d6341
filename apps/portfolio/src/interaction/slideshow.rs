//! Continuous achievements slideshow.
//!
//! The track holds the achievement list three times. Translating it by exactly one set's width
//! over a fixed duration and repeating makes the loop seam invisible.
//!
//! The width is measured once after the first layout. Resizes do not trigger a re-measure.

use serde::{Deserialize, Serialize};

pub const TRACK_COPIES: usize = 3;
pub const SLIDE_DURATION_SECS: u32 = 30;
pub const DEFAULT_GAP_PX: f64 = 32.0;

/// Parses a computed CSS `gap` value such as `"32px"` or `"1.5rem"` the way a loose float parse
/// would: leading number only. Falls back to the default gap.
pub fn parse_gap(computed: Option<&str>) -> f64 {
    let Some(raw) = computed else {
        return DEFAULT_GAP_PX;
    };
    let raw = raw.trim();
    let numeric_len = raw
        .char_indices()
        .take_while(|(i, c)| {
            c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))
        })
        .count();
    match raw[..numeric_len].parse::<f64>() {
        Ok(gap) if gap != 0.0 => gap,
        _ => DEFAULT_GAP_PX,
    }
}

/// Width of one full set: the first `set_len` card widths plus the gaps between them.
pub fn one_set_width(card_widths: &[f64], set_len: usize, gap: f64) -> f64 {
    let cards: f64 = card_widths.iter().take(set_len).sum();
    let gaps = gap * set_len.saturating_sub(1) as f64;
    cards + gaps
}

/// CSS parameters applied to the track once measured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideAnimation {
    pub slide_width_px: f64,
    pub duration_secs: u32,
}

impl SlideAnimation {
    /// Inline custom properties for the track element.
    pub fn style(&self) -> String {
        format!(
            "--slide-width: {}px; --animation-duration: {}s;",
            self.slide_width_px, self.duration_secs
        )
    }
}

/// Measures once; later layouts are ignored.
#[derive(Debug, Clone)]
pub struct SlideshowDriver {
    set_len: usize,
    animation: Option<SlideAnimation>,
}

impl SlideshowDriver {
    pub fn new(achievement_count: usize) -> Self {
        SlideshowDriver {
            set_len: achievement_count,
            animation: None,
        }
    }

    pub fn animation(&self) -> Option<&SlideAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Takes the measured card widths of the whole track. Returns the animation the first time
    /// only; an empty track never animates.
    pub fn on_layout(
        &mut self,
        card_widths: &[f64],
        computed_gap: Option<&str>,
    ) -> Option<&SlideAnimation> {
        if self.animation.is_some() || self.set_len == 0 || card_widths.is_empty() {
            return None;
        }
        let gap = parse_gap(computed_gap);
        self.animation = Some(SlideAnimation {
            slide_width_px: one_set_width(card_widths, self.set_len, gap),
            duration_secs: SLIDE_DURATION_SECS,
        });
        self.animation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_set_width_counts_first_set_only() {
        // Three achievements, triplicated track of 9 cards.
        let widths = [300.0; 9];
        assert_eq!(one_set_width(&widths, 3, 32.0), 964.0);
    }

    #[test]
    fn test_single_card_has_no_gap() {
        assert_eq!(one_set_width(&[250.0, 250.0, 250.0], 1, 32.0), 250.0);
    }

    #[test]
    fn test_parse_gap() {
        assert_eq!(parse_gap(Some("24px")), 24.0);
        assert_eq!(parse_gap(Some("normal")), DEFAULT_GAP_PX);
        assert_eq!(parse_gap(Some("0px")), DEFAULT_GAP_PX);
        assert_eq!(parse_gap(None), DEFAULT_GAP_PX);
    }

    #[test]
    fn test_measures_once() {
        let mut driver = SlideshowDriver::new(2);
        let first = driver
            .on_layout(&[100.0, 120.0, 100.0, 120.0, 100.0, 120.0], Some("32px"))
            .cloned();
        assert_eq!(
            first,
            Some(SlideAnimation {
                slide_width_px: 252.0,
                duration_secs: 30
            })
        );
        // A later layout (for example after a resize) is ignored.
        assert!(driver.on_layout(&[50.0; 6], Some("8px")).is_none());
        assert_eq!(driver.animation().map(|a| a.slide_width_px), Some(252.0));
    }

    #[test]
    fn test_empty_list_never_animates() {
        let mut driver = SlideshowDriver::new(0);
        assert!(driver.on_layout(&[], None).is_none());
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_style_string() {
        let anim = SlideAnimation {
            slide_width_px: 964.0,
            duration_secs: 30,
        };
        assert_eq!(anim.style(), "--slide-width: 964px; --animation-duration: 30s;");
    }
}
