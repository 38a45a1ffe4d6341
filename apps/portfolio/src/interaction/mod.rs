// Headless page behaviour: pure state machines over explicit geometry and timestamps.
// Only the visibility selector is served over HTTP; the rest is driven by `controller`.
#![allow(dead_code)]

pub mod accordion;
pub mod controller;
pub mod counter;
pub mod easing;
pub mod handlers;
pub mod hearts;
pub mod modal;
pub mod scheduler;
pub mod scroll;
pub mod slideshow;
pub mod typewriter;
pub mod visibility;
