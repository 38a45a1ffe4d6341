//! Interaction Controller — the single owner of every page-behaviour state machine.
//!
//! Created when the page mounts and dropped (or `dispose`d) when it unmounts. Nothing here is
//! global. Input arrives as `PageEvent`s; all time-based work advances in `on_frame`, which is
//! the only scheduler tick.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interaction::accordion::Accordion;
use crate::interaction::counter::StatCounter;
use crate::interaction::easing::ease_in_out_quad;
use crate::interaction::hearts::HeartField;
use crate::interaction::modal::{CloseTrigger, ProjectModal};
use crate::interaction::scheduler::{Debouncer, FrameThrottle};
use crate::interaction::scroll::{ScrollConfig, ScrollIntent, ScrollStart, SmoothScroller};
use crate::interaction::slideshow::{SlideAnimation, SlideshowDriver};
use crate::interaction::typewriter::{Typewriter, TypewriterFrame};
use crate::interaction::visibility::{
    select_active_section, ClassChange, SectionGeometry, SectionVisibility, Selection, Viewport,
};
use crate::models::{Portfolio, Section};

pub const WELCOME_DURATION_MS: f64 = 2500.0;
pub const WELCOME_FADE_MS: f64 = 600.0;
pub const NAVBAR_SCROLLED_AFTER_PX: f64 = 50.0;

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Document-space layout of one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBox {
    pub section: Section,
    pub offset_top: f64,
    pub height: f64,
}

/// Measured page layout. Replaced wholesale on resize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub sections: Vec<SectionBox>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl PageLayout {
    fn offset_of(&self, section: Section) -> Option<f64> {
        self.sections
            .iter()
            .find(|b| b.section == section)
            .map(|b| b.offset_top)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll { scroll_y: f64 },
    Resize { layout: PageLayout },
    NavClick { section: Section },
    Intent { intent: ScrollIntent },
    StatIntersection { index: usize, ratio: f64 },
    SlideshowLayout { card_widths: Vec<f64>, gap: Option<String> },
    AccordionClick { index: usize },
    OpenProject { index: usize },
    CloseProject { trigger: CloseTrigger },
    HamburgerClick,
    HeartClick,
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// Everything the page must change after one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    /// Scroll position to apply this frame.
    pub scroll_to: Option<f64>,
    pub class_changes: Vec<ClassChange>,
    /// `(statistic index, value to display)`.
    pub counters: Vec<(usize, u64)>,
    pub typewriter: Option<TypewriterFrame>,
    pub hearts_on_screen: usize,
    /// Set on the frame the welcome screen finishes and the app becomes visible.
    pub app_revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Welcome,
    Mounted,
    Disposed,
}

pub struct InteractionController {
    lifecycle: Lifecycle,
    welcome_started_at: Option<f64>,
    layout: PageLayout,
    scroll_y: f64,

    visibility: SectionVisibility,
    last_selection: Option<Selection>,
    scroll_throttle: FrameThrottle,
    resize_debounce: Debouncer,
    resize_pending: bool,
    scroller: SmoothScroller,
    /// Short-distance jump to apply on the next frame.
    pending_jump: Option<f64>,

    counters: Vec<StatCounter>,
    slideshow: SlideshowDriver,
    typewriter: Typewriter,
    accordion: Accordion,
    modal: ProjectModal,
    hearts: HeartField,
    hearts_pending: bool,
    rng: StdRng,

    menu_open: bool,
    navbar_scrolled: bool,
}

impl InteractionController {
    pub fn new(portfolio: &Portfolio, layout: PageLayout) -> Self {
        InteractionController {
            lifecycle: Lifecycle::Welcome,
            welcome_started_at: None,
            layout,
            scroll_y: 0.0,
            visibility: SectionVisibility::new(),
            last_selection: None,
            scroll_throttle: FrameThrottle::new(),
            resize_debounce: Debouncer::default(),
            resize_pending: false,
            scroller: SmoothScroller::new(ScrollConfig::default()),
            pending_jump: None,
            counters: portfolio
                .statistics
                .iter()
                .map(|s| StatCounter::new(s.value))
                .collect(),
            slideshow: SlideshowDriver::new(portfolio.achievements.len()),
            typewriter: Typewriter::new(&portfolio.personal_info.title),
            accordion: Accordion::new(portfolio.skills.len()),
            modal: ProjectModal::new(portfolio.projects.len()),
            hearts: HeartField::default(),
            hearts_pending: false,
            rng: StdRng::from_entropy(),
            menu_open: false,
            navbar_scrolled: false,
        }
    }

    /// Replaces the entropy-seeded RNG, for reproducible heart bursts.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    // ── lifecycle ───────────────────────────────────────────────────────────

    /// Starts the welcome screen and the typewriter clock.
    pub fn start(&mut self, now_ms: f64) {
        self.welcome_started_at = Some(now_ms);
        self.typewriter.start(now_ms);
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Stops every animation and drops queued work. Further events and frames are ignored.
    pub fn dispose(&mut self) {
        self.scroller.cancel();
        self.pending_jump = None;
        self.scroll_throttle.clear();
        self.resize_debounce.cancel();
        self.resize_pending = false;
        self.hearts_pending = false;
        self.typewriter.stop();
        self.hearts.clear();
        self.visibility.reset();
        self.lifecycle = Lifecycle::Disposed;
        debug!("Interaction controller disposed");
    }

    // ── queries ─────────────────────────────────────────────────────────────

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn visible_section(&self) -> Option<Section> {
        self.visibility.visible()
    }

    pub fn last_selection(&self) -> Option<&Selection> {
        self.last_selection.as_ref()
    }

    pub fn active_nav_href(&self) -> Option<String> {
        self.visibility.active_nav_href()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_scrolling()
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn modal(&self) -> &ProjectModal {
        &self.modal
    }

    pub fn slide_animation(&self) -> Option<&SlideAnimation> {
        self.slideshow.animation()
    }

    pub fn counter(&self, index: usize) -> Option<&StatCounter> {
        self.counters.get(index)
    }

    /// Eased reading-progress bar fill in [0, 1].
    pub fn scroll_progress(&self) -> f64 {
        scroll_progress(
            self.scroll_y,
            self.layout.document_height,
            self.layout.viewport_height,
        )
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            scroll_y: self.scroll_y,
            height: self.layout.viewport_height,
            navbar_height: self.scroller.config().navbar_height,
        }
    }

    fn geometry(&self) -> Vec<SectionGeometry> {
        self.layout
            .sections
            .iter()
            .map(|b| SectionGeometry::from_layout(b.section, b.offset_top, b.height, self.scroll_y))
            .collect()
    }

    // ── events ──────────────────────────────────────────────────────────────

    pub fn handle(&mut self, event: PageEvent) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }

        match event {
            PageEvent::Scroll { scroll_y } => {
                self.scroll_y = scroll_y.max(0.0);
                self.scroll_throttle.request();
            }
            PageEvent::Resize { layout } => {
                self.layout = layout;
                // Debounced clock is armed on the next frame's timestamp.
                self.resize_pending = true;
            }
            PageEvent::NavClick { section } => {
                self.menu_open = false;
                self.navigate_to(section);
            }
            PageEvent::Intent { intent } => {
                if self.scroller.interrupt(intent).is_some() {
                    self.scroll_throttle.request();
                }
            }
            PageEvent::StatIntersection { index, ratio } => {
                if let Some(counter) = self.counters.get_mut(index) {
                    counter.observe(ratio);
                }
            }
            PageEvent::SlideshowLayout { card_widths, gap } => {
                self.slideshow.on_layout(&card_widths, gap.as_deref());
            }
            PageEvent::AccordionClick { index } => {
                self.accordion.toggle(index);
            }
            PageEvent::OpenProject { index } => {
                self.modal.open(index);
            }
            PageEvent::CloseProject { trigger } => {
                self.modal.close(trigger);
            }
            PageEvent::HamburgerClick => {
                self.menu_open = !self.menu_open;
            }
            PageEvent::HeartClick => {
                self.hearts_pending = true;
            }
        }
    }

    fn navigate_to(&mut self, section: Section) {
        let Some(offset_top) = self.layout.offset_of(section) else {
            return;
        };
        let rect_top = offset_top - self.scroll_y;
        match self.scroller.scroll_to_element(rect_top, self.scroll_y) {
            ScrollStart::Immediate { position } => {
                self.scroll_y = position;
                self.pending_jump = Some(position);
                self.scroll_throttle.request();
            }
            ScrollStart::Animated { .. } => self.pending_jump = None,
        }
    }

    // ── frame ───────────────────────────────────────────────────────────────

    pub fn on_frame(&mut self, now_ms: f64) -> FrameOutput {
        let mut out = FrameOutput::default();

        match self.lifecycle {
            Lifecycle::Disposed => return out,
            Lifecycle::Welcome => {
                let started = *self.welcome_started_at.get_or_insert(now_ms);
                out.typewriter = Some(self.typewriter.tick(now_ms));
                if now_ms - started < WELCOME_DURATION_MS + WELCOME_FADE_MS {
                    return out;
                }
                self.mount();
                out.app_revealed = true;
            }
            Lifecycle::Mounted => {}
        }

        if let Some(position) = self.pending_jump.take() {
            out.scroll_to = Some(position);
        }
        if let Some(frame) = self.scroller.tick(now_ms) {
            self.scroll_y = frame.position;
            out.scroll_to = Some(frame.position);
            self.scroll_throttle.request();
        }

        if std::mem::take(&mut self.resize_pending) {
            self.resize_debounce.trigger(now_ms);
        }
        if self.resize_debounce.poll(now_ms) {
            self.scroll_throttle.request();
        }

        if self.scroll_throttle.take() {
            out.class_changes.extend(self.update_visibility());
        }

        for (index, counter) in self.counters.iter_mut().enumerate() {
            if let Some(value) = counter.tick(now_ms) {
                out.counters.push((index, value));
            }
        }

        out.typewriter = Some(self.typewriter.tick(now_ms));

        if std::mem::take(&mut self.hearts_pending) {
            self.hearts.spawn(
                &mut self.rng,
                self.layout.viewport_width,
                self.layout.viewport_height,
                now_ms,
            );
        }
        out.hearts_on_screen = self.hearts.tick(now_ms).len();

        out
    }

    /// Queues the initial visibility pass for the frame the app is shown.
    fn mount(&mut self) {
        self.lifecycle = Lifecycle::Mounted;
        self.scroll_throttle.request();
        debug!("Interaction controller mounted");
    }

    fn update_visibility(&mut self) -> Vec<ClassChange> {
        self.navbar_scrolled = self.scroll_y > NAVBAR_SCROLLED_AFTER_PX;
        let selection = select_active_section(&self.geometry(), &self.viewport());
        let changes = self.visibility.apply(selection.active);
        self.last_selection = Some(selection);
        changes
    }
}

/// Scroll fraction of the scrollable height, eased for the progress bar. 0 when nothing scrolls.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    let raw = if scrollable > 0.0 {
        (scroll_y / scrollable).min(1.0)
    } else {
        0.0
    };
    ease_in_out_quad(raw)
}
