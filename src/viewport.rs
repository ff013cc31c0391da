//! Scroll and visibility rules shared by the page chrome.
//!
//! Everything here is plain data so the thresholds and the reveal latch can be
//! exercised without a browser. The components in `app` wire these rules to
//! window scroll events and intersection observers.

/// A vertical scroll offset that a component reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold(pub f64);

/// Past this offset the navigation bar turns opaque.
pub const NAVBAR_SCROLL_THRESHOLD: ScrollThreshold = ScrollThreshold(20.0);
/// Past this offset the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: ScrollThreshold = ScrollThreshold(400.0);

/// Per-item delay used to stagger list reveals.
pub const STAGGER_STEP_MS: u32 = 100;

impl ScrollThreshold {
    /// Strictly greater than: sitting exactly on the threshold does not count.
    pub fn is_crossed(self, offset: f64) -> bool {
        offset > self.0
    }
}

/// One-shot reveal latch. `previous` is the last latched value (`None` before
/// the first evaluation); once `true` it never goes back.
pub fn latch(previous: Option<bool>, visible: bool) -> bool {
    previous.unwrap_or(false) || visible
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(STAGGER_STEP_MS)
}

/// The scrollable area the page lives in.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;
    fn scroll_to_top(&mut self);
}
