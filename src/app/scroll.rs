use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::viewport::{ScrollThreshold, Viewport};

/// The browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        if cfg!(feature = "ssr") {
            return 0.0;
        }
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_to_top(&mut self) {
        if cfg!(feature = "ssr") {
            return;
        }
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    }
}

/// Tracks whether the window is scrolled past `threshold`.
///
/// Each caller gets its own listener. It is registered when the calling component is
/// created and removed when that component's owner is cleaned up.
pub fn use_scroll_past(threshold: ScrollThreshold) -> Signal<bool> {
    track_scroll(
        threshold,
        || BrowserViewport.scroll_offset(),
        |on_scroll| use_event_listener(use_window(), ev::scroll, move |_| on_scroll()),
    )
}

type ScrollHandler = Box<dyn Fn() + Send + Sync>;

/// Seeds the signal from `offset`, hands `listen` the scroll handler and registers the
/// stop function it returns as an owner cleanup.
fn track_scroll<O, L, S>(threshold: ScrollThreshold, offset: O, listen: L) -> Signal<bool>
where
    O: Fn() -> f64 + Send + Sync + 'static,
    L: FnOnce(ScrollHandler) -> S,
    S: FnOnce() + Send + Sync + 'static,
{
    let (past, set_past) = signal(threshold.is_crossed(offset()));

    let stop = listen(Box::new(move || {
        let crossed = threshold.is_crossed(offset());
        if crossed != past.get_untracked() {
            set_past.set(crossed);
        }
    }));
    on_cleanup(stop);

    past.into()
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    };

    use super::*;

    #[derive(Default, Clone)]
    struct FakeWindow {
        offset: Arc<Mutex<f64>>,
        handler: Arc<Mutex<Option<ScrollHandler>>>,
        stopped: Arc<AtomicBool>,
    }

    impl FakeWindow {
        fn track(&self, threshold: ScrollThreshold) -> Signal<bool> {
            let offset = self.offset.clone();
            let handler = self.handler.clone();
            let stopped = self.stopped.clone();
            track_scroll(
                threshold,
                move || *offset.lock().unwrap(),
                move |on_scroll| {
                    *handler.lock().unwrap() = Some(on_scroll);
                    move || stopped.store(true, Ordering::SeqCst)
                },
            )
        }

        fn scroll_to(&self, y: f64) {
            *self.offset.lock().unwrap() = y;
            let handler = self.handler.lock().unwrap();
            (handler.as_ref().expect("listener registered"))();
        }

        fn is_stopped(&self) -> bool {
            self.stopped.load(Ordering::SeqCst)
        }
    }

    #[test]
    fn test_signal_follows_scroll_events() {
        let window = FakeWindow::default();
        let owner = Owner::new();
        let past = owner.with(|| window.track(ScrollThreshold(20.0)));

        assert!(!past.get_untracked());
        window.scroll_to(21.0);
        assert!(past.get_untracked());
        window.scroll_to(20.0);
        assert!(!past.get_untracked());
    }

    #[test]
    fn test_initial_value_reads_current_offset() {
        let window = FakeWindow::default();
        *window.offset.lock().unwrap() = 500.0;
        let owner = Owner::new();
        let past = owner.with(|| window.track(ScrollThreshold(400.0)));
        assert!(past.get_untracked());
    }

    #[test]
    fn test_listener_stops_when_owner_is_cleaned_up() {
        let window = FakeWindow::default();
        let owner = Owner::new();
        owner.with(|| window.track(ScrollThreshold(20.0)));

        assert!(!window.is_stopped());
        owner.cleanup();
        assert!(window.is_stopped());
    }

    #[test]
    fn test_each_caller_gets_its_own_listener() {
        let nav = FakeWindow::default();
        let scroll_top = FakeWindow::default();
        let owner = Owner::new();
        owner.with(|| {
            nav.track(ScrollThreshold(20.0));
            let child = Owner::new();
            child.with(|| scroll_top.track(ScrollThreshold(400.0)));
            child.cleanup();
        });

        assert!(scroll_top.is_stopped());
        assert!(!nav.is_stopped());
        owner.cleanup();
        assert!(nav.is_stopped());
    }
}
