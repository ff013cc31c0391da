use leptos::prelude::*;

use super::{
    glyph::Glyph,
    scroll::{use_scroll_past, BrowserViewport},
};
use crate::{
    icons::Icon,
    viewport::{Viewport, SCROLL_TOP_THRESHOLD},
};

fn scroll_top_class(visible: bool) -> &'static str {
    if visible {
        "fixed bottom-8 right-8 w-14 h-14 bg-purple-600 rounded-2xl flex items-center justify-center shadow-2xl shadow-purple-600/20 text-white hover:bg-purple-700 z-40 transition-all duration-300 opacity-100 scale-100"
    } else {
        "fixed bottom-8 right-8 w-14 h-14 bg-purple-600 rounded-2xl flex items-center justify-center shadow-2xl shadow-purple-600/20 text-white hover:bg-purple-700 z-40 transition-all duration-300 opacity-0 scale-50 pointer-events-none"
    }
}

/// Floating control that appears past [`SCROLL_TOP_THRESHOLD`].
/// Keeps its own scroll subscription so it can come and go independently of the navbar.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_scroll_past(SCROLL_TOP_THRESHOLD);

    view! {
        <button
            class=move || scroll_top_class(visible.get())
            aria-label="Scroll to top"
            aria-hidden=move || (!visible.get()).to_string()
            tabindex=move || if visible.get() { "0" } else { "-1" }
            on:click=move |_| BrowserViewport.scroll_to_top()
        >
            <Glyph icon=Icon::ChevronUp size=28 />
        </button>
    }
}
