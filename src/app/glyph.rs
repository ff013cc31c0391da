use leptos::prelude::*;

use crate::icons::Icon;

fn glyph_class(icon: Icon, extra: &str) -> String {
    if extra.is_empty() {
        icon.class().to_string()
    } else {
        format!("{} {}", icon.class(), extra)
    }
}

/// Icon-font glyph, sized in pixels.
#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <i
            class=glyph_class(icon, class)
            style=format!("font-size: {size}px; line-height: 1")
            aria-hidden="true"
        ></i>
    }
}
