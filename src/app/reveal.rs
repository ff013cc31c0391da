use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::viewport::latch;

/// Where an element comes from when it is revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Rise,
    RiseShort,
    FromLeft,
    FromRight,
    Grow,
    GrowSlight,
}

impl Entrance {
    fn hidden_class(self) -> &'static str {
        match self {
            Entrance::Rise => "opacity-0 translate-y-8",
            Entrance::RiseShort => "opacity-0 translate-y-2.5",
            Entrance::FromLeft => "opacity-0 -translate-x-8",
            Entrance::FromRight => "opacity-0 translate-x-8",
            Entrance::Grow => "opacity-0 scale-90",
            Entrance::GrowSlight => "opacity-0 scale-95",
        }
    }
}

const SHOWN: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";

fn reveal_class(base: &str, entrance: Entrance, revealed: bool) -> String {
    let state = if revealed {
        SHOWN
    } else {
        entrance.hidden_class()
    };
    if base.is_empty() {
        format!("transition-all duration-700 ease-out {state}")
    } else {
        format!("transition-all duration-700 ease-out {base} {state}")
    }
}

/// Latches to `true` the first time `target` enters the viewport and stays there.
pub fn use_reveal(target: NodeRef<html::Div>) -> Memo<bool> {
    let visible = use_element_visibility(target);
    Memo::new(move |previous: Option<&bool>| latch(previous.copied(), visible.get()))
}

/// Wraps its children in a block that animates in once, on first viewport entry.
#[component]
pub fn Reveal(
    #[prop(optional)] entrance: Entrance,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(class, entrance, revealed.get())
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
