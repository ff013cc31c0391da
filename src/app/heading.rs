use leptos::prelude::*;

use super::reveal::{Entrance, Reveal};

#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            <Reveal entrance=Entrance::RiseShort>
                <h4 class="text-purple-500 font-semibold tracking-widest uppercase text-sm mb-2">
                    {subtitle}
                </h4>
            </Reveal>
            <Reveal entrance=Entrance::RiseShort delay_ms=100>
                <h2 class="text-4xl md:text-5xl font-bold">{title}</h2>
            </Reveal>
        </div>
    }
}
