use leptos::prelude::*;

use super::{
    heading::SectionHeading,
    reveal::{Entrance, Reveal},
};
use crate::{
    content::{TESTIMONIALS, TESTIMONIAL_STARS},
    viewport::stagger_delay_ms,
};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="py-20 md:py-32">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading title="Trusted by Leaders" subtitle="Recognition" />

                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(idx, t)| {
                            view! {
                                <Reveal
                                    entrance=Entrance::GrowSlight
                                    delay_ms=stagger_delay_ms(idx)
                                    class="glass-card p-8 rounded-3xl"
                                >
                                    <div class="flex items-center gap-4 mb-6">
                                        <img
                                            src=t.avatar
                                            alt=t.name
                                            class="w-12 h-12 rounded-full border border-purple-500/30 object-cover"
                                        />
                                        <div>
                                            <h4 class="font-bold text-white">{t.name}</h4>
                                            <p class="text-sm text-slate-500">{t.role}</p>
                                        </div>
                                    </div>
                                    <p class="text-slate-400 italic leading-relaxed">
                                        {format!("\"{}\"", t.content)}
                                    </p>
                                    <div class="mt-6 flex text-yellow-500 gap-1">
                                        {(0..TESTIMONIAL_STARS)
                                            .map(|_| view! { <span>"★"</span> })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
