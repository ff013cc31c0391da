use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{ABOUT_IMAGE, ABOUT_STATS, COMMITS_BADGE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-32 border-t border-white/5 bg-slate-900/30">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <Reveal class="relative">
                        <div class="aspect-square rounded-3xl overflow-hidden glass-card p-2 max-w-md mx-auto">
                            <img
                                src=ABOUT_IMAGE
                                alt="Work Station"
                                class="w-full h-full object-cover rounded-2xl"
                            />
                        </div>
                        <div class="absolute -bottom-6 -right-6 md:right-12 glass-card p-6 rounded-2xl border-purple-500/30">
                            <p class="text-4xl font-bold text-purple-500">{COMMITS_BADGE.value}</p>
                            <p class="text-sm font-medium text-slate-400">{COMMITS_BADGE.label}</p>
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200>
                        <h4 class="text-purple-500 font-semibold tracking-widest uppercase text-sm mb-2">
                            "My Journey"
                        </h4>
                        <h2 class="text-4xl font-bold mb-6">
                            "Turning Complex Problems Into Elegant Solutions"
                        </h2>
                        <p class="text-slate-400 text-lg mb-6 leading-relaxed">
                            "I'm a full-stack developer with a passion for building software that makes a difference. My work sits at the intersection of powerful backend logic and beautiful frontend interfaces."
                        </p>
                        <p class="text-slate-400 text-lg mb-8 leading-relaxed">
                            "With expertise across the entire web ecosystem, I help startups and established companies launch products that are scalable, secure, and delightful to use."
                        </p>

                        <div class="grid grid-cols-2 gap-4">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="p-4 rounded-xl border border-white/5 bg-white/5 hover:border-purple-500/30 transition-colors">
                                            <p class="text-slate-200 font-bold text-xl">{stat.value}</p>
                                            <p class="text-slate-500 text-sm">{stat.label}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
