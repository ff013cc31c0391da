use leptos::prelude::*;

use super::{
    glyph::Glyph,
    heading::SectionHeading,
    reveal::Reveal,
};
use crate::{content::PROJECTS, icons::Icon, viewport::stagger_delay_ms};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="py-20 md:py-32 bg-slate-900/30">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading title="Recent Projects" subtitle="Showcase" />

                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(idx, project)| {
                            view! {
                                <Reveal
                                    delay_ms=stagger_delay_ms(idx)
                                    class="group relative rounded-3xl overflow-hidden glass-card border-none"
                                >
                                    <div class="aspect-video overflow-hidden">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                                        />
                                    </div>
                                    <div class="p-8">
                                        <div class="flex gap-2 mb-4">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="text-xs font-semibold px-3 py-1 rounded-full bg-white/5 border border-white/10 text-slate-400">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <h3 class="text-2xl font-bold mb-3 group-hover:text-purple-400 transition-colors">
                                            {project.title}
                                        </h3>
                                        <p class="text-slate-400 mb-6 line-clamp-2 leading-relaxed">
                                            {project.description}
                                        </p>
                                        <div class="flex gap-4">
                                            <a
                                                href=project.demo_url
                                                class="text-sm font-bold flex items-center gap-2 hover:text-purple-400 transition-colors"
                                            >
                                                "Live Preview"
                                                <Glyph icon=Icon::ArrowRight size=16 />
                                            </a>
                                            <a
                                                href=project.github_url
                                                class="text-sm font-bold flex items-center gap-2 hover:text-purple-400 transition-colors"
                                            >
                                                "View Code"
                                                <Glyph icon=Icon::Github size=16 />
                                            </a>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <button class="border border-white/10 hover:border-purple-500/50 bg-white/5 hover:bg-white/10 px-8 py-4 rounded-xl font-bold transition-all inline-flex items-center gap-2">
                        "Explore Full Gallery"
                        <Glyph icon=Icon::ArrowRight size=20 />
                    </button>
                </div>
            </div>
        </section>
    }
}
