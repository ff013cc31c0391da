use leptos::prelude::*;

use super::glyph::Glyph;
use crate::{
    content::{HERO_PORTRAIT, OWNER},
    icons::Icon,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative pt-32 pb-20 md:pt-48 md:pb-32 overflow-hidden">
            <div class="absolute top-0 right-0 -z-10 w-[500px] h-[500px] bg-purple-600/10 blur-[120px] rounded-full"></div>
            <div class="absolute bottom-0 left-0 -z-10 w-[300px] h-[300px] bg-blue-600/10 blur-[120px] rounded-full"></div>

            <div class="max-w-7xl mx-auto px-6 grid md:grid-cols-2 gap-12 items-center">
                // plays on load rather than on viewport entry
                <div class="animate-enter-left">
                    <span class="inline-block px-4 py-1.5 rounded-full bg-purple-500/10 text-purple-400 text-sm font-medium border border-purple-500/20 mb-6">
                        "Full Stack Engineer"
                    </span>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        "I'm " <span class="gradient-text">{OWNER}</span> <br /> "Web Developer"
                    </h1>
                    <p class="text-slate-400 text-lg md:text-xl mb-10 max-w-lg leading-relaxed">
                        "Crafting immersive digital experiences through clean code and innovative design. I build high-performance applications that solve real-world problems."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#portfolio"
                            class="bg-purple-600 hover:bg-purple-700 text-white px-8 py-4 rounded-xl font-bold flex items-center gap-2 transition-all transform hover:-translate-y-1"
                        >
                            "View My Work"
                            <Glyph icon=Icon::ArrowRight size=20 />
                        </a>
                        <button class="border border-white/10 hover:border-purple-500/50 bg-white/5 hover:bg-white/10 px-8 py-4 rounded-xl font-bold flex items-center gap-2 transition-all">
                            "Download Resume"
                            <Glyph icon=Icon::Download size=20 />
                        </button>
                    </div>
                </div>

                <div class="relative flex justify-center md:justify-end animate-enter-scale">
                    <div class="relative w-72 h-72 md:w-96 md:h-96">
                        <div class="absolute inset-0 bg-gradient-to-tr from-purple-600 to-blue-500 rounded-3xl rotate-6 animate-pulse blur-xl opacity-20"></div>
                        <div class="relative w-full h-full rounded-3xl border-2 border-white/10 overflow-hidden glass-card p-2 transform rotate-2 hover:rotate-0 transition-all duration-500">
                            <img
                                src=HERO_PORTRAIT
                                alt=format!("{OWNER} Developer")
                                class="w-full h-full object-cover rounded-2xl grayscale hover:grayscale-0 transition-all duration-500"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
