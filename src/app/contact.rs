use leptos::prelude::*;

use super::{
    glyph::Glyph,
    reveal::{Entrance, Reveal},
};
use crate::{
    content::{CONTACT_CHANNELS, SOCIALS},
    icons::Icon,
};

const INPUT_CLASS: &str = "w-full bg-slate-900/50 border border-white/10 rounded-xl px-5 py-4 focus:outline-none focus:border-purple-500 transition-all text-white";
const LABEL_CLASS: &str = "text-sm font-medium text-slate-400 ml-1";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 md:py-32 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-16">
                    <Reveal entrance=Entrance::FromLeft>
                        <h4 class="text-purple-500 font-semibold tracking-widest uppercase text-sm mb-2">
                            "Connect"
                        </h4>
                        <h2 class="text-5xl font-bold mb-6">
                            "Let's Discuss Your "
                            <span class="gradient-text">"Future Project"</span>
                        </h2>
                        <p class="text-slate-400 text-lg mb-10 leading-relaxed">
                            "Ready to take your digital presence to the next level? Fill out the form or reach out through social channels. I usually respond within 24 hours."
                        </p>

                        <div class="space-y-6">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    view! {
                                        <div class="flex items-center gap-6 group">
                                            <div class="w-14 h-14 rounded-2xl bg-white/5 border border-white/10 flex items-center justify-center text-purple-400 group-hover:bg-purple-500 group-hover:text-white transition-all">
                                                <Glyph icon=channel.icon />
                                            </div>
                                            <div>
                                                <p class="text-sm text-slate-500 font-medium">
                                                    {channel.label}
                                                </p>
                                                <p class="text-lg font-bold">{channel.value}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="mt-12 flex gap-4">
                            {SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class="w-12 h-12 rounded-xl bg-white/5 border border-white/10 flex items-center justify-center hover:bg-purple-600 transition-all"
                                        >
                                            <Glyph icon=social.icon size=20 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal entrance=Entrance::FromRight class="glass-card p-8 md:p-10 rounded-3xl">
                        <ContactForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Decorative form: nothing is captured and nothing is sent.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form class="space-y-6" on:submit=move |ev| ev.prevent_default()>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <div class="space-y-2">
                    <label for="contact-name" class=LABEL_CLASS>
                        "Full Name"
                    </label>
                    <input id="contact-name" type="text" placeholder="Jane Doe" class=INPUT_CLASS />
                </div>
                <div class="space-y-2">
                    <label for="contact-email" class=LABEL_CLASS>
                        "Email Address"
                    </label>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="jane@company.com"
                        class=INPUT_CLASS
                    />
                </div>
            </div>
            <div class="space-y-2">
                <label for="contact-subject" class=LABEL_CLASS>
                    "Subject"
                </label>
                <input
                    id="contact-subject"
                    type="text"
                    placeholder="How can I help you?"
                    class=INPUT_CLASS
                />
            </div>
            <div class="space-y-2">
                <label for="contact-details" class=LABEL_CLASS>
                    "Project Details"
                </label>
                <textarea
                    id="contact-details"
                    rows="5"
                    placeholder="Tell me more about the project scope..."
                    class=format!("{INPUT_CLASS} resize-none")
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-purple-600 hover:bg-purple-700 text-white font-bold py-5 rounded-xl flex items-center justify-center gap-3 transition-all transform active:scale-[0.98]"
            >
                "Start Collaboration"
                <Glyph icon=Icon::Send size=20 />
            </button>
        </form>
    }
}
