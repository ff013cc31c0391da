use leptos::{html, prelude::*};

use super::{
    glyph::Glyph,
    heading::SectionHeading,
    reveal::{use_reveal, Entrance, Reveal},
};
use crate::{
    content::{Skill, SKILLS},
    icons::Icon,
    viewport::stagger_delay_ms,
};

fn fill_class(revealed: bool) -> &'static str {
    if revealed {
        "h-full bg-gradient-to-r from-purple-600 to-blue-500 origin-left transition-transform duration-1000 ease-out scale-x-100"
    } else {
        "h-full bg-gradient-to-r from-purple-600 to-blue-500 origin-left transition-transform duration-1000 ease-out scale-x-0"
    }
}

/// Proportional bar. The width is always the percentage; the reveal grows it from the left.
#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node_ref);

    view! {
        <div node_ref=node_ref class="w-full h-2 bg-slate-800 rounded-full overflow-hidden">
            <div
                class=move || fill_class(revealed.get())
                style=format!("width: {}", skill.fill_width())
            ></div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 md:py-32">
            <div class="max-w-7xl mx-auto px-6">
                <SectionHeading title="Technical Stack" subtitle="Excellence" />

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(idx, skill)| {
                            view! {
                                <Reveal
                                    entrance=Entrance::Grow
                                    delay_ms=stagger_delay_ms(idx)
                                    class="glass-card p-8 rounded-2xl hover:border-purple-500/40 group"
                                >
                                    <div class="flex justify-between items-center mb-6">
                                        <div class="p-3 rounded-xl bg-purple-500/10 text-purple-400 group-hover:bg-purple-500 group-hover:text-white transition-all">
                                            <Glyph icon=Icon::resolve(skill.icon) />
                                        </div>
                                        <span class="text-2xl font-bold text-white">
                                            {skill.fill_width()}
                                        </span>
                                    </div>
                                    <h3 class="text-lg font-semibold mb-4 text-white">{skill.name}</h3>
                                    <SkillBar skill=*skill />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
