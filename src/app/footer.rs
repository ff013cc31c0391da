use leptos::prelude::*;

use super::Brand;
use crate::content::OWNER;

const COPYRIGHT_YEAR: &str = env!("COPYRIGHT_YEAR");

const LEGAL_LINKS: [&str; 2] = ["Privacy", "Terms"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-white/5">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-8">
                <Brand />
                <p class="text-slate-500 text-sm">
                    {format!(
                        "© {COPYRIGHT_YEAR} {OWNER} Developer. All rights reserved. Built with Rust & Leptos.",
                    )}
                </p>
                <div class="flex gap-8">
                    {LEGAL_LINKS
                        .into_iter()
                        .map(|name| {
                            view! {
                                <a
                                    href="#"
                                    class="text-slate-500 hover:text-white transition-colors text-sm"
                                >
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
