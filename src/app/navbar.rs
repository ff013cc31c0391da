use leptos::prelude::*;

use super::{glyph::Glyph, scroll::use_scroll_past, Brand};
use crate::{content::NAV_LINKS, icons::Icon, viewport::NAVBAR_SCROLL_THRESHOLD};

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    open: RwSignal<bool>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Click handler for a menu link: selecting any link closes the menu.
    pub fn on_select<E>(self) -> impl Fn(E) + Copy {
        move |_| self.close()
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn nav_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed w-full z-50 transition-all duration-300 bg-slate-950/80 backdrop-blur-md border-b border-white/10 py-4"
    } else {
        "fixed w-full z-50 transition-all duration-300 bg-transparent py-6"
    }
}

// hidden menu is invisible and ignores the pointer for the whole exit transition
fn mobile_menu_class(open: bool) -> &'static str {
    if open {
        "md:hidden absolute top-full left-0 w-full bg-slate-900 border-b border-white/10 p-6 flex flex-col gap-6 transition-all duration-300 opacity-100 translate-y-0 visible"
    } else {
        "md:hidden absolute top-full left-0 w-full bg-slate-900 border-b border-white/10 p-6 flex flex-col gap-6 transition-all duration-300 opacity-0 -translate-y-5 invisible pointer-events-none"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = MobileMenu::new();
    let scrolled = use_scroll_past(NAVBAR_SCROLL_THRESHOLD);

    view! {
        <nav class=move || nav_class(scrolled.get())>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center">
                <Brand />
                <div class="hidden md:flex gap-8 items-center">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="text-sm font-medium hover:text-purple-400 transition-colors uppercase tracking-wider"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="bg-purple-600 hover:bg-purple-700 text-white px-5 py-2.5 rounded-full text-sm font-semibold transition-all"
                    >
                        "Hire Me"
                    </a>
                </div>
                <button
                    class="md:hidden text-white"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.is_open().to_string()
                    on:click=move |_| menu.toggle()
                >
                    {move || {
                        let icon = if menu.is_open() { Icon::X } else { Icon::Menu };
                        view! { <Glyph icon size=28 /> }
                    }}
                </button>
            </div>
            <div
                class=move || mobile_menu_class(menu.is_open())
                aria-hidden=move || (!menu.is_open()).to_string()
            >
                {NAV_LINKS
                    .iter()
                    .map(move |link| {
                        view! {
                            <a
                                href=link.href
                                class="text-lg font-medium hover:text-purple-400"
                                on:click=menu.on_select()
                            >
                                {link.name}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        Owner::new().with(|| {
            let menu = MobileMenu::new();
            assert!(!menu.is_open());
        });
    }

    #[test]
    fn test_toggle_flips_menu() {
        Owner::new().with(|| {
            let menu = MobileMenu::new();
            menu.toggle();
            assert!(menu.is_open());
            menu.toggle();
            assert!(!menu.is_open());
        });
    }

    #[test]
    fn test_default_menu_is_closed() {
        Owner::new().with(|| assert!(!MobileMenu::default().is_open()));
    }

    #[test]
    fn test_selecting_link_closes_menu() {
        Owner::new().with(|| {
            let menu = MobileMenu::new();
            let select = menu.on_select::<()>();
            menu.toggle();
            assert!(menu.is_open());
            select(());
            assert!(!menu.is_open());
            // selecting with the menu already closed leaves it closed
            select(());
            assert!(!menu.is_open());
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_navbar_renders_closed_menu_with_every_link() {
        let html = Owner::new().with(|| view! { <Navbar /> }.to_html());
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("invisible pointer-events-none"));
        for link in NAV_LINKS {
            let href = format!("href=\"{}\"", link.href);
            // desktop and mobile copies
            assert!(html.matches(&href).count() >= 2, "{}", link.href);
        }
    }

    #[test]
    fn test_scrolled_nav_is_opaque() {
        assert!(nav_class(false).contains("bg-transparent"));
        assert!(!nav_class(false).contains("backdrop-blur"));
        assert!(nav_class(true).contains("backdrop-blur-md"));
        assert!(nav_class(true).contains("bg-slate-950/80"));
    }

    #[test]
    fn test_hidden_menu_is_not_interactive() {
        assert!(mobile_menu_class(false).contains("pointer-events-none"));
        assert!(mobile_menu_class(false).contains("invisible"));
        assert!(!mobile_menu_class(true).contains("pointer-events-none"));
        assert!(!mobile_menu_class(true).contains("invisible"));
    }
}
