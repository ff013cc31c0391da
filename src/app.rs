mod about;
mod contact;
mod footer;
mod glyph;
mod heading;
mod hero;
mod navbar;
mod portfolio;
mod reveal;
mod scroll;
mod scroll_top;
mod skills;
mod testimonials;

use leptos::prelude::*;
use leptos_meta::*;

use crate::content::{BRAND_SUFFIX, OWNER};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use portfolio::Portfolio;
use scroll_top::ScrollToTop;
use skills::Skills;
use testimonials::Testimonials;

/// HTML document served for every path that is not a static file.
/// The body stays empty: the wasm bundle mounts [`App`] on load.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content={env!("BUILD_TIME")} />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
            </head>
            <body class="font-sans antialiased"></body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER}{BRAND_SUFFIX} - {title}") />
        <Title text="Full Stack Engineer" />
        <Meta
            name="description"
            content="Portfolio of a full stack engineer: skills, recent projects, testimonials and contact details."
        />
        <Page />
    }
}

/// The whole page, top to bottom. Order and presence never change.
#[component]
pub fn Page() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-slate-200">
            <Navbar />
            <Hero />
            <About />
            <Skills />
            <Portfolio />
            <Testimonials />
            <Contact />
            <Footer />
            <ScrollToTop />
        </div>
    }
}

/// Brand mark linking back to the top of the page.
#[component]
fn Brand() -> impl IntoView {
    view! {
        <a href="#home" class="text-2xl font-bold gradient-text">
            {OWNER}
            <span class="text-white">{BRAND_SUFFIX}</span>
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{NAV_LINKS, SECTION_ANCHORS, SKILLS, TESTIMONIALS, TESTIMONIAL_STARS};

    fn render_page() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <Page /> }.to_html())
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle} missing from page"))
    }

    #[test]
    fn test_every_nav_href_has_exactly_one_anchor() {
        let html = render_page();
        for link in NAV_LINKS {
            let anchor = link.anchor().expect("nav links are in-page");
            let id = format!("id=\"{anchor}\"");
            assert_eq!(html.matches(&id).count(), 1, "anchor {anchor}");
        }
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let html = render_page();
        let mut last = position(&html, "<nav");
        for anchor in SECTION_ANCHORS {
            let at = position(&html, &format!("id=\"{anchor}\""));
            assert!(at > last, "{anchor} out of order");
            last = at;
        }
        let footer = position(&html, "<footer");
        assert!(footer > last);
        assert!(position(&html, "aria-label=\"Scroll to top\"") > footer);
    }

    #[test]
    fn test_skill_fill_widths_match_percentages() {
        let html = render_page();
        for skill in SKILLS {
            assert!(html.contains(&skill.name.replace('&', "&amp;")));
            assert!(html.contains(&format!("width: {}%", skill.percentage)));
        }
    }

    #[test]
    fn test_testimonials_show_fixed_rating() {
        let html = render_page();
        assert_eq!(
            html.matches('★').count(),
            TESTIMONIALS.len() * TESTIMONIAL_STARS
        );
    }

    #[test]
    fn test_initial_chrome_is_transparent_and_hidden() {
        let html = render_page();
        assert!(html.contains("bg-transparent py-6"));
        assert!(!html.contains("backdrop-blur-md"));
        let button = position(&html, "aria-label=\"Scroll to top\"");
        let tag_start = html[..button].rfind("<button").expect("scroll control is a button");
        let tag_end = button + position(&html[button..], ">");
        let tag = &html[tag_start..tag_end];
        assert!(tag.contains("aria-hidden=\"true\""));
        assert!(tag.contains("pointer-events-none"));
        assert!(tag.contains("opacity-0"));
    }

    #[test]
    fn test_contact_form_has_no_endpoint() {
        let html = render_page();
        let form = &html[position(&html, "<form")..];
        let open_tag = &form[..position(form, ">")];
        assert!(!open_tag.contains("action="));
    }
}
