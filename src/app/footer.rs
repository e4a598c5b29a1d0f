use chrono::{Datelike, Local};
use leptos::prelude::*;

use super::svg::{IconKind, SvgIcon};
use crate::content::{copyright_line, ContactKind, CONTACT_LINKS};

fn contact_icon(kind: ContactKind) -> IconKind {
    match kind {
        ContactKind::Email => IconKind::Mail,
        ContactKind::LinkedIn => IconKind::LinkedIn,
        ContactKind::GitHub => IconKind::GitHub,
    }
}

/// Contact links and copyright. `year` defaults to the current local year.
#[component]
pub fn Footer(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let year = year.unwrap_or_else(|| Local::now().year());

    view! {
        <footer class="bg-white py-20 font-helvetica">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid md:grid-cols-2 gap-12 items-end">
                    <div>
                        <h2 class="text-black text-5xl md:text-7xl font-bold tracking-tighter mb-8">
                            "Let's Connect."
                        </h2>
                        <div class="flex flex-col gap-4">
                            {CONTACT_LINKS
                                .into_iter()
                                .map(|link| {
                                    let (target, rel) = if link.external {
                                        (Some("_blank"), Some("noopener noreferrer"))
                                    } else {
                                        (None, None)
                                    };
                                    view! {
                                        <a
                                            href=link.href
                                            target=target
                                            rel=rel
                                            class="flex items-center gap-3 text-black font-bold uppercase tracking-widest hover:text-[#0039A6] transition-colors"
                                        >
                                            <SvgIcon kind=contact_icon(link.kind) size=20 />
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:text-right">
                        <div class="text-black inline-block border-2 border-black px-6 py-2 mb-4">
                            <span class="font-bold uppercase tracking-widest text-xs">
                                "New York City"
                            </span>
                        </div>
                        <p class="text-neutral-500 text-sm font-bold uppercase">
                            {copyright_line(year)}
                            <br />
                            "Built with Leptos & Tailwind."
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_footer_year_is_injectable() {
        let html = render(|| view! { <Footer year=2031 /> });
        assert!(html.contains("© 2031 Mahathir Rojan."));
    }

    #[test]
    fn test_footer_credit_line() {
        let html = render(|| view! { <Footer year=2025 /> });
        assert!(html.contains("Built with Leptos &amp; Tailwind."));
    }

    #[test]
    fn test_footer_defaults_to_current_year() {
        let year = Local::now().year();
        let html = render(|| view! { <Footer /> });
        assert!(html.contains(&copyright_line(year)));
    }

    #[test]
    fn test_contact_links() {
        let html = render(|| view! { <Footer year=2025 /> });
        assert!(html.contains(r#"href="mailto:mahathir.rojan@gmail.com""#));
        assert!(html.contains(r#"href="https://linkedin.com/in/m-rojan""#));
        assert!(html.contains(r#"href="https://github.com/mahathirrojan""#));
        // mailto stays in the current tab
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), 2);
    }
}
