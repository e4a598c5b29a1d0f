mod about;
mod footer;
mod hero;
mod navbar;
mod projects;
mod section_header;
mod skills;
mod svg;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

pub use about::About;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::{ProjectSign, Projects};
pub use section_header::SectionHeader;
pub use skills::{SkillSign, Skills};

use crate::content::OWNER_NAME;

pub const ICON_PATH: &str = "/icon.png";
pub const ICON_SIZES: &str = "32x32";

const GLOBAL_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@300;400;700;900&display=swap');
.font-helvetica { font-family: 'Inter', sans-serif; }
html { scroll-behavior: smooth; }
"#;

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
                <IconLink />
                <link rel="stylesheet" id="leptos" href="/pkg/subway-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

/// Favicon link for the generated `/icon.png`.
#[component]
fn IconLink() -> impl IntoView {
    view! { <link rel="icon" type="image/png" sizes=ICON_SIZES href=ICON_PATH /> }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER_NAME} | Software Engineer") />
        <Meta
            name="description"
            content="Full-stack software engineer based in New York City."
        />
        <Style id="global">{GLOBAL_STYLE}</Style>

        <Router>
            <main class="bg-black min-h-screen selection:bg-[#FCCC0A] selection:text-black">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The single scrolling page, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <About />
        <Projects />
        <Skills />
        <Footer />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::SectionId;

    #[test]
    fn test_anchors_resolve_to_sections() {
        let owner = Owner::new();
        let (nav, hero, sections) = owner.with(|| {
            (
                view! { <Navbar /> }.to_html(),
                view! { <Hero /> }.to_html(),
                view! {
                    <About />
                    <Projects />
                    <Skills />
                }
                .to_html(),
            )
        });

        for section in SectionId::ALL {
            assert!(
                nav.contains(&format!(r#"href="{}""#, section.href())),
                "navbar misses {}",
                section.label()
            );
            assert!(
                sections.contains(&format!(r#"id="{}""#, section.anchor())),
                "no element for {}",
                section.href()
            );
        }
        assert!(hero.contains(r##"href="#work""##));
        assert!(hero.contains(r##"href="#about""##));
    }

    #[test]
    fn test_initial_render_state() {
        let owner = Owner::new();
        let (nav, hero) = owner.with(|| (view! { <Navbar /> }.to_html(), view! { <Hero /> }.to_html()));

        // unscrolled navbar is in expanded mode
        assert!(nav.contains("py-6"));
        assert!(!nav.contains("py-3"));
        // hero children are staggered by 0.1s before the mount transition
        assert!(hero.contains("ease-out 0.1s"));
        assert!(hero.contains("ease-out 0.3s"));
    }

    #[test]
    fn test_shell_links_icon() {
        let html = Owner::new().with(|| view! { <IconLink /> }.to_html());
        assert!(html.contains(r#"rel="icon""#));
        assert!(html.contains(r#"href="/icon.png""#));
        assert!(html.contains(r#"sizes="32x32""#));
        assert!(html.contains(r#"type="image/png""#));
    }

    #[test]
    fn test_section_header() {
        let html = Owner::new().with(|| view! { <SectionHeader title="About Me" number="1" /> }.to_html());
        assert!(html.contains("About Me"));
        assert!(html.contains(">1<"));
    }
}
