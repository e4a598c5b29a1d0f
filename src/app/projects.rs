use leptos::prelude::*;

use super::section_header::SectionHeader;
use super::svg::{IconKind, SvgIcon};
use crate::content::{ProjectRecord, SectionId, PROJECTS};

/// A project rendered as a station sign linking out to the project.
#[component]
pub fn ProjectSign(record: ProjectRecord) -> impl IntoView {
    let ProjectRecord {
        title,
        kind,
        description,
        link,
        badge,
        color,
        badge_text,
    } = record;
    let color = color.hex();

    view! {
        <a href=link target="_blank" rel="noopener noreferrer" class="group block mb-8">
            <div class="bg-black border border-neutral-800 hover:border-white transition-colors duration-300 relative overflow-hidden group-hover:bg-neutral-900/30">
                <div class="h-2 w-full" style=format!("background-color: {color}")></div>
                <div class="p-8">
                    <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-6 gap-4">
                        <div class="flex items-center gap-4">
                            <div
                                class=format!(
                                    "w-12 h-12 rounded-full flex items-center justify-center font-bold text-xl shrink-0 {}",
                                    badge_text.class(),
                                )
                                style=format!("background-color: {color}")
                            >
                                {badge.to_string()}
                            </div>
                            <div>
                                <h3 class="text-3xl font-bold text-white group-hover:text-[#FCCC0A] transition-colors duration-300">
                                    {title}
                                </h3>
                                <p class="text-neutral-500 font-bold uppercase text-xs tracking-widest mt-1">
                                    {kind}
                                </p>
                            </div>
                        </div>
                        <div class="hidden md:flex items-center gap-2 text-neutral-500 uppercase text-xs font-bold tracking-widest group-hover:text-white transition-colors">
                            "View" <SvgIcon kind=IconKind::ArrowRight />
                        </div>
                    </div>
                    <div
                        class="ml-0 md:ml-16 border-l-2 pl-4"
                        style=format!("border-color: {color}")
                    >
                        <p class="text-neutral-400 text-lg font-light leading-relaxed max-w-3xl">
                            {description}
                        </p>
                    </div>
                </div>
            </div>
        </a>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=SectionId::Work.anchor() class="bg-black text-white font-helvetica">
            <div class="container mx-auto px-6 md:px-12">
                <SectionHeader title="Selected Work" number="2" />
                <div class="max-w-5xl mx-auto">
                    {PROJECTS.into_iter().map(|record| view! { <ProjectSign record /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView + 'static>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_project_signs_link_out() {
        for record in PROJECTS {
            let html = render(move || view! { <ProjectSign record /> });
            assert!(
                html.contains(&format!(r#"href="{}""#, record.link)),
                "missing link for {}",
                record.title
            );
            assert!(html.contains(r#"target="_blank""#));
            assert!(html.contains(r#"rel="noopener noreferrer""#));
            assert!(html.contains(record.color.hex()));
            assert!(html.contains(record.badge_text.class()));
        }
    }

    #[test]
    fn test_projects_render_in_order() {
        let html = render(|| view! { <Projects /> });
        assert!(html.contains(r#"id="work""#));
        assert!(html.contains("Selected Work"));

        let positions = PROJECTS
            .iter()
            .map(|p| {
                html.find(&format!(r#"href="{}""#, p.link))
                    .unwrap_or_else(|| panic!("{} not rendered", p.title))
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches(r#"target="_blank""#).count(), PROJECTS.len());
    }
}
