use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::section_header::SectionHeader;
use super::svg::{IconKind, SvgIcon};
use crate::content::{SectionId, PROFILE_IMAGE};
use crate::motion::{OnceLatch, FADE_IN};

#[component]
pub fn About() -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(panel_ref);
    let revealed = RwSignal::new(OnceLatch::default());

    Effect::new(move |_| {
        if visible.get() {
            revealed.maybe_update(|latch| {
                let fired = latch.fire();
                if fired {
                    log::debug!("about panel revealed");
                }
                fired
            });
        }
    });

    let panel_style = move || FADE_IN.style(revealed.get().is_fired(), 0.0);

    view! {
        <section id=SectionId::About.anchor() class="py-24 bg-black text-white font-helvetica">
            <div class="container mx-auto px-6 md:px-12">
                <SectionHeader title="About Me" number="1" />
                <div class="grid md:grid-cols-12 gap-16 items-stretch">
                    <div
                        node_ref=panel_ref
                        style=panel_style
                        class="md:col-span-4 lg:col-span-3 relative flex flex-col"
                    >
                        <div class="aspect-[3/4] md:aspect-auto md:h-full bg-neutral-900 transition-all duration-700 relative z-10 border border-neutral-800 w-full">
                            <img
                                src=PROFILE_IMAGE
                                alt="Mahathir"
                                class="w-full h-full object-cover opacity-80"
                            />
                        </div>
                        <div class="absolute top-4 left-4 w-full h-full border border-white/20 z-0"></div>
                    </div>
                    <div class="md:col-span-8 lg:col-span-9 space-y-8 pb-4">
                        <p class="text-2xl font-light leading-snug text-white">
                            "I’m a " <span class="text-[#FCCC0A]">"Software Engineer"</span>
                            " and Hunter College graduate with a B.A. in Computer Science (’25)."
                        </p>
                        <p class="text-lg text-neutral-400 leading-relaxed">
                            "My background is in software engineering and full-stack development — learning algorithms, building systems, and creating web and mobile applications. During college I also explored Computer Vision and Data Science, which pushed me to tackle more complex problems with code."
                        </p>
                        <p class="text-lg text-neutral-400 leading-relaxed">
                            "I also work as an IT Support Assistant at Hunter’s IT Helpdesk, which gives me a real-world view of how people actually use technology and how systems fail. That experience keeps me focused on building software that’s not just technically correct, but reliable, understandable, and easy to support."
                        </p>
                        <div class="grid grid-cols-2 gap-8 mt-8 pt-8 border-t border-neutral-800">
                            <InfoBlock heading="Education">
                                <p class="text-neutral-400">"Hunter College"</p>
                                <p class="text-neutral-500 text-sm">"B.A. Computer Science, 2025"</p>
                            </InfoBlock>
                            <InfoBlock heading="Location">
                                <p class="text-neutral-400 flex items-center gap-2">
                                    <SvgIcon kind=IconKind::MapPin class="text-[#FCCC0A]" />
                                    "New York, NY"
                                </p>
                            </InfoBlock>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoBlock(heading: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-bold uppercase tracking-widest text-xs mb-2">{heading}</h4>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_about_render() {
        let html = Owner::new().with(|| view! { <About /> }.to_html());
        assert!(html.contains(r#"id="about""#));
        assert!(html.contains("About Me"));
        assert!(html.contains(
            "software engineering and full-stack development — learning algorithms, building systems"
        ));
        assert!(html.contains("IT Support Assistant"));
        assert!(html.contains(PROFILE_IMAGE));
        // panel starts hidden until it scrolls into view
        assert!(html.contains("opacity: 0"));
    }
}
