use leptos::prelude::*;

use crate::content::SectionId;
use crate::motion::{FADE_IN, STAGGER_CONTAINER};

#[component]
pub fn Hero() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);

    // Effects only run in the browser, once per mount. Waiting a frame lets
    // the hidden styles paint first so the transition actually plays.
    Effect::new(move |_| {
        request_animation_frame(move || {
            log::debug!("hero entrance");
            set_mounted.set(true);
        });
    });

    let container_style = move || STAGGER_CONTAINER.style(mounted.get(), 0.0);
    let child_style =
        move |index: usize| move || FADE_IN.style(mounted.get(), STAGGER_CONTAINER.child_delay(index));

    view! {
        <section class="relative min-h-screen flex items-center bg-black text-white font-helvetica">
            <div class="container mx-auto px-6 md:px-12 pt-20">
                <div class="max-w-4xl">
                    <div style=container_style>
                        <div style=child_style(0) class="flex items-center gap-4 mb-8">
                            <div class="h-[2px] w-12 bg-[#FCCC0A]"></div>
                            <span class="text-[#FCCC0A] font-bold uppercase tracking-widest text-xs">
                                "Based in New York City"
                            </span>
                        </div>
                        <h1
                            style=child_style(1)
                            class="text-6xl md:text-8xl font-bold leading-[0.9] tracking-tight mb-8"
                        >
                            "Software Engineer"
                            <br />
                            <span class="text-neutral-600">"Full Stack"</span>
                        </h1>
                        <p
                            style=child_style(2)
                            class="text-xl md:text-2xl font-light text-neutral-300 max-w-2xl leading-relaxed mb-12"
                        >
                            "I create full-stack applications focused on "
                            <strong class="text-white border-b border-[#0039A6]">
                                "clarity, performance, and great user experience."
                            </strong>
                        </p>
                        <div style=child_style(3) class="flex gap-4">
                            <a
                                href=SectionId::Work.href()
                                class="bg-white text-black px-8 py-4 font-bold uppercase tracking-widest text-sm hover:bg-[#FCCC0A] transition-colors"
                            >
                                "View Projects"
                            </a>
                            <a
                                href=SectionId::About.href()
                                class="border border-white text-white px-8 py-4 font-bold uppercase tracking-widest text-sm hover:bg-white hover:text-black transition-colors"
                            >
                                "More About Me"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
