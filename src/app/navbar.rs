use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::content::{SectionId, OWNER_NAME, RESUME_URL};
use crate::motion::ScrollState;

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = RwSignal::new(ScrollState::default());

    // the listener is removed when this component's owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        scroll.maybe_update(|state| {
            let changed = state.observe(offset);
            if changed {
                log::debug!("navbar compact: {}", state.scrolled);
            }
            changed
        });
    });

    let scroll_to_top = move |_: ev::MouseEvent| window().scroll_to_with_x_and_y(0.0, 0.0);

    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 transition-all duration-300 font-helvetica bg-black border-b border-white {}",
                scroll.get().padding_class(),
            )
        }>
            <div class="container mx-auto px-6 md:px-12 flex justify-between items-center">
                <div class="flex items-center gap-4 cursor-pointer group" on:click=scroll_to_top>
                    <h1 class="text-white font-bold tracking-tight text-3xl md:text-4xl group-hover:text-[#FCCC0A] transition-colors duration-300">
                        {OWNER_NAME}
                    </h1>
                    <div class="flex -space-x-1">
                        <div class="w-8 h-8 md:w-10 md:h-10 rounded-full bg-[#FF6319] flex items-center justify-center text-white font-bold text-lg border-2 border-black z-10 shadow-lg">
                            "M"
                        </div>
                        <div class="w-8 h-8 md:w-10 md:h-10 rounded-full bg-[#FCCC0A] flex items-center justify-center text-black font-bold text-lg border-2 border-black z-0 shadow-lg">
                            "R"
                        </div>
                    </div>
                </div>
                <div class="hidden md:flex items-center gap-8">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="text-neutral-400 font-bold uppercase tracking-widest text-xs hover:text-[#FCCC0A] transition-colors duration-300"
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=RESUME_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-white text-black px-4 py-2 font-bold uppercase text-xs tracking-widest hover:bg-[#FCCC0A] transition-colors"
                    >
                        "Resume"
                    </a>
                </div>
            </div>
        </nav>
    }
}
