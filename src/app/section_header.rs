use leptos::prelude::*;

/// Section title over a white track line ending in a numbered red bullet.
#[component]
pub fn SectionHeader(title: &'static str, number: &'static str) -> impl IntoView {
    view! {
        <div class="mb-20">
            <h2 class="text-white text-5xl md:text-7xl font-bold tracking-tighter mb-6">
                {title} "."
            </h2>
            <div class="flex items-center w-full">
                <div class="h-2 bg-white flex-grow"></div>
                <div class="ml-6 w-16 h-16 rounded-full bg-[#EE352E] flex items-center justify-center text-white font-bold text-3xl border-4 border-white shadow-[0_0_15px_rgba(238,53,46,0.5)]">
                    {number}
                </div>
            </div>
        </div>
    }
}
