use leptos::prelude::*;

use super::section_header::SectionHeader;
use crate::content::{SectionId, SkillCategoryRecord, SKILL_CATEGORIES};

#[component]
pub fn SkillSign(record: SkillCategoryRecord) -> impl IntoView {
    let color = format!("background-color: {}", record.color.hex());
    view! {
        <div class="bg-black border border-neutral-800 hover:border-neutral-600 transition-colors">
            <div class="h-1 w-full" style=color.clone()></div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-white tracking-tight mb-6 flex items-center gap-2">
                    <span class="w-2 h-2 rounded-full" style=color></span>
                    {record.title}
                </h3>
                <div class="flex flex-wrap gap-2">
                    {record
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="skill-chip text-xs font-bold tracking-widest px-3 py-1 bg-neutral-900 text-neutral-400 border border-neutral-800">
                                    {*skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.anchor() class="py-24 bg-black text-white font-helvetica">
            <div class="container mx-auto px-6 md:px-12">
                <SectionHeader title="Technical Proficiency" number="3" />
                <div class="grid md:grid-cols-2 lg:grid-cols-2 gap-6 max-w-5xl mx-auto">
                    {SKILL_CATEGORIES
                        .into_iter()
                        .map(|record| view! { <SkillSign record /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
