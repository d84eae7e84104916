use ftdm_core::registry::{self, SectionKey};
use ftdm_core::{IconName, Page, STATS};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::badge::tone_tile;
use crate::components::download_modal::use_download;
use crate::components::icons::{ChevronRight, Icon};
use crate::pages::docs::href;

#[component]
pub fn Home() -> impl IntoView {
    let download = use_download();
    let features = registry::records(SectionKey::Features);

    view! {
        <div class="space-y-24 pb-24">
            // Hero Section
            <section class="pt-36 px-6 text-center relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <h1 class="text-5xl md:text-7xl font-black text-slate-900 dark:text-white tracking-tight mb-6">
                        "EFTDM "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-500 to-purple-500">
                            "Framework"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-600 dark:text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                        {Page::Introduction.lead()}
                    </p>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <button
                            class="px-8 py-3 bg-blue-600 text-white font-bold rounded-full hover:bg-blue-500 transition-colors flex items-center"
                            on:click=move |_| download.open()
                        >
                            <Icon name=IconName::Download class="w-5 h-5 mr-2" />
                            "Download Framework"
                        </button>
                        <A
                            href=href(Page::QuickStart)
                            attr:class="px-8 py-3 bg-slate-100 text-slate-900 dark:bg-slate-800 dark:text-white font-bold rounded-full border border-slate-200 dark:border-slate-700 hover:bg-slate-200 dark:hover:bg-slate-700 transition-colors flex items-center"
                        >
                            "Quick Start"
                            <ChevronRight class="w-4 h-4 ml-1" />
                        </A>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-5 gap-6 max-w-4xl w-full">
                        {STATS.iter().map(|stat| view! {
                            <div class="text-center">
                                <div class="text-3xl font-black text-slate-900 dark:text-white">{stat.value}</div>
                                <div class="text-sm text-slate-500">{stat.label}</div>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Features Grid
            <section class="px-6 max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold text-slate-900 dark:text-white mb-4">
                        "Why EFTDM?"
                    </h2>
                    <p class="text-slate-600 dark:text-slate-400">
                        "From raw requirements to a production-ready application, with safeguards at every stage."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {features.iter().map(|feat| view! {
                        <div class="bg-white dark:bg-slate-900/50 border border-slate-200 dark:border-slate-800 p-8 rounded-2xl hover:border-slate-300 dark:hover:border-slate-700 transition-colors">
                            <div class=format!("mb-4 w-12 h-12 rounded-lg flex items-center justify-center {}", tone_tile(feat.visual_tag.tone))>
                                <Icon name=feat.visual_tag.icon class="w-6 h-6" />
                            </div>
                            <h3 class="text-xl font-bold text-slate-900 dark:text-white mb-2">{feat.title}</h3>
                            <p class="text-slate-600 dark:text-slate-400 leading-relaxed">{feat.summary}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
