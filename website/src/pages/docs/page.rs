use ftdm_core::registry::{self, SectionKey};
use ftdm_core::{IconName, Page, RecordId, STATS};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use super::href;
use crate::components::accordion::Section;
use crate::components::code_block::CodeBlock;
use crate::components::download_modal::use_download;
use crate::components::icons::{ChevronLeft, ChevronRight, Icon};
use crate::config;

/// Record named by `?expand=<id>` if it belongs to `key`
fn expanded_in(key: SectionKey, wanted: Option<&str>) -> Option<RecordId> {
    wanted
        .and_then(|id| registry::find(key, id))
        .map(|record| record.id)
}

/// One docs page: title, lead, then each of its sections as an accordion
#[component]
pub fn DocPage(page: Page) -> impl IntoView {
    let query = use_query_map();
    let expand = query.with_untracked(|q| q.get("expand"));

    view! {
        <Title text=format!("{} | EFTDM Framework", page.title()) />
        <article class="animate-fade-in space-y-10">
            <header class="space-y-4">
                <div class="flex items-center gap-3 text-blue-600 dark:text-blue-400">
                    <Icon name=page.icon() class="w-6 h-6" />
                    <span class="text-sm font-semibold uppercase tracking-wider">"Documentation"</span>
                </div>
                <h1 class="text-4xl font-bold text-slate-900 dark:text-white">{page.title()}</h1>
                <p class="text-lg text-slate-600 dark:text-slate-400">{page.lead()}</p>
            </header>

            {page.shows_stats().then(|| view! { <StatsStrip /> })}

            {page
                .sections()
                .iter()
                .map(|key| {
                    let initially = expanded_in(*key, expand.as_deref());
                    match initially {
                        Some(id) => view! { <Section key=*key initially_expanded=id /> }.into_any(),
                        None => view! { <Section key=*key /> }.into_any(),
                    }
                })
                .collect_view()}

            {(page == Page::QuickStart).then(|| view! { <GetTheFramework /> })}

            <PagerNav page=page />
        </article>
    }
}

#[component]
fn StatsStrip() -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
            {STATS.iter().map(|stat| view! {
                <div class="p-4 rounded-xl border border-slate-200 bg-white dark:border-slate-800 dark:bg-slate-900/50">
                    <div class="flex items-center gap-2 text-blue-600 dark:text-blue-400">
                        <Icon name=stat.icon class="w-4 h-4" />
                        <span class="text-2xl font-bold">{stat.value}</span>
                    </div>
                    <p class="text-sm text-slate-600 dark:text-slate-400 mt-1">{stat.label}</p>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn GetTheFramework() -> impl IntoView {
    let download = use_download();

    view! {
        <section class="space-y-4 rounded-xl border border-blue-500/30 bg-blue-500/5 p-6">
            <h2 class="text-xl font-bold text-slate-900 dark:text-white">"Get the framework"</h2>
            <p class="text-slate-600 dark:text-slate-400">
                "Download the archive, or clone the repository into your project:"
            </p>
            <CodeBlock code=config::clone_command() />
            <button
                class="inline-flex items-center px-5 py-2.5 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-500 transition-colors"
                on:click=move |_| download.open()
            >
                <Icon name=IconName::Download class="w-5 h-5 mr-2" />
                "Download Framework"
            </button>
        </section>
    }
}

/// Previous / next links in sidebar order
#[component]
fn PagerNav(page: Page) -> impl IntoView {
    let previous = page.previous();
    let next = page.next();

    view! {
        <nav class="flex justify-between pt-8 border-t border-slate-200 dark:border-slate-800 text-sm">
            <A href=href(previous) attr:class="flex items-center text-slate-600 hover:text-blue-600 dark:text-slate-400 dark:hover:text-blue-400">
                <ChevronLeft class="w-4 h-4 mr-1" />
                {previous.title()}
            </A>
            <A href=href(next) attr:class="flex items-center text-slate-600 hover:text-blue-600 dark:text-slate-400 dark:hover:text-blue-400">
                {next.title()}
                <ChevronRight class="w-4 h-4 ml-1" />
            </A>
        </nav>
    }
}
