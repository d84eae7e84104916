//! One registry section as a clickable, single-expand accordion
//!
//! Rows come from [`render_section`]; this component only paints them. The
//! [`Accordion`] lives in a signal owned by the section, so every section on a
//! page expands independently and navigating away drops the state.

use ftdm_core::{
    render_section, Accordion, IconName, ItemPrefix, RecordId, SectionKey, SectionOptions,
    SectionRow,
};
use leptos::prelude::*;

use super::badge::{tone_tile, Badge};
use super::icons::{ChevronDown, Icon};

/// A header row with the panel rows that follow it
struct Entry {
    header: SectionRow,
    panel: Vec<SectionRow>,
}

fn group_rows(rows: Vec<SectionRow>) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for row in rows {
        if row.is_header() {
            entries.push(Entry {
                header: row,
                panel: Vec::new(),
            });
        } else if let Some(last) = entries.last_mut() {
            last.panel.push(row);
        }
    }
    entries
}

#[component]
pub fn Section(
    key: SectionKey,
    #[prop(optional)] options: SectionOptions,
    /// Record to show expanded on first render
    #[prop(optional)]
    initially_expanded: Option<RecordId>,
) -> impl IntoView {
    let accordion = RwSignal::new(
        initially_expanded
            .map(Accordion::with_expanded)
            .unwrap_or_default(),
    );

    let toggle = Callback::new(move |id: RecordId| {
        accordion.update(|a| a.toggle(id));
        log::debug!("{}: toggled {}", key.slug(), id.as_str());
    });

    view! {
        <section class="space-y-4" id=key.slug()>
            <h2 class="text-2xl font-bold text-slate-900 dark:text-white">{key.title()}</h2>
            <div class="space-y-3">
                {move || {
                    group_rows(render_section(key, &accordion.get(), options))
                        .into_iter()
                        .map(|entry| view! { <EntryCard entry=entry toggle=toggle /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn EntryCard(entry: Entry, toggle: Callback<RecordId>) -> impl IntoView {
    let SectionRow::Header {
        id,
        label,
        summary,
        icon,
        tone,
        duration,
        expanded,
    } = entry.header
    else {
        return ().into_any();
    };

    let chevron = if expanded {
        "w-5 h-5 text-slate-400 transition-transform rotate-180"
    } else {
        "w-5 h-5 text-slate-400 transition-transform"
    };

    view! {
        <div class="rounded-xl border border-slate-200 bg-white dark:border-slate-800 dark:bg-slate-900/50 overflow-hidden">
            <button
                class="w-full flex items-start gap-4 p-4 text-left hover:bg-slate-50 dark:hover:bg-slate-900 transition-colors"
                aria-expanded=expanded.to_string()
                on:click=move |_| toggle.run(id)
            >
                <div class=format!("shrink-0 w-10 h-10 rounded-lg flex items-center justify-center {}", tone_tile(tone))>
                    <Icon name=icon class="w-5 h-5" />
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex flex-wrap items-center gap-2">
                        <h3 class="font-semibold text-slate-900 dark:text-white">{label}</h3>
                        {duration.map(|d| view! {
                            <Badge tone=tone>
                                <span class="inline-flex items-center gap-1">
                                    <Icon name=IconName::Clock class="w-3 h-3" />
                                    {d}
                                </span>
                            </Badge>
                        })}
                    </div>
                    <p class="text-sm text-slate-600 dark:text-slate-400 mt-1">{summary}</p>
                </div>
                <ChevronDown class=chevron />
            </button>
            {expanded.then(|| view! {
                <div class="px-4 pb-4 pl-[4.5rem] space-y-3 animate-fade-in">
                    {entry.panel.into_iter().map(panel_row).collect_view()}
                </div>
            })}
        </div>
    }
    .into_any()
}

fn panel_row(row: SectionRow) -> AnyView {
    match row {
        SectionRow::Details { text } => view! {
            <p class="text-sm text-slate-700 dark:text-slate-300 leading-relaxed">{text}</p>
        }
        .into_any(),
        SectionRow::SubHeading { label } => view! {
            <h4 class="pt-2 text-sm font-semibold text-blue-600 dark:text-blue-400">{label}</h4>
        }
        .into_any(),
        SectionRow::Item { prefix, text } => {
            let marker = match prefix {
                ItemPrefix::Index(n) => view! {
                    <span class="shrink-0 w-5 h-5 rounded-full bg-blue-500/10 text-blue-600 dark:text-blue-400 text-xs flex items-center justify-center">
                        {n}
                    </span>
                }
                .into_any(),
                ItemPrefix::Icon(name) => view! {
                    <Icon name=name class="shrink-0 w-4 h-4 mt-0.5 text-green-600 dark:text-green-400" />
                }
                .into_any(),
                ItemPrefix::None => view! {
                    <span class="shrink-0 w-1.5 h-1.5 mt-2 rounded-full bg-slate-400"></span>
                }
                .into_any(),
            };
            view! {
                <div class="flex items-start gap-2 text-sm text-slate-600 dark:text-slate-400">
                    {marker}
                    <span>{text}</span>
                </div>
            }
            .into_any()
        }
        SectionRow::EmptyPanel => view! {
            <p class="text-sm italic text-slate-500">"No further details."</p>
        }
        .into_any(),
        SectionRow::Header { .. } => ().into_any(),
    }
}
