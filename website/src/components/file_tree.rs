use ftdm_core::{FileTreeState, IconName};
use leptos::prelude::*;

use super::icons::{ChevronDown, ChevronRight, FolderOpen, Icon};

/// Collapsible preview of the framework archive
#[component]
pub fn FileTree() -> impl IntoView {
    let tree = RwSignal::new(FileTreeState::default());

    view! {
        <div class="max-h-64 overflow-y-auto rounded-lg border border-slate-200 dark:border-slate-800 bg-slate-50 dark:bg-slate-950 p-3 font-mono text-sm">
            {move || {
                tree.with(FileTreeState::visible_rows)
                    .into_iter()
                    .map(|row| {
                        let indent = format!("padding-left: {}rem", row.depth as f32 * 1.25);
                        let name = row.node.name;
                        if row.node.is_folder() {
                            let path = row.path.clone();
                            view! {
                                <button
                                    class="w-full flex items-center gap-1.5 py-0.5 text-left text-slate-800 dark:text-slate-200 hover:text-blue-600 dark:hover:text-blue-400"
                                    style=indent
                                    on:click=move |_| tree.update(|t| t.toggle_expanded(&path))
                                >
                                    {if row.expanded {
                                        view! {
                                            <ChevronDown class="w-3.5 h-3.5" />
                                            <FolderOpen class="w-4 h-4 text-blue-500" />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <ChevronRight class="w-3.5 h-3.5" />
                                            <Icon name=IconName::Folder class="w-4 h-4 text-blue-500" />
                                        }
                                        .into_any()
                                    }}
                                    <span>{name}</span>
                                </button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div
                                    class="flex items-center gap-1.5 py-0.5 text-slate-600 dark:text-slate-400"
                                    style=indent
                                >
                                    <span class="w-3.5"></span>
                                    <Icon name=IconName::FileText class="w-4 h-4" />
                                    <span>{name}</span>
                                </div>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
