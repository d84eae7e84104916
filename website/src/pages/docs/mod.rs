mod page;

use ftdm_core::{Page, NAV_GROUPS};
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::icons::{Icon, Menu};

pub use page::DocPage;

/// Route for a docs page; the introduction sits at the section root
pub fn href(page: Page) -> String {
    match page {
        Page::Introduction => "/docs".to_string(),
        other => format!("/docs/{}", other.slug()),
    }
}

/// Page a docs path points at, if any
fn page_for_path(path: &str) -> Option<Page> {
    Page::ALL.into_iter().find(|p| href(*p) == path.trim_end_matches('/'))
}

#[component]
pub fn DocsLayout() -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = signal(false);
    let location = use_location();
    let pathname = move || location.pathname.get();

    let mobile_label = move || {
        page_for_path(&pathname())
            .map(|p| p.title())
            .unwrap_or("Menu")
    };

    view! {
        <div class="flex flex-col md:flex-row min-h-screen pt-16">
            // Mobile Menu Toggle
            <div class="md:hidden p-4 border-b border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-950 sticky top-16 z-20">
                <button
                    on:click=move |_| set_is_menu_open.update(|v| *v = !*v)
                    class="flex items-center text-slate-600 dark:text-slate-300"
                >
                    <Menu class="w-5 h-5 mr-2" />
                    {mobile_label}
                </button>
            </div>

            // Sidebar
            <aside class=move || {
                let transform = if is_menu_open.get() {
                    "translate-x-0"
                } else {
                    "-translate-x-full"
                };
                format!(
                    "fixed md:sticky top-16 left-0 h-[calc(100vh-4rem)] w-64 bg-white dark:bg-slate-950 \
                     border-r border-slate-200 dark:border-slate-800 shrink-0 self-start \
                     transform {transform} md:translate-x-0 transition-transform duration-200 z-30 \
                     overflow-y-auto"
                )
            }>
                <nav class="p-4 space-y-6">
                    {NAV_GROUPS.iter().map(|group| view! {
                        <div>
                            <h4 class="px-4 mb-2 text-xs font-semibold uppercase tracking-wider text-slate-400 dark:text-slate-500">
                                {group.title}
                            </h4>
                            <div class="space-y-1">
                                {group.pages.iter().map(|page| {
                                    let page = *page;
                                    let target = href(page);
                                    let active_path = target.clone();
                                    view! {
                                        <A
                                            href=target
                                            attr:class=move || {
                                                if pathname().trim_end_matches('/') == active_path {
                                                    "w-full flex items-center px-4 py-2.5 text-sm rounded-lg transition-colors bg-blue-500/10 text-blue-600 dark:text-blue-400 font-medium"
                                                } else {
                                                    "w-full flex items-center px-4 py-2.5 text-sm rounded-lg transition-colors text-slate-600 hover:bg-slate-100 hover:text-slate-900 dark:text-slate-400 dark:hover:bg-slate-900 dark:hover:text-white"
                                                }
                                            }
                                            on:click=move |_| set_is_menu_open.set(false)
                                        >
                                            <Icon name=page.icon() class="w-4 h-4 mr-3" />
                                            {page.title()}
                                        </A>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }).collect_view()}
                </nav>
            </aside>

            // Main Content
            <main class="flex-1 p-6 md:p-12 md:max-w-4xl mx-auto w-full">
                <Outlet />
            </main>
        </div>
    }
}

/// `/docs/:slug`, resolved against the page list
#[component]
pub fn DocRoute() -> impl IntoView {
    let params = use_params_map();
    let page = move || params.with(|p| p.get("slug")).and_then(|s| s.parse::<Page>().ok());

    move || match page() {
        Some(page) => view! { <DocPage page=page /> }.into_any(),
        None => view! {
            <div class="space-y-4">
                <h1 class="text-3xl font-bold text-slate-900 dark:text-white">"Page not found"</h1>
                <A href="/docs" attr:class="text-blue-600 dark:text-blue-400 hover:underline">
                    "Back to the introduction"
                </A>
            </div>
        }
        .into_any(),
    }
}

/// `/docs` itself
#[component]
pub fn DocsIndex() -> impl IntoView {
    view! { <DocPage page=Page::Introduction /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_a_distinct_route() {
        for page in Page::ALL {
            assert_eq!(page_for_path(&href(page)), Some(page));
        }
        assert_eq!(href(Page::Introduction), "/docs");
        assert_eq!(page_for_path("/docs/safeguards/"), Some(Page::Safeguards));
        assert_eq!(page_for_path("/docs/unknown"), None);
    }
}
