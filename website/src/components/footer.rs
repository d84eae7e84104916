use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::REPOSITORY_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-900 bg-white dark:bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"\u{00A9} 2025 EFTDM Framework. Fast-track development methodology."</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    <A href="/docs" attr:class="hover:text-slate-900 dark:hover:text-white transition-colors">"Documentation"</A>
                    <A href="/docs/quick-start" attr:class="hover:text-slate-900 dark:hover:text-white transition-colors">"Quick Start"</A>
                    <a href=REPOSITORY_URL target="_blank" rel="noreferrer" class="hover:text-slate-900 dark:hover:text-white transition-colors">"GitHub"</a>
                </div>
            </div>
        </footer>
    }
}
