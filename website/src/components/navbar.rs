use ftdm_core::IconName;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::download_modal::use_download;
use super::icons::{Github, Icon, Moon, Sun};
use crate::config::REPOSITORY_URL;
use crate::theme::use_theme;

const LINK: &str = "text-sm font-medium transition-colors text-slate-500 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white";
const LINK_ACTIVE: &str = "text-sm font-medium transition-colors text-slate-900 dark:text-white";

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();
    let theme = use_theme();
    let download = use_download();

    let is_home = move || pathname() == "/";
    let is_docs = move || pathname().starts_with("/docs");

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 group">
                    <span class="w-8 h-8 rounded-lg bg-gradient-to-br from-blue-500 to-purple-600 flex items-center justify-center text-white group-hover:scale-110 transition-transform">
                        <Icon name=IconName::Brain class="w-5 h-5" />
                    </span>
                    <span class="font-bold text-slate-900 dark:text-white text-lg tracking-tight">
                        "EFTDM Framework"
                    </span>
                </A>

                <nav class="flex items-center space-x-6">
                    <A
                        href="/"
                        attr:class=move || if is_home() { LINK_ACTIVE } else { LINK }
                    >
                        <span class="hidden md:inline">"Home"</span>
                    </A>
                    <A
                        href="/docs"
                        attr:class=move || if is_docs() { LINK_ACTIVE } else { LINK }
                    >
                        "Documentation"
                    </A>
                    <button
                        class="hidden sm:flex items-center px-3 py-1.5 text-sm font-semibold rounded-lg bg-blue-600 text-white hover:bg-blue-500 transition-colors"
                        on:click=move |_| download.open()
                    >
                        <Icon name=IconName::Download class="w-4 h-4 mr-1.5" />
                        "Download"
                    </button>
                    <button
                        class="text-slate-500 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white transition-colors"
                        title="Toggle theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || if theme.is_dark() {
                            view! { <Sun class="w-5 h-5" /> }.into_any()
                        } else {
                            view! { <Moon class="w-5 h-5" /> }.into_any()
                        }}
                    </button>
                    <a
                        href=REPOSITORY_URL
                        target="_blank"
                        rel="noreferrer"
                        class="text-slate-500 hover:text-slate-900 dark:text-slate-400 dark:hover:text-white transition-colors"
                    >
                        <Github class="w-5 h-5" />
                    </a>
                </nav>
            </div>
        </header>
    }
}
