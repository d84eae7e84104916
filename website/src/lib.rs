pub mod components;
pub mod config;
pub mod pages;
pub mod theme;

use components::download_modal::{provide_download, DownloadDialog};
use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::docs::{DocRoute, DocsIndex, DocsLayout};
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    theme::provide_theme();
    provide_download();

    view! {
        <Title text="EFTDM Framework" />
        <Router>
            <ScrollToTop />
            <div class="min-h-screen flex flex-col bg-slate-50 text-slate-800 dark:bg-slate-950 dark:text-slate-200 selection:bg-blue-500/30 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                    <ParentRoute path=path!("/docs") view=DocsLayout>
                        <Route path=path!("/") view=DocsIndex />
                        <Route path=path!("/:slug") view=DocRoute />
                    </ParentRoute>
                </Routes>
                <Footer />
                <DownloadDialog />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
