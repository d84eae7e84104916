//! Framework download dialog
//!
//! State lives in a [`DownloadModal`] inside a signal shared through
//! [`DownloadContext`], so any button on the page can open it. The simulated
//! download is a single timer whose handle is kept next to the modal; closing
//! the dialog or unmounting it clears the timer, and a late callback is
//! dropped by the ticket check in [`DownloadModal::complete`].

use std::time::Duration;

use ftdm_core::{
    file_tree, ActionOutcome, ActionTicket, AuthGate, Completion, DownloadModal, IconName,
    FRAMEWORK_TREE,
};
use leptos::ev;
use leptos::prelude::*;

use super::code_block::CodeBlock;
use super::file_tree::FileTree;
use super::icons::{EyeOff, Github, Icon, Loader, X};
use crate::config;

/// Handle for opening the dialog from anywhere below the app root
#[derive(Debug, Clone, Copy)]
pub struct DownloadContext {
    modal: RwSignal<DownloadModal>,
}

impl DownloadContext {
    pub fn open(&self) {
        self.modal.update(DownloadModal::open);
    }
}

pub fn provide_download() -> DownloadContext {
    let ctx = DownloadContext {
        modal: RwSignal::new(DownloadModal::new(config::download_policy())),
    };
    provide_context(ctx);
    ctx
}

pub fn use_download() -> DownloadContext {
    expect_context::<DownloadContext>()
}

fn open_archive() -> ActionOutcome {
    let window = web_sys::window().ok_or_else(|| "Download failed. No browser window".to_string())?;
    match window.open_with_url_and_target(config::ARCHIVE_URL, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("Download failed. The popup was blocked".to_string()),
        Err(e) => Err(format!("Download failed. {e:?}")),
    }
}

#[component]
pub fn DownloadDialog() -> impl IntoView {
    let DownloadContext { modal } = use_download();
    let timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    let clear_timer = move || {
        timer.try_update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    let finish = move |ticket: ActionTicket, outcome: ActionOutcome| {
        timer.set_value(None);
        let completion = modal.try_update(|m| m.complete(ticket, outcome));
        match completion {
            Some(Completion::Failed) => log::warn!("download {ticket} failed"),
            Some(Completion::Ignored) => log::debug!("download {ticket} finished after close"),
            Some(_) => log::info!("download {ticket} done"),
            None => {}
        }
    };

    let schedule = move |ticket: ActionTicket, delay: Duration, then: Box<dyn FnOnce()>| {
        match set_timeout_with_handle(then, delay) {
            Ok(handle) => timer.set_value(Some(handle)),
            Err(e) => finish(ticket, Err(format!("Download failed. {e:?}"))),
        }
    };

    let start = move || {
        let Some(ticket) = modal.try_update(DownloadModal::start_action).flatten() else {
            return;
        };
        log::info!("download {ticket} started");

        schedule(
            ticket,
            config::SIMULATED_DELAY,
            Box::new(move || {
                let outcome = open_archive();
                let auto_close = modal
                    .try_with_untracked(|m| m.policy().auto_close_on_success)
                    .unwrap_or(false);
                if outcome.is_ok() && auto_close {
                    schedule(
                        ticket,
                        config::AUTO_CLOSE_DELAY,
                        Box::new(move || finish(ticket, Ok(()))),
                    );
                } else {
                    finish(ticket, outcome);
                }
            }),
        );
    };

    let close = move || {
        clear_timer();
        if let Some(ticket) = modal.try_update(DownloadModal::close).flatten() {
            log::info!("download {ticket} cancelled");
        }
    };

    on_cleanup(clear_timer);

    let is_open = move || modal.with(DownloadModal::is_open);
    let is_locked = move || modal.with(DownloadModal::is_locked);

    let handle_keydown = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" && modal.with_untracked(DownloadModal::is_open) {
            close();
        }
    });
    on_cleanup(move || handle_keydown.remove());

    view! {
        <Show when=is_open>
            <div
                class="fixed inset-0 z-[60] flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm"
                on:click=move |_| close()
            >
                <div
                    class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-2xl border border-slate-200 bg-white p-6 shadow-2xl dark:border-slate-800 dark:bg-slate-900"
                    role="dialog"
                    aria-modal="true"
                    on:click=|e| e.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 text-slate-400 hover:text-slate-900 dark:hover:text-white"
                        title="Close"
                        on:click=move |_| close()
                    >
                        <X class="w-5 h-5" />
                    </button>

                    <h2 class="flex items-center gap-2 text-2xl font-bold text-slate-900 dark:text-white mb-4">
                        <Icon name=IconName::Download class="w-6 h-6 text-blue-500" />
                        "Download EFTDM Framework"
                    </h2>

                    <Show
                        when=is_locked
                        fallback=move || view! { <DownloadBody modal=modal start=Callback::new(move |()| start()) /> }
                    >
                        <AccessGate modal=modal />
                    </Show>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AccessGate(modal: RwSignal<DownloadModal>) -> impl IntoView {
    let input = move || match modal.with(|m| m.gate().clone()) {
        AuthGate::Locked { input, .. } => input,
        AuthGate::Open => String::new(),
    };
    let reveal = move || modal.with(|m| matches!(m.gate(), AuthGate::Locked { reveal: true, .. }));
    let error = move || match modal.with(|m| m.gate().clone()) {
        AuthGate::Locked { error, .. } => error,
        AuthGate::Open => None,
    };

    let submit = move || {
        if !modal.try_update(DownloadModal::submit_code).unwrap_or(false) {
            log::info!("access code rejected");
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center gap-3 rounded-lg border border-amber-500/30 bg-amber-500/10 p-4">
                <Icon name=IconName::Lock class="w-5 h-5 text-amber-600 dark:text-amber-400" />
                <div>
                    <p class="font-semibold text-slate-900 dark:text-white">"Password Protected Download"</p>
                    <p class="text-sm text-slate-600 dark:text-slate-400">
                        "Enter the password to access the complete EFTDM Framework download."
                    </p>
                </div>
            </div>

            <div class="relative">
                <input
                    class="w-full rounded-lg border border-slate-300 bg-white px-4 py-2 pr-10 text-slate-900 dark:border-slate-700 dark:bg-slate-950 dark:text-white"
                    type=move || if reveal() { "text" } else { "password" }
                    placeholder="Enter password"
                    prop:value=input
                    on:input=move |e| modal.update(|m| m.set_code(&event_target_value(&e)))
                    on:keydown=move |e| {
                        if e.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button
                    class="absolute right-3 top-1/2 -translate-y-1/2 text-slate-400 hover:text-slate-700 dark:hover:text-slate-200"
                    title="Show password"
                    on:click=move |_| modal.update(DownloadModal::toggle_reveal)
                >
                    {move || if reveal() {
                        view! { <EyeOff class="w-5 h-5" /> }.into_any()
                    } else {
                        view! { <Icon name=IconName::Eye class="w-5 h-5" /> }.into_any()
                    }}
                </button>
            </div>

            {move || error().map(|msg| view! { <p class="text-sm text-red-500">{msg}</p> })}

            <button
                class="w-full rounded-lg bg-blue-600 py-2 font-semibold text-white hover:bg-blue-500 disabled:opacity-50"
                disabled=move || input().trim().is_empty()
                on:click=move |_| submit()
            >
                "Verify Password"
            </button>
        </div>
    }
}

#[component]
fn DownloadBody(modal: RwSignal<DownloadModal>, start: Callback<()>) -> impl IntoView {
    let busy = move || modal.with(DownloadModal::is_busy);
    let error = move || modal.with(|m| m.error().map(str::to_string));
    let files = file_tree::file_count(FRAMEWORK_TREE);

    view! {
        <div class="space-y-5">
            <p class="text-slate-600 dark:text-slate-400">
                "Get the complete framework: stage prompts, validation checklists and \
                 templates for taking raw requirements to a production-ready application."
            </p>

            <div>
                <h3 class="mb-2 font-semibold text-slate-900 dark:text-white">
                    {format!("Framework structure ({files} files)")}
                </h3>
                <FileTree />
            </div>

            <div>
                <h3 class="font-semibold text-slate-900 dark:text-white">"Or clone the repository"</h3>
                <CodeBlock code=config::clone_command() />
            </div>

            {move || error().map(|msg| view! {
                <div class="flex items-center gap-2 rounded-lg border border-red-500/30 bg-red-500/10 p-3 text-sm text-red-600 dark:text-red-400">
                    <Icon name=IconName::XCircle class="w-4 h-4" />
                    {msg}
                </div>
            })}

            <div class="flex flex-col sm:flex-row gap-3">
                <button
                    class="flex-1 flex items-center justify-center gap-2 rounded-lg bg-blue-600 py-3 font-semibold text-white hover:bg-blue-500 disabled:opacity-60 disabled:cursor-wait"
                    disabled=busy
                    on:click=move |_| start.run(())
                >
                    {move || if busy() {
                        view! {
                            <Loader class="w-5 h-5 animate-spin" />
                            "Preparing download..."
                        }
                        .into_any()
                    } else {
                        view! {
                            <Icon name=IconName::Download class="w-5 h-5" />
                            "Download ZIP"
                        }
                        .into_any()
                    }}
                </button>
                <a
                    class="flex-1 flex items-center justify-center gap-2 rounded-lg border border-slate-300 py-3 font-semibold text-slate-800 hover:bg-slate-100 dark:border-slate-700 dark:text-slate-200 dark:hover:bg-slate-800"
                    href=config::REPOSITORY_URL
                    target="_blank"
                    rel="noreferrer"
                >
                    <Github class="w-5 h-5" />
                    "View on GitHub"
                </a>
            </div>
        </div>
    }
}
