use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::icons::{Check, Copy};

const COPIED_FLASH: Duration = Duration::from_secs(2);

/// Command with a copy-to-clipboard button
#[component]
pub fn CodeBlock(
    #[prop(into)] code: String,
    #[prop(default = "bash")] language: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let text = StoredValue::new(code.clone());

    let handle_copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text.get_value());
        leptos::task::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    set_copied.set(true);
                    set_timeout(move || set_copied.set(false), COPIED_FLASH);
                }
                Err(e) => log::warn!("clipboard write failed: {e:?}"),
            }
        });
    };

    view! {
        <div class="relative group rounded-lg overflow-hidden bg-slate-900 border border-slate-800 my-4">
            <div class="flex justify-between items-center px-4 py-2 bg-slate-800/50 border-b border-slate-800">
                <span class="text-xs text-slate-400 font-mono">{language}</span>
                <button
                    on:click=handle_copy
                    class="text-slate-400 hover:text-white transition-colors"
                    title="Copy"
                >
                    {move || {
                        if copied.get() {
                            view! { <Check class="w-4 h-4 text-green-400" /> }.into_any()
                        } else {
                            view! { <Copy class="w-4 h-4" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <div class="p-4 overflow-x-auto">
                <pre class="text-sm font-mono text-slate-300">{code}</pre>
            </div>
        </div>
    }
}
