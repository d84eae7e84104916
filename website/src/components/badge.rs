use ftdm_core::Tone;
use leptos::prelude::*;

/// Icon tile classes (tinted background plus text colour) for a record's tone
pub fn tone_tile(tone: Tone) -> &'static str {
    match tone {
        Tone::Amber => "bg-amber-500/10 text-amber-600 dark:text-amber-400",
        Tone::Blue => "bg-blue-500/10 text-blue-600 dark:text-blue-400",
        Tone::Cyan => "bg-cyan-500/10 text-cyan-600 dark:text-cyan-400",
        Tone::Emerald => "bg-emerald-500/10 text-emerald-600 dark:text-emerald-400",
        Tone::Fuchsia => "bg-fuchsia-500/10 text-fuchsia-600 dark:text-fuchsia-400",
        Tone::Green => "bg-green-500/10 text-green-600 dark:text-green-400",
        Tone::Indigo => "bg-indigo-500/10 text-indigo-600 dark:text-indigo-400",
        Tone::Lime => "bg-lime-500/10 text-lime-600 dark:text-lime-400",
        Tone::Orange => "bg-orange-500/10 text-orange-600 dark:text-orange-400",
        Tone::Pink => "bg-pink-500/10 text-pink-600 dark:text-pink-400",
        Tone::Purple => "bg-purple-500/10 text-purple-600 dark:text-purple-400",
        Tone::Red => "bg-red-500/10 text-red-600 dark:text-red-400",
        Tone::Rose => "bg-rose-500/10 text-rose-600 dark:text-rose-400",
        Tone::Sky => "bg-sky-500/10 text-sky-600 dark:text-sky-400",
        Tone::Teal => "bg-teal-500/10 text-teal-600 dark:text-teal-400",
        Tone::Violet => "bg-violet-500/10 text-violet-600 dark:text-violet-400",
        Tone::Yellow => "bg-yellow-500/10 text-yellow-600 dark:text-yellow-400",
    }
}

#[component]
pub fn Badge(children: Children, #[prop(optional)] tone: Option<Tone>) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!(
            "px-2 py-0.5 text-xs font-medium rounded border border-current/20 {}",
            tone_tile(tone)
        ),
        None => "px-2 py-0.5 text-xs font-medium rounded border \
                 bg-slate-100 text-slate-600 border-slate-200 \
                 dark:bg-slate-800 dark:text-slate-300 dark:border-slate-700"
            .to_string(),
    };

    view! { <span class=class>{children()}</span> }
}
