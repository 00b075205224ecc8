//! Card components for the feature grid

use leptos::*;

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    /// Shows the "Kmalu" badge for features that are not shipped yet.
    #[prop(optional)]
    upcoming: bool,
    /// Spans two grid columns on wide screens.
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let span = if wide { "md:col-span-2" } else { "" };

    view! {
        <div class=format!(
            "relative rounded-2xl bg-white/[0.03] border border-white/10 p-8 hover:border-blue-400/40 transition {span}"
        )>
            {upcoming.then(|| view! {
                <span class="absolute top-6 right-6 rounded-full bg-blue-500/10 border border-blue-400/30 px-3 py-1 text-xs font-medium text-blue-200">
                    "Kmalu"
                </span>
            })}
            <div class="text-3xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-white mb-2">{title}</h3>
            <p class="text-neutral-400 leading-relaxed">{description}</p>
        </div>
    }
}
