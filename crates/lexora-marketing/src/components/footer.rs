//! Site footer

use super::nav::SECTION_LINKS;
use chrono::Datelike;
use leptos::*;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("LinkedIn", "https://www.linkedin.com/company/lexora-si/"),
    ("X", "https://x.com/LexoraAI"),
    ("YouTube", "https://www.youtube.com/@LexoraAI-e3o9z"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-white/10 bg-neutral-950 py-12">
            <div class="mx-auto max-w-7xl px-4 lg:px-6 flex flex-col md:flex-row gap-8 justify-between">
                <div>
                    <span class="font-serif text-2xl text-white">"Lexora"</span>
                    <p class="mt-2 text-sm text-neutral-500">
                        {format!("© {year} Lexora")}
                    </p>
                </div>

                <nav class="flex gap-6 text-sm text-neutral-400">
                    {SECTION_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href class="hover:text-white transition">{*label}</a>
                    }).collect::<Vec<_>>()}
                </nav>

                <div class="flex gap-6 text-sm text-neutral-400">
                    {SOCIAL_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href target="_blank" rel="noopener noreferrer" class="hover:text-white transition">
                            {*label}
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
