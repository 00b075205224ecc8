//! Marketing navigation component

use leptos::*;

/// In-page anchors shared by the header and the footer
pub const SECTION_LINKS: [(&str, &str); 3] = [
    ("#showcase", "Funkcije"),
    ("#demo", "Predogled"),
    ("#contact", "Povpraševanje"),
];

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-neutral-950/80 backdrop-blur-md border-b border-white/10">
            <div class="mx-auto max-w-7xl px-4 lg:px-6 h-16 flex items-center justify-between">
                // Logo
                <a href="#" class="font-serif text-2xl tracking-tight text-white hover:text-blue-100 transition">
                    "Lexora"
                </a>

                // Desktop Nav
                <nav class="hidden md:flex items-center gap-8 text-sm text-neutral-300">
                    {SECTION_LINKS.iter().map(|(href, label)| view! {
                        <a href=*href class="hover:text-white transition-colors">{*label}</a>
                    }).collect::<Vec<_>>()}
                </nav>

                <a href="#contact" class="hidden md:inline-flex items-center h-9 px-4 rounded-lg bg-white/5 border border-white/10 hover:bg-white/10 transition text-sm font-medium text-blue-100 hover:text-white">
                    "Kontakt"
                </a>

                // Mobile menu button
                <button
                    class="md:hidden inline-flex h-10 w-10 items-center justify-center rounded hover:bg-white/5"
                    aria-label="Menu"
                    on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                >
                    <Show
                        when=move || mobile_open.get()
                        fallback=|| view! {
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        }
                    >
                        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                        </svg>
                    </Show>
                </button>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="border-t border-white/10 bg-neutral-950/90 backdrop-blur md:hidden">
                    <nav class="mx-auto max-w-7xl px-4 py-4 flex flex-col gap-4 text-base text-neutral-200">
                        {SECTION_LINKS.iter().map(|(href, label)| view! {
                            <a href=*href on:click=move |_| set_mobile_open.set(false)>{*label}</a>
                        }).collect::<Vec<_>>()}
                    </nav>
                </div>
            </Show>
        </header>
    }
}
