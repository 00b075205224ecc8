//! Home page

use crate::components::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="relative pt-24 pb-12 lg:pt-32 lg:pb-24 overflow-hidden min-h-[90vh] flex items-center">
                <div class="absolute -top-24 -left-24 w-[500px] h-[500px] bg-blue-600/10 rounded-full blur-[100px] pointer-events-none"></div>
                <div class="relative z-10 mx-auto max-w-7xl px-6">
                    <div class="inline-flex items-center gap-2 px-3 py-1.5 mb-6 rounded-full border border-blue-500/30 bg-blue-900/10">
                        <span class="h-2 w-2 rounded-full bg-blue-500"></span>
                        <span class="text-xs font-semibold text-blue-300 tracking-wide uppercase">
                            "AI workspace za pravnike"
                        </span>
                    </div>
                    <h1 class="font-serif text-5xl sm:text-6xl md:text-7xl leading-[1.1] tracking-tight mb-6 text-white">
                        "Vaša nova " <br/>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-white to-blue-200">
                            "pravna supermoč."
                        </span>
                    </h1>
                    <p class="text-lg text-neutral-400 max-w-xl mb-8 leading-relaxed">
                        "Vstopi v novo generacijo pravnikov in "
                        <span class="text-blue-300 font-medium">"revolucioniraj svojo prakso"</span>
                        " z umetno inteligenco."
                    </p>
                    <div class="flex flex-wrap items-center gap-4 mb-10">
                        <a href="#contact" class="px-6 py-3.5 rounded-lg bg-blue-600 hover:bg-blue-500 text-white font-semibold transition hover:-translate-y-0.5">
                            "Zanima me!"
                        </a>
                        <a href="#demo" class="px-6 py-3.5 rounded-lg text-sm font-medium text-neutral-300 hover:text-white border border-white/10 hover:border-white/20 hover:bg-white/5 transition">
                            "Oglej si Platformo"
                        </a>
                    </div>
                    <p class="text-xs font-medium text-neutral-500 uppercase tracking-wider">
                        "Narejena za slovenske pravnike 🇸🇮"
                    </p>
                </div>
            </section>

            // Features
            <section id="showcase" class="py-20 md:py-24 bg-neutral-950 border-t border-white/5">
                <div class="mx-auto max-w-6xl px-6">
                    <header class="mb-14">
                        <h2 class="font-serif text-4xl md:text-5xl tracking-tight text-white">"Funkcionalnosti"</h2>
                        <p class="text-neutral-400 mt-4 max-w-2xl">
                            "Vse, kar pravnik potrebuje za hitro raziskavo in odgovore, na enem mestu."
                        </p>
                    </header>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <FeatureCard
                            icon="💬"
                            title="Dokument QA"
                            description="Pogovarjaj se s svojimi dokumenti in pridobi takojšnje odgovore."
                        />
                        <FeatureCard
                            icon="📚"
                            title="Iskanje po zakonodaji"
                            description="Vedno ažurni členi zakonov in predpisi iz PISRS."
                        />
                        <FeatureCard
                            icon="🇪🇺"
                            title="Iskanje po pravu EU"
                            description="Povezava z EUR-Lex direktivami, uredbami in sodbami."
                            upcoming=true
                        />
                        <FeatureCard
                            icon="⚖️"
                            title="Iskanje po sodni praksi"
                            description="Neposreden dostop do baze slovenskih sodb z uporabo naravnega jezika."
                            upcoming=true
                        />
                        <FeatureCard
                            icon="⚙️"
                            title="AI Workflowi"
                            description="Avtomatizirajte kompleksne procese z zaporedjem AI nalog. Od iskanja do priprave končnega dokumenta."
                            upcoming=true
                            wide=true
                        />
                    </div>
                </div>
            </section>

            // Platform preview
            <section id="demo" class="bg-neutral-900 py-20 border-t border-white/5">
                <div class="mx-auto max-w-6xl px-6">
                    <div class="mx-auto max-w-3xl text-center mb-12">
                        <h2 class="font-serif text-3xl md:text-4xl text-white">"Predogled Platforme"</h2>
                        <p class="mt-3 text-neutral-400">"Lexora v akciji."</p>
                    </div>
                    <DemoSlideshow/>
                </div>
            </section>

            // Inquiry
            <section id="contact" class="bg-black py-20">
                <div class="mx-auto max-w-2xl px-6">
                    <h2 class="font-serif text-3xl md:text-4xl text-center mb-6">"Pošljite povpraševanje"</h2>
                    <p class="text-neutral-300 text-center mb-10">
                        "Izpolnite spodnji obrazec in kontaktirali vas bomo v najkrajšem možnem času."
                    </p>
                    <InquiryForm/>
                </div>
            </section>
        </div>
    }
}
