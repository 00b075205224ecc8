//! Platform preview carousel

use leptos::*;
use lexora_core::{Slide, Slideshow, DEFAULT_SLIDE_INTERVAL, SHOWCASE_SLIDES};
use std::time::Duration;

fn advance(slideshow: RwSignal<Slideshow>) {
    slideshow.update(|show| show.state_mut().next());
}

fn retreat(slideshow: RwSignal<Slideshow>) {
    slideshow.update(|show| show.state_mut().previous());
}

/// Cycles through `slides`, advancing every `interval`.
///
/// The timer lives as long as the component. Manual navigation moves the
/// cursor but leaves the timer's phase alone.
#[component]
pub fn DemoSlideshow(
    #[prop(default = SHOWCASE_SLIDES)] slides: &'static [Slide],
    #[prop(default = DEFAULT_SLIDE_INTERVAL)] interval: Duration,
) -> impl IntoView {
    let slideshow = match Slideshow::new(slides) {
        Ok(slideshow) => create_rw_signal(slideshow),
        Err(err) => {
            tracing::warn!(%err, "slideshow not rendered");
            return ().into_view();
        }
    };

    create_effect(move |_| {
        if interval.is_zero() {
            tracing::warn!("slideshow interval is zero, auto-advance disabled");
            return;
        }
        match set_interval_with_handle(move || advance(slideshow), interval) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(?err, "slideshow timer unavailable"),
        }
    });

    let is_active = move |index: usize| slideshow.with(|show| show.state().is_active(index));

    view! {
        <div class="relative rounded-2xl border border-white/10 bg-black shadow-[0_10px_60px_rgba(0,0,0,0.5)] overflow-hidden group aspect-[16/10] md:aspect-[16/9]">
            // Frames
            {slides.iter().enumerate().map(|(index, slide)| view! {
                <div class=move || format!(
                    "absolute inset-0 transition-opacity duration-700 ease-in-out {}",
                    if is_active(index) { "opacity-100 z-10" } else { "opacity-0 z-0" }
                )>
                    <img src=slide.image_ref alt=slide.title class="w-full h-full object-cover opacity-80"/>
                    <div class="absolute bottom-0 inset-x-0 p-6 md:p-10 bg-gradient-to-t from-black via-black/80 to-transparent">
                        <p class="text-white font-serif text-2xl mb-1">{slide.title}</p>
                        <p class="text-neutral-400">{slide.description}</p>
                    </div>
                </div>
            }).collect::<Vec<_>>()}

            // Controls
            <button
                class="absolute left-4 top-1/2 -translate-y-1/2 z-20 w-10 h-10 rounded-full bg-white/10 backdrop-blur hover:bg-white/20 text-white flex items-center justify-center transition"
                aria-label="Prejšnja"
                on:click=move |_| retreat(slideshow)
            >
                "‹"
            </button>
            <button
                class="absolute right-4 top-1/2 -translate-y-1/2 z-20 w-10 h-10 rounded-full bg-white/10 backdrop-blur hover:bg-white/20 text-white flex items-center justify-center transition"
                aria-label="Naslednja"
                on:click=move |_| advance(slideshow)
            >
                "›"
            </button>

            // Indicators
            <div class="absolute top-4 right-4 z-20 flex gap-2">
                {(0..slides.len()).map(|index| view! {
                    <button
                        aria-label=format!("Prosojnica {}", index + 1)
                        class=move || if is_active(index) {
                            "h-2 w-4 rounded-full bg-white transition-all"
                        } else {
                            "h-2 w-2 rounded-full bg-white/40 hover:bg-white transition-all"
                        }
                        on:click=move |_| slideshow.update(|show| show.state_mut().jump_to(index))
                    />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_view()
}
