//! Contact form

use crate::api::SubmitInquiry;
use leptos::*;
use lexora_core::{DeliveryOutcome, Field, FormSession, SubmissionStatus};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md bg-neutral-900 border border-neutral-700 text-white placeholder-neutral-500 p-3 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 transition";

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Ime in priimek",
        Field::Email => "E-pošta",
        Field::Phone => "Telefonska številka",
        Field::Message => "Sporočilo",
    }
}

/// Enter `Submitting` and build the relay call, unless one is in flight.
fn begin_relay(session: RwSignal<FormSession>) -> Option<SubmitInquiry> {
    session
        .try_update(FormSession::begin_submit)
        .flatten()
        .map(|inquiry| SubmitInquiry { inquiry })
}

/// Settle the session with what the relay returned.
///
/// A broken relay counts as a failed delivery, so the fields are kept.
fn apply_relay_result(
    session: &mut FormSession,
    result: Result<DeliveryOutcome, ServerFnError>,
) -> SubmissionStatus {
    match result {
        Ok(outcome) => session.settle(&outcome),
        Err(err) => {
            tracing::warn!(%err, "inquiry relay failed");
            session.fail()
        }
    }
}

/// Single-line input bound to one field of the session
#[component]
fn FieldInput(session: RwSignal<FormSession>, field: Field, kind: &'static str) -> impl IntoView {
    view! {
        <div>
            <label for=field.key() class="block text-sm font-medium text-neutral-300">{label(field)}</label>
            <input
                type=kind
                id=field.key()
                name=field.key()
                required=field.is_required()
                class=INPUT_CLASS
                prop:value=move || session.with(|s| s.data().get(field).to_string())
                on:input=move |ev| session.update(|s| s.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// Inquiry form that relays through the `SubmitInquiry` server function.
///
/// Clicking submit while a delivery is in flight does nothing; the form
/// clears only once the relay reports an acknowledgment.
#[component]
pub fn InquiryForm() -> impl IntoView {
    let session = create_rw_signal(FormSession::new());
    let submit = create_server_action::<SubmitInquiry>();

    let status = move || session.with(FormSession::status);

    create_effect(move |_| {
        if let Some(result) = submit.value().get() {
            session.update(|session| {
                apply_relay_result(session, result);
            });
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(relay) = begin_relay(session) {
            submit.dispatch(relay);
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <FieldInput session=session field=Field::Name kind="text"/>
            <FieldInput session=session field=Field::Email kind="email"/>
            <FieldInput session=session field=Field::Phone kind="tel"/>

            <div>
                <label for=Field::Message.key() class="block text-sm font-medium text-neutral-300">
                    {label(Field::Message)}
                </label>
                <textarea
                    id=Field::Message.key()
                    name=Field::Message.key()
                    rows=4
                    required=Field::Message.is_required()
                    class=INPUT_CLASS
                    prop:value=move || session.with(|s| s.data().message.clone())
                    on:input=move |ev| session.update(|s| s.set_field(Field::Message, event_target_value(&ev)))
                ></textarea>
            </div>

            <div class="text-center">
                <button
                    type="submit"
                    disabled=move || !status().accepts_submit()
                    class="px-8 py-3 rounded-lg bg-blue-600 hover:bg-blue-500 text-white font-semibold transition disabled:opacity-70 disabled:cursor-not-allowed"
                >
                    {move || if status() == SubmissionStatus::Submitting {
                        "Pošiljam..."
                    } else {
                        "Pošlji povpraševanje"
                    }}
                </button>

                <Show when=move || status() == SubmissionStatus::Success>
                    <p class="mt-4 text-sm text-green-400">"✅ Hvala! Vaše povpraševanje smo prejeli."</p>
                </Show>
                <Show when=move || status() == SubmissionStatus::Error>
                    <p class="mt-4 text-sm text-red-400">"⚠️ Prišlo je do napake. Poskusite znova."</p>
                </Show>

                // Contact details
                <div class="mt-10 pt-6 border-t border-neutral-800">
                    <p class="text-sm text-neutral-400 font-bold mb-2 uppercase tracking-wide">"Kontakt"</p>
                    <div class="flex flex-col items-center gap-1 text-sm text-neutral-400">
                        <p>"Telefon: " <a href="tel:+38668686880" class="font-medium text-blue-100">"068 686 880"</a></p>
                        <p>"Mail: " <a href="mailto:jan@lexora.si" class="font-medium text-blue-100">"jan@lexora.si"</a></p>
                    </div>
                </div>
            </div>
        </form>
    }
}
